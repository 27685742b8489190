//! The analysis result handed to presentation layers.
//!
//! [`SessionStats`] is produced once by the analyzer and then only read.
//! Field names serialize exactly as downstream consumers expect them
//! (`chatTitle`, `total_messages`, `longestMessage`, ...).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A word and how often it appeared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    /// The cleaned, lowercased word
    pub word: String,
    /// Occurrences across all in-scope messages
    pub count: usize,
}

/// Author of the longest message and its length in characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LongestMessage {
    /// Author of the message
    pub author: String,
    /// Content length in characters
    pub length: usize,
}

/// An author together with the count that earned them an award.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorCount {
    /// The awarded author, or the "nobody" label
    pub author: String,
    /// Messages that earned the award
    pub count: usize,
}

/// Superlative participants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionAwards {
    /// Who wrote the single longest message
    pub longest_message: LongestMessage,
    /// Who wrote the most messages in the night window
    pub night_owl: AuthorCount,
    /// Who wrote the fewest messages overall
    pub ghost: AuthorCount,
}

/// Statistical summary of one chat for one year.
///
/// Invariants:
/// - `total_messages` equals the sum of `messages_by_author` values
/// - `participant_count` equals the number of `messages_by_author` keys
/// - every award author is a key of `messages_by_author` (the night owl may
///   instead be the "nobody" label when no one wrote at night)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Caller-supplied label, passed through unchanged
    #[serde(rename = "chatTitle")]
    pub chat_title: String,
    /// Messages in the scope year
    pub total_messages: usize,
    /// Distinct authors in the scope year
    pub participant_count: usize,
    /// Earliest and latest message day, formatted alike
    pub date_range: (String, String),
    /// Day with the most messages, earliest on ties
    pub top_active_day: String,
    /// Hour with the most messages, lowest on ties.
    /// Rendered as `"H:00 - (H+1):00"`
    pub most_active_hour: String,
    /// Message count per exact author name
    pub messages_by_author: BTreeMap<String, usize>,
    /// Most frequent words, highest count first
    pub top_words: Vec<WordCount>,
    /// Superlative participants
    pub awards: SessionAwards,
}

/// Compact projection of [`SessionStats`] for a text/image generation
/// service: the handful of facts a prompt needs, nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsDigest {
    /// Messages in the scope year
    pub total_messages: usize,
    /// Distinct authors
    pub participant_count: usize,
    /// Peak hour range
    pub most_active_hour: String,
    /// Busiest day
    pub top_active_day: String,
    /// Up to [`StatsDigest::WORDS`] most frequent words
    pub top_words: Vec<String>,
    /// Up to [`StatsDigest::AUTHORS`] most active authors
    pub top_authors: Vec<String>,
}

impl StatsDigest {
    /// Words included in a digest.
    pub const WORDS: usize = 10;
    /// Authors included in a digest.
    pub const AUTHORS: usize = 3;
}

impl SessionStats {
    /// Authors ordered by message count, most active first.
    ///
    /// Ties are ordered by author name.
    pub fn authors_by_activity(&self) -> Vec<(&str, usize)> {
        let mut authors: Vec<(&str, usize)> = self
            .messages_by_author
            .iter()
            .map(|(author, count)| (author.as_str(), *count))
            .collect();
        authors.sort_by(|a, b| b.1.cmp(&a.1));
        authors
    }

    /// Builds the compact projection used for generative prompts.
    pub fn digest(&self) -> StatsDigest {
        StatsDigest {
            total_messages: self.total_messages,
            participant_count: self.participant_count,
            most_active_hour: self.most_active_hour.clone(),
            top_active_day: self.top_active_day.clone(),
            top_words: self
                .top_words
                .iter()
                .take(StatsDigest::WORDS)
                .map(|w| w.word.clone())
                .collect(),
            top_authors: self
                .authors_by_activity()
                .into_iter()
                .take(StatsDigest::AUTHORS)
                .map(|(author, _)| author.to_string())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SessionStats {
        let messages_by_author: BTreeMap<String, usize> = [("Ana", 3), ("Bia", 7), ("Caio", 7), ("Duda", 1)]
            .into_iter()
            .map(|(a, c)| (a.to_string(), c))
            .collect();
        SessionStats {
            chat_title: "Family".to_string(),
            total_messages: 18,
            participant_count: 4,
            date_range: ("01/01/2024".to_string(), "31/12/2024".to_string()),
            top_active_day: "25/12/2024".to_string(),
            most_active_hour: "21:00 - 22:00".to_string(),
            messages_by_author,
            top_words: (0..12)
                .map(|i| WordCount {
                    word: format!("word{i:02}"),
                    count: 100 - i,
                })
                .collect(),
            awards: SessionAwards {
                longest_message: LongestMessage {
                    author: "Bia".to_string(),
                    length: 420,
                },
                night_owl: AuthorCount {
                    author: "Caio".to_string(),
                    count: 2,
                },
                ghost: AuthorCount {
                    author: "Duda".to_string(),
                    count: 1,
                },
            },
        }
    }

    #[test]
    fn test_authors_by_activity() {
        let stats = sample();
        let authors = stats.authors_by_activity();
        assert_eq!(authors, vec![("Bia", 7), ("Caio", 7), ("Ana", 3), ("Duda", 1)]);
    }

    #[test]
    fn test_digest() {
        let digest = sample().digest();
        assert_eq!(digest.total_messages, 18);
        assert_eq!(digest.top_words.len(), StatsDigest::WORDS);
        assert_eq!(digest.top_words[0], "word00");
        assert_eq!(digest.top_authors, vec!["Bia", "Caio", "Ana"]);
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["chatTitle"], "Family");
        assert_eq!(json["total_messages"], 18);
        assert_eq!(json["date_range"][0], "01/01/2024");
        assert_eq!(json["awards"]["longestMessage"]["length"], 420);
        assert_eq!(json["awards"]["nightOwl"]["author"], "Caio");
        assert_eq!(json["awards"]["ghost"]["count"], 1);
        assert_eq!(json["top_words"][0]["word"], "word00");
        assert_eq!(json["messages_by_author"]["Bia"], 7);
    }
}
