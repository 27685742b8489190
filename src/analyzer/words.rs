//! Bag-of-words tokenization.
//!
//! Deliberately naive: lowercase, split on whitespace, keep only Latin
//! letters (Portuguese diacritics included), then drop short and stoplisted
//! tokens. No stemming.

use std::collections::BTreeMap;

use crate::config::AnalyzerConfig;

/// Returns `true` for characters kept in a cleaned token: `a`-`z` and the
/// lowercase Latin-1 letters `à`-`ú`.
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_lowercase() || (('\u{E0}'..='\u{FA}').contains(&c) && c != '\u{F7}')
}

/// Strips everything but word characters from an already-lowercased token.
pub fn clean_token(token: &str) -> String {
    token.chars().filter(|c| is_word_char(*c)).collect()
}

/// Yields the countable words of a message.
pub fn countable_words(content: &str, config: &AnalyzerConfig) -> Vec<String> {
    content
        .to_lowercase()
        .split_whitespace()
        .map(clean_token)
        .filter(|word| word.chars().count() > config.min_word_len && !config.is_stop_word(word))
        .collect()
}

/// Adds a message's countable words to a running tally.
pub fn tally_words(content: &str, config: &AnalyzerConfig, tally: &mut BTreeMap<String, usize>) {
    for word in countable_words(content, config) {
        *tally.entry(word).or_insert(0) += 1;
    }
}
