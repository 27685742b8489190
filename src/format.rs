//! Rendering [`SessionStats`] for people and programs.
//!
//! # Example
//!
//! ```rust
//! use chatrecap::format::OutputFormat;
//! use std::str::FromStr;
//!
//! let format = OutputFormat::from_str("text").unwrap();
//! assert_eq!(format, OutputFormat::Text);
//! assert_eq!(format.extension(), "txt");
//! ```

use std::fmt::Write as _;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RecapError, Result};
use crate::stats::SessionStats;

/// Output format for a recap.
///
/// - [`Json`](OutputFormat::Json) - pretty-printed `SessionStats`, field
///   names as consumed by the card renderer
/// - [`Text`](OutputFormat::Text) - a short human-readable report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Text => "txt",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["json", "text"]
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Text => write!(f, "Text"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "text" | "txt" => Ok(OutputFormat::Text),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// Renders stats to a string in the given format.
///
/// # Errors
///
/// Returns an error if JSON is requested without the `json-output` feature.
pub fn render(stats: &SessionStats, format: OutputFormat) -> Result<String> {
    match format {
        #[cfg(feature = "json-output")]
        OutputFormat::Json => Ok(serde_json::to_string_pretty(stats)?),
        OutputFormat::Text => Ok(render_text(stats)),
        #[allow(unreachable_patterns)]
        _ => Err(RecapError::config(format!(
            "output format {format} requires the 'json-output' feature to be enabled"
        ))),
    }
}

/// Renders stats and writes them to `path`.
pub fn write_to_format(stats: &SessionStats, path: impl AsRef<Path>, format: OutputFormat) -> Result<()> {
    let mut rendered = render(stats, format)?;
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    std::fs::write(path.as_ref(), rendered)?;
    tracing::debug!(path = %path.as_ref().display(), %format, "wrote recap");
    Ok(())
}

fn render_text(stats: &SessionStats) -> String {
    let mut out = String::new();
    let awards = &stats.awards;

    // Writing to a String cannot fail.
    let _ = writeln!(out, "{}", stats.chat_title);
    let _ = writeln!(out, "{}", "=".repeat(stats.chat_title.chars().count().max(3)));
    let _ = writeln!(out, "Messages:      {}", stats.total_messages);
    let _ = writeln!(out, "Participants:  {}", stats.participant_count);
    let _ = writeln!(out, "Period:        {} - {}", stats.date_range.0, stats.date_range.1);
    let _ = writeln!(out, "Busiest day:   {}", stats.top_active_day);
    let _ = writeln!(out, "Peak hour:     {}", stats.most_active_hour);

    let _ = writeln!(out, "\nMessages by author:");
    for (author, count) in stats.authors_by_activity() {
        let _ = writeln!(out, "  {author}: {count}");
    }

    if !stats.top_words.is_empty() {
        let _ = writeln!(out, "\nTop words:");
        for (rank, word) in stats.top_words.iter().take(10).enumerate() {
            let _ = writeln!(out, "  {:>2}. {} ({})", rank + 1, word.word, word.count);
        }
    }

    let _ = writeln!(out, "\nAwards:");
    let _ = writeln!(
        out,
        "  Longest message: {} ({} chars)",
        awards.longest_message.author, awards.longest_message.length
    );
    let _ = writeln!(
        out,
        "  Night owl:       {} ({} at night)",
        awards.night_owl.author, awards.night_owl.count
    );
    let _ = write!(
        out,
        "  Ghost:           {} ({} messages)",
        awards.ghost.author, awards.ghost.count
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{AuthorCount, LongestMessage, SessionAwards, WordCount};
    use std::str::FromStr;

    fn sample() -> SessionStats {
        SessionStats {
            chat_title: "Trip".to_string(),
            total_messages: 3,
            participant_count: 2,
            date_range: ("01/03/2024".to_string(), "02/03/2024".to_string()),
            top_active_day: "01/03/2024".to_string(),
            most_active_hour: "2:00 - 3:00".to_string(),
            messages_by_author: [("Ana".to_string(), 2), ("Bia".to_string(), 1)].into_iter().collect(),
            top_words: vec![WordCount {
                word: "praia".to_string(),
                count: 2,
            }],
            awards: SessionAwards {
                longest_message: LongestMessage {
                    author: "Ana".to_string(),
                    length: 12,
                },
                night_owl: AuthorCount {
                    author: "Ana".to_string(),
                    count: 2,
                },
                ghost: AuthorCount {
                    author: "Bia".to_string(),
                    count: 1,
                },
            },
        }
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("TEXT").unwrap(), OutputFormat::Text);
        assert_eq!(OutputFormat::from_str("txt").unwrap(), OutputFormat::Text);
        assert!(OutputFormat::from_str("csv").is_err());
    }

    #[test]
    fn test_format_display_and_default() {
        assert_eq!(OutputFormat::Json.to_string(), "JSON");
        assert_eq!(OutputFormat::Text.to_string(), "Text");
        assert_eq!(OutputFormat::default(), OutputFormat::Json);
    }

    #[test]
    fn test_render_text() {
        let text = render(&sample(), OutputFormat::Text).unwrap();
        assert!(text.starts_with("Trip\n===="));
        assert!(text.contains("Messages:      3"));
        assert!(text.contains("Period:        01/03/2024 - 02/03/2024"));
        assert!(text.contains("   1. praia (2)"));
        assert!(text.contains("Ghost:           Bia (1 messages)"));
        let ana = text.find("  Ana: 2").unwrap();
        let bia = text.find("  Bia: 1").unwrap();
        assert!(ana < bia);
    }

    #[cfg(feature = "json-output")]
    #[test]
    fn test_render_json() {
        let json = render(&sample(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["chatTitle"], "Trip");
        assert_eq!(value["awards"]["nightOwl"]["count"], 2);
    }

    #[test]
    fn test_write_to_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recap.txt");
        write_to_format(&sample(), &path, OutputFormat::Text).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.ends_with("(1 messages)\n"));
    }
}
