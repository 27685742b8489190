//! Configuration types for extraction, parsing and analysis.
//!
//! Every knob that encodes locale- or export-specific knowledge lives here
//! rather than inside the matching code: invisible characters, system-notice
//! markers, the word stoplist, the night-owl window. Adding a locale variant
//! means adding a string to one of these lists.
//!
//! - [`SourceConfig`] - which container entries count as the transcript
//! - [`ParserConfig`] - line cleaning and system-notice rules
//! - [`AnalyzerConfig`] - word tally, awards and date rendering
//! - [`RecapConfig`] - all of the above, loadable from TOML
//!
//! # Example
//!
//! ```rust
//! use chatrecap::config::{AnalyzerConfig, RecapConfig};
//!
//! let config = RecapConfig::from_toml_str(
//!     r#"
//!     [analyzer]
//!     top_words_limit = 10
//!     "#,
//! )?;
//! assert_eq!(config.analyzer.top_words_limit, 10);
//! assert_eq!(config.analyzer.night_hours, AnalyzerConfig::default().night_hours);
//! # Ok::<(), chatrecap::RecapError>(())
//! ```

use std::fs;
use std::ops::Range;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Bidirectional-control and other invisible characters WhatsApp sprinkles
/// into exported lines, plus the byte-order mark.
pub const INVISIBLE_CHARS: &[char] = &[
    '\u{200E}', '\u{200F}', '\u{202A}', '\u{202B}', '\u{202C}', '\u{202D}', '\u{202E}',
    '\u{2066}', '\u{2067}', '\u{2068}', '\u{2069}', '\u{FEFF}',
];

/// Whole-content markers for media stripped from the export.
pub const MEDIA_MARKERS: &[&str] = &["<Media omitted>", "<Mídia oculta>"];

/// Phrases that mark a header-shaped line as group metadata.
///
/// Matched against the author capture, since these notices have no real author.
pub const METADATA_PHRASES: &[&str] = &["changed the subject", "security code"];

/// Words never counted in the word tally.
pub const STOP_WORDS: &[&str] = &[
    "que", "para", "com", "não", "sim", "mas", "por", "você", "audio", "omitted", "media",
    "imagem", "oculta", "arquivo", "figurinha",
];

/// Author reported for the night-owl award when nobody wrote at night.
pub const NOBODY: &str = "Nobody";

/// Configuration for reading the raw transcript out of a source payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Extension a container entry must have to be the transcript (default: `.txt`)
    pub text_extension: String,

    /// Container directories whose entries are never the transcript (default: `__MACOSX`)
    pub ignored_dirs: Vec<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            text_extension: ".txt".to_string(),
            ignored_dirs: vec!["__MACOSX".to_string()],
        }
    }
}

impl SourceConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a directory whose entries are skipped.
    #[must_use]
    pub fn with_ignored_dir(mut self, dir: impl Into<String>) -> Self {
        self.ignored_dirs.push(dir.into());
        self
    }
}

/// Configuration for the transcript parser.
///
/// # Example
///
/// ```rust
/// use chatrecap::config::ParserConfig;
///
/// let config = ParserConfig::new().with_media_marker("<Medien ausgeschlossen>");
/// assert!(config.is_media_marker("<Medien ausgeschlossen>"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Characters removed from every line before matching
    pub invisible_chars: Vec<char>,

    /// Message contents that mark a stripped-media notice (exact match)
    pub media_markers: Vec<String>,

    /// Author-capture phrases that mark a group-metadata notice (substring match)
    pub metadata_phrases: Vec<String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            invisible_chars: INVISIBLE_CHARS.to_vec(),
            media_markers: MEDIA_MARKERS.iter().map(|s| (*s).to_string()).collect(),
            metadata_phrases: METADATA_PHRASES.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a media-omitted marker.
    #[must_use]
    pub fn with_media_marker(mut self, marker: impl Into<String>) -> Self {
        self.media_markers.push(marker.into());
        self
    }

    /// Adds a group-metadata phrase.
    #[must_use]
    pub fn with_metadata_phrase(mut self, phrase: impl Into<String>) -> Self {
        self.metadata_phrases.push(phrase.into());
        self
    }

    /// Returns `true` if `content` is exactly a media-omitted marker.
    pub fn is_media_marker(&self, content: &str) -> bool {
        self.media_markers.iter().any(|m| m == content)
    }

    /// Returns `true` if `author` contains a group-metadata phrase.
    pub fn is_metadata_author(&self, author: &str) -> bool {
        self.metadata_phrases
            .iter()
            .any(|phrase| author.contains(phrase.as_str()))
    }
}

/// Configuration for the analyzer.
///
/// # Example
///
/// ```rust
/// use chatrecap::config::AnalyzerConfig;
///
/// let config = AnalyzerConfig::new()
///     .with_top_words_limit(10)
///     .with_stop_word("kkkk");
/// assert!(config.is_stop_word("kkkk"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Cleaned tokens never counted (default: [`STOP_WORDS`])
    pub stop_words: Vec<String>,

    /// A token is counted only if longer than this many characters (default: 3)
    pub min_word_len: usize,

    /// Maximum entries in `top_words` (default: 50)
    pub top_words_limit: usize,

    /// Hours of day that count towards the night-owl award (default: 0..5)
    pub night_hours: Range<u32>,

    /// `chrono` format for calendar days in the output (default: `%d/%m/%Y`)
    pub date_format: String,

    /// Night-owl author when no message falls in `night_hours` (default: [`NOBODY`])
    pub nobody_label: String,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            stop_words: STOP_WORDS.iter().map(|s| (*s).to_string()).collect(),
            min_word_len: 3,
            top_words_limit: 50,
            night_hours: 0..5,
            date_format: "%d/%m/%Y".to_string(),
            nobody_label: NOBODY.to_string(),
        }
    }
}

impl AnalyzerConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a word to the stoplist.
    #[must_use]
    pub fn with_stop_word(mut self, word: impl Into<String>) -> Self {
        self.stop_words.push(word.into());
        self
    }

    /// Sets the maximum number of top words.
    #[must_use]
    pub fn with_top_words_limit(mut self, limit: usize) -> Self {
        self.top_words_limit = limit;
        self
    }

    /// Sets the night-owl hour window.
    #[must_use]
    pub fn with_night_hours(mut self, hours: Range<u32>) -> Self {
        self.night_hours = hours;
        self
    }

    /// Sets the output date format.
    #[must_use]
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    /// Returns `true` if `word` is on the stoplist.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.iter().any(|w| w == word)
    }

    /// Returns `true` if `hour` falls in the night-owl window.
    pub fn is_night_hour(&self, hour: u32) -> bool {
        self.night_hours.contains(&hour)
    }
}

/// Complete configuration, as read from a TOML file.
///
/// Every section and field is optional; missing values take their defaults.
///
/// ```toml
/// [source]
/// ignored_dirs = ["__MACOSX", ".Trash"]
///
/// [parser]
/// media_markers = ["<Media omitted>", "<Medien ausgeschlossen>"]
///
/// [analyzer]
/// top_words_limit = 20
/// night_hours = { start = 1, end = 6 }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecapConfig {
    /// Source extraction settings
    pub source: SourceConfig,

    /// Parser settings
    pub parser: ParserConfig,

    /// Analyzer settings
    pub analyzer: AnalyzerConfig,
}

impl RecapConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Loads a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.as_ref().display(), "loaded configuration");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_config_defaults() {
        let config = ParserConfig::default();
        assert!(config.is_media_marker("<Media omitted>"));
        assert!(config.is_media_marker("<Mídia oculta>"));
        assert!(!config.is_media_marker("<media omitted>"));
        assert!(!config.is_media_marker("see <Media omitted> above"));
        assert!(config.is_metadata_author("Alice changed the subject to \"Trip\""));
        assert!(config.is_metadata_author("Your security code with Bob changed"));
        assert!(!config.is_metadata_author("Alice"));
        assert!(config.invisible_chars.contains(&'\u{200E}'));
        assert!(config.invisible_chars.contains(&'\u{200F}'));
    }

    #[test]
    fn test_parser_config_builder() {
        let config = ParserConfig::new()
            .with_media_marker("<Medien ausgeschlossen>")
            .with_metadata_phrase("hat den Betreff");
        assert!(config.is_media_marker("<Medien ausgeschlossen>"));
        assert!(config.is_metadata_author("Bob hat den Betreff geändert"));
    }

    #[test]
    fn test_analyzer_config_defaults() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.top_words_limit, 50);
        assert_eq!(config.min_word_len, 3);
        assert!(config.is_night_hour(0));
        assert!(config.is_night_hour(4));
        assert!(!config.is_night_hour(5));
        assert!(!config.is_night_hour(23));
        assert!(config.is_stop_word("figurinha"));
        assert!(!config.is_stop_word("churrasco"));
        assert_eq!(config.nobody_label, NOBODY);
    }

    #[test]
    fn test_recap_config_partial_toml() {
        let config = RecapConfig::from_toml_str(
            r#"
            [analyzer]
            top_words_limit = 5
            night_hours = { start = 1, end = 6 }
            "#,
        )
        .unwrap();
        assert_eq!(config.analyzer.top_words_limit, 5);
        assert_eq!(config.analyzer.night_hours, 1..6);
        assert_eq!(config.analyzer.date_format, "%d/%m/%Y");
        assert_eq!(config.parser, ParserConfig::default());
        assert_eq!(config.source, SourceConfig::default());
    }

    #[test]
    fn test_recap_config_empty_toml_is_default() {
        let config = RecapConfig::from_toml_str("").unwrap();
        assert_eq!(config, RecapConfig::default());
    }

    #[test]
    fn test_recap_config_invalid_toml() {
        let err = RecapConfig::from_toml_str("[analyzer]\ntop_words_limit = \"many\"").unwrap_err();
        assert!(err.to_string().contains("Invalid configuration"));
    }

    #[test]
    fn test_recap_config_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recap.toml");
        fs::write(&path, "[source]\nignored_dirs = [\"junk\"]\n").unwrap();

        let config = RecapConfig::load(&path).unwrap();
        assert_eq!(config.source.ignored_dirs, vec!["junk".to_string()]);
        assert_eq!(config.source.text_extension, ".txt");
    }

    #[test]
    fn test_recap_config_load_missing_file() {
        let err = RecapConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(err.is_io());
    }
}
