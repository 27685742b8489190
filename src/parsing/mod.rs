//! Line-level parsing utilities.
//!
//! The building blocks the transcript parser is assembled from: cleaning a
//! physical line, matching it against the header patterns, decoding the
//! captured timestamp and recognising system notices.

pub mod patterns;
pub mod timestamp;

pub use patterns::{HeaderCapture, HeaderPattern, match_header};
pub use timestamp::{decode_date, decode_time, decode_timestamp};

use crate::config::ParserConfig;

/// Strips invisible characters and surrounding whitespace from a line.
pub fn clean_line(line: &str, config: &ParserConfig) -> String {
    line.chars()
        .filter(|c| !config.invisible_chars.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Checks if a matched header is a system notice rather than a message.
///
/// Notices are media-omitted placeholders (the whole content is the marker)
/// and group-metadata events, which export with the event phrase where the
/// author would be.
pub fn is_system_notice(capture: &HeaderCapture<'_>, config: &ParserConfig) -> bool {
    config.is_media_marker(capture.content.trim()) || config.is_metadata_author(capture.author)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_line_strips_bidi_marks() {
        let config = ParserConfig::default();
        let line = "\u{200E}20/06/2024 15:30 - Alice: hi\u{200F}  \r";
        assert_eq!(clean_line(line, &config), "20/06/2024 15:30 - Alice: hi");
    }

    #[test]
    fn test_clean_line_strips_bom() {
        let config = ParserConfig::default();
        assert_eq!(clean_line("\u{FEFF}[20/06/2024 15:30:00] A: b", &config), "[20/06/2024 15:30:00] A: b");
    }

    #[test]
    fn test_clean_line_blank() {
        let config = ParserConfig::default();
        assert!(clean_line(" \u{200E} \t", &config).is_empty());
    }

    #[test]
    fn test_media_notice() {
        let config = ParserConfig::default();
        let cap = match_header("20/06/2024 15:30 - Alice: <Media omitted>").unwrap();
        assert!(is_system_notice(&cap, &config));
        let cap = match_header("20/06/2024 15:30 - Alice: <Mídia oculta>").unwrap();
        assert!(is_system_notice(&cap, &config));
    }

    #[test]
    fn test_media_marker_must_be_whole_content() {
        let config = ParserConfig::default();
        let cap = match_header("20/06/2024 15:30 - Alice: look <Media omitted> lol").unwrap();
        assert!(!is_system_notice(&cap, &config));
    }

    #[test]
    fn test_metadata_notice() {
        let config = ParserConfig::default();
        let cap =
            match_header("20/06/2024 15:30 - Alice changed the subject from A to B: really").unwrap();
        assert!(is_system_notice(&cap, &config));
        let cap = match_header("20/06/2024 15:30 - Your security code with Bob changed. Tap: info")
            .unwrap();
        assert!(is_system_notice(&cap, &config));
    }

    #[test]
    fn test_regular_message_is_not_notice() {
        let config = ParserConfig::default();
        let cap = match_header("20/06/2024 15:30 - Alice: the subject changed?").unwrap();
        assert!(!is_system_notice(&cap, &config));
    }
}
