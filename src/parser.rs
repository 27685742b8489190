//! Transcript parser.
//!
//! Turns a WhatsApp TXT export into an ordered sequence of [`Message`]s.
//! The export is loosely structured: a header line starts each message,
//! any other line continues the message above it, and the file is peppered
//! with invisible characters and system notices.
//!
//! Supported header formats, tried in this order:
//! - Android: `20/06/2023 15:30 - Author: Message`
//! - iOS: `[20/06/2023 15:30:12] Author: Message`
//! - Short date: `20/6/23, 3:30 PM - Author: Message`
//!
//! # Example
//!
//! ```rust
//! use chatrecap::parser::WhatsAppParser;
//!
//! let parser = WhatsAppParser::new();
//! let messages = parser.parse_str(
//!     "20/06/2024 15:30 - Alice: shopping list\n\
//!      eggs\n\
//!      milk\n\
//!      20/06/2024 15:31 - Bob: <Media omitted>",
//! )?;
//!
//! assert_eq!(messages.len(), 1);
//! assert_eq!(messages[0].content, "shopping list\neggs\nmilk");
//! # Ok::<(), chatrecap::RecapError>(())
//! ```

use std::path::Path;

use crate::Message;
use crate::config::{ParserConfig, SourceConfig};
use crate::error::Result;
use crate::parsing::{clean_line, decode_timestamp, is_system_notice, match_header};
use crate::source;

/// Parser for WhatsApp TXT exports.
#[derive(Debug, Clone, Default)]
pub struct WhatsAppParser {
    config: ParserConfig,
    source: SourceConfig,
}

impl WhatsAppParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            config,
            source: SourceConfig::default(),
        }
    }

    /// Sets how transcripts are located inside containers.
    #[must_use]
    pub fn with_source_config(mut self, source: SourceConfig) -> Self {
        self.source = source;
        self
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses a named payload (`.txt` or `.zip`).
    pub fn parse_source(&self, name: &str, bytes: &[u8]) -> Result<Vec<Message>> {
        let text = source::extract_text_with_config(name, bytes, &self.source)?;
        self.parse_str(&text)
    }

    /// Parses an export file from disk (`.txt` or `.zip`).
    pub fn parse_file(&self, path: &Path) -> Result<Vec<Message>> {
        let text = source::read_text(path, &self.source)?;
        self.parse_str(&text)
    }

    /// Parses decoded transcript text.
    ///
    /// Unrecognised lines never fail the parse: they continue the message
    /// being built, or are dropped if there is none. A header whose date or
    /// time cannot be decoded fails the whole call.
    pub fn parse_str(&self, text: &str) -> Result<Vec<Message>> {
        let mut messages: Vec<Message> = Vec::new();
        let mut current: Option<Message> = None;
        let mut notices = 0usize;
        let mut orphans = 0usize;

        for raw in text.lines() {
            let line = clean_line(raw, &self.config);
            if line.is_empty() {
                continue;
            }

            let Some(header) = match_header(&line) else {
                match current.as_mut() {
                    Some(msg) => msg.push_line(&line),
                    None => {
                        orphans += 1;
                        tracing::trace!(line = %line, "dropping orphan line");
                    }
                }
                continue;
            };

            // New header: whatever was being built is complete.
            if let Some(done) = current.take() {
                messages.push(done);
            }

            if is_system_notice(&header, &self.config) {
                notices += 1;
                tracing::trace!(pattern = %header.pattern, line = %line, "discarding system notice");
                continue;
            }

            let timestamp = decode_timestamp(header.date, header.time)?;
            current = Some(Message::new(
                timestamp,
                header.author.trim(),
                header.content.trim(),
            ));
        }

        if let Some(done) = current {
            messages.push(done);
        }

        tracing::debug!(
            messages = messages.len(),
            notices,
            orphans,
            "parsed transcript"
        );

        Ok(messages)
    }
}
