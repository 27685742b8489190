//! The parsed chat message.
//!
//! [`Message`] is what the parser emits and what the analyzer consumes.
//! Timestamps are naive local date-times: an export carries no timezone, and
//! none is invented.
//!
//! # Example
//!
//! ```
//! use chatrecap::Message;
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2024, 6, 20)
//!     .unwrap()
//!     .and_hms_opt(15, 30, 0)
//!     .unwrap();
//! let msg = Message::new(ts, "Alice", "hi");
//!
//! assert_eq!(msg.author(), "Alice");
//! assert_eq!(msg.hour(), 15);
//! ```

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// A single authored chat message.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `timestamp` | `NaiveDateTime` | When the message was sent (export-local time) |
/// | `author` | `String` | Trimmed display name as written in the export |
/// | `content` | `String` | Header text plus continuation lines, newline-joined |
///
/// Authors are grouped by exact string match; the same person under two
/// spellings counts as two participants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// When the message was sent, in the exporter's local time.
    pub timestamp: NaiveDateTime,

    /// Display name of the author.
    pub author: String,

    /// Text content of the message.
    ///
    /// May contain newlines for multiline messages and may be empty.
    pub content: String,
}

impl Message {
    /// Creates a new message.
    pub fn new(
        timestamp: NaiveDateTime,
        author: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            author: author.into(),
            content: content.into(),
        }
    }

    /// Returns the timestamp.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Returns the author name.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the message content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the calendar day the message was sent on.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// Returns the calendar year the message was sent in.
    pub fn year(&self) -> i32 {
        self.timestamp.year()
    }

    /// Returns the hour of day (0-23).
    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }

    /// Returns the content length in characters.
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    /// Appends a continuation line to the content.
    pub(crate) fn push_line(&mut self, line: &str) {
        self.content.push('\n');
        self.content.push_str(line);
    }
}
