//! # Chatrecap
//!
//! A Rust library that turns a WhatsApp chat export into a "year in review"
//! summary: message totals, the busiest day and hour, favourite words and a
//! few playful awards.
//!
//! ## Overview
//!
//! The pipeline has three stages:
//! - **Extract** ([`source`]): accept a `.txt` transcript or a `.zip`
//!   export and recover the transcript text
//! - **Parse** ([`parser`]): turn the loosely structured transcript into
//!   ordered [`Message`]s, dropping system notices and noise
//! - **Analyze** ([`analyzer`]): reduce the messages of one calendar year to
//!   a [`SessionStats`]
//!
//! Android (`20/06/2023 15:30 - ...`), iOS (`[20/06/2023 15:30:12] ...`) and
//! short-date (`20/6/23, 3:30 PM - ...`) exports are all recognised, and may
//! be mixed within one file.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatrecap::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let transcript = "20/06/2024 15:30 - Alice: churrasco no domingo?\n\
//!                       20/06/2024 15:31 - Bob: bora\n\
//!                       20/06/2024 15:32 - Bob: <Media omitted>";
//!
//!     let messages = WhatsAppParser::new().parse_str(transcript)?;
//!     let stats = Analyzer::new().analyze(&messages, "Friends", 2024)?;
//!
//!     assert_eq!(stats.total_messages, 2);
//!     assert_eq!(stats.awards.ghost.author, "Alice");
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`source`] - Input classification and ZIP extraction
//! - [`parsing`] - Header patterns, timestamp decoding, line cleaning
//! - [`parser`] - [`WhatsAppParser`](parser::WhatsAppParser)
//! - [`analyzer`] - [`Analyzer`](analyzer::Analyzer) and its tallies
//! - [`stats`] - [`SessionStats`] and the compact [`StatsDigest`](stats::StatsDigest)
//! - [`format`] - JSON and text rendering
//! - [`config`] - Tunables, loadable from TOML
//! - [`error`] - [`RecapError`] and [`Result`]
//! - [`prelude`] - Convenient re-exports

pub mod analyzer;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod message;
pub mod parser;
pub mod parsing;
pub mod source;
pub mod stats;

pub use error::{RecapError, Result};
pub use message::Message;
pub use stats::SessionStats;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatrecap::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Message;

    pub use crate::error::{RecapError, Result};

    pub use crate::config::{AnalyzerConfig, ParserConfig, RecapConfig, SourceConfig};

    pub use crate::parser::WhatsAppParser;

    pub use crate::analyzer::Analyzer;

    pub use crate::stats::{SessionStats, StatsDigest};

    pub use crate::source::{SourceKind, chat_title_from_file_name};

    pub use crate::format::{OutputFormat, render, write_to_format};
}
