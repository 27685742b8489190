//! Unified error types for chatrecap.
//!
//! This module provides a single [`RecapError`] enum that covers every
//! failure of the extract → parse → analyze pipeline. All variants are fatal
//! for a single invocation; malformed individual lines are never errors.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatrecap operations.
///
/// # Example
///
/// ```rust
/// use chatrecap::error::Result;
/// use chatrecap::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, RecapError>;

/// The error type for all chatrecap operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RecapError {
    /// An I/O error occurred while reading the input or writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A compressed export holds no qualifying transcript entry.
    #[error("No chat transcript (.txt) found inside '{container}'")]
    ContainerEntryNotFound {
        /// Declared name of the container
        container: String,
    },

    /// The compressed container could not be read.
    #[cfg(feature = "zip")]
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// The declared source name is neither a text transcript nor a container.
    #[error("Unsupported source '{name}'. Expected a .txt or .zip WhatsApp export")]
    UnsupportedSource {
        /// Declared name of the rejected source
        name: String,
    },

    /// The input exceeds the size accepted at the boundary.
    #[error("Input is {size} bytes (maximum: {limit} bytes)")]
    InputTooLarge {
        /// Actual input size in bytes
        size: u64,
        /// Maximum accepted size in bytes
        limit: u64,
    },

    /// A matched header carried date/time tokens that are not a valid instant.
    #[error("Cannot decode date/time '{input}': {reason}")]
    DateTimeDecode {
        /// The offending date and time tokens
        input: String,
        /// What was wrong with them
        reason: String,
    },

    /// Parsing produced zero messages.
    #[error("No valid messages found in the transcript")]
    EmptyTranscript,

    /// Every parsed message lies outside the scope year.
    #[error("No messages found in {year}")]
    NoMessagesInScopeYear {
        /// The scope year that was applied
        year: i32,
    },

    /// A configuration file could not be understood.
    #[error("Invalid configuration: {message}")]
    Config {
        /// Description of what's wrong
        message: String,
    },

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl RecapError {
    /// Creates a missing-entry error for a container.
    pub fn container_entry_not_found(container: impl Into<String>) -> Self {
        RecapError::ContainerEntryNotFound {
            container: container.into(),
        }
    }

    /// Creates an unsupported-source error.
    pub fn unsupported_source(name: impl Into<String>) -> Self {
        RecapError::UnsupportedSource { name: name.into() }
    }

    /// Creates a date/time decoding error.
    pub fn datetime_decode(input: impl Into<String>, reason: impl Into<String>) -> Self {
        RecapError::DateTimeDecode {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        RecapError::Config {
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, RecapError::Io(_))
    }

    /// Returns `true` if a container held no transcript.
    pub fn is_container_entry_not_found(&self) -> bool {
        matches!(self, RecapError::ContainerEntryNotFound { .. })
    }

    /// Returns `true` if a header's date/time could not be decoded.
    pub fn is_datetime_decode(&self) -> bool {
        matches!(self, RecapError::DateTimeDecode { .. })
    }

    /// Returns `true` if the analysis had nothing to work on, either because
    /// parsing found no messages or the scope year filtered them all out.
    pub fn is_empty_input(&self) -> bool {
        matches!(
            self,
            RecapError::EmptyTranscript | RecapError::NoMessagesInScopeYear { .. }
        )
    }
}

impl From<toml::de::Error> for RecapError {
    fn from(err: toml::de::Error) -> Self {
        RecapError::config(err.to_string())
    }
}
