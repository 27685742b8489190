//! Reading the raw transcript out of an uploaded payload.
//!
//! An export arrives as a named byte payload: either the `.txt` transcript
//! itself or a `.zip` bundle containing it. This module classifies the
//! payload by its declared name and returns the transcript text.
//!
//! # Example
//!
//! ```rust
//! use chatrecap::source::{chat_title_from_file_name, extract_text};
//!
//! let text = extract_text("WhatsApp Chat with Family.txt", b"20/06/2024 15:30 - Alice: hi")?;
//! assert!(text.starts_with("20/06/2024"));
//! assert_eq!(chat_title_from_file_name("WhatsApp Chat with Family.txt"), "Family");
//! # Ok::<(), chatrecap::RecapError>(())
//! ```

use std::fs;
use std::path::Path;

use crate::config::SourceConfig;
use crate::error::{RecapError, Result};

/// Title used when the file name yields nothing usable.
pub const DEFAULT_CHAT_TITLE: &str = "Your Group";

const EXPORT_PREFIX: &str = "whatsapp chat with ";

/// Kind of payload, decided from its declared name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// A compressed container holding the transcript
    Zip,
    /// The transcript itself
    Text,
}

impl SourceKind {
    /// Classifies a payload by its declared name (ASCII case-insensitive).
    pub fn from_name(name: &str) -> Result<Self> {
        let lower = name.to_ascii_lowercase();
        if lower.ends_with(".zip") {
            Ok(SourceKind::Zip)
        } else if lower.ends_with(".txt") {
            Ok(SourceKind::Text)
        } else {
            Err(RecapError::unsupported_source(name))
        }
    }

    /// Returns the file extension for this kind (without dot).
    pub fn extension(self) -> &'static str {
        match self {
            SourceKind::Zip => "zip",
            SourceKind::Text => "txt",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::Zip => write!(f, "ZIP"),
            SourceKind::Text => write!(f, "TXT"),
        }
    }
}

/// Extracts transcript text from a named payload using default settings.
pub fn extract_text(name: &str, bytes: &[u8]) -> Result<String> {
    extract_text_with_config(name, bytes, &SourceConfig::default())
}

/// Extracts transcript text from a named payload.
///
/// Text is decoded as UTF-8, replacing invalid sequences.
pub fn extract_text_with_config(name: &str, bytes: &[u8], config: &SourceConfig) -> Result<String> {
    match SourceKind::from_name(name)? {
        SourceKind::Text => Ok(String::from_utf8_lossy(bytes).into_owned()),
        SourceKind::Zip => extract_from_zip(name, bytes, config),
    }
}

/// Reads a file from disk and extracts its transcript text.
pub fn read_text(path: &Path, config: &SourceConfig) -> Result<String> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    // Reject before touching the disk.
    SourceKind::from_name(&name)?;
    let bytes = fs::read(path)?;
    extract_text_with_config(&name, &bytes, config)
}

/// Returns `true` if a container entry qualifies as the transcript.
pub fn is_transcript_entry(entry_name: &str, config: &SourceConfig) -> bool {
    if !entry_name
        .to_ascii_lowercase()
        .ends_with(&config.text_extension.to_ascii_lowercase())
    {
        return false;
    }
    !entry_name
        .split(['/', '\\'])
        .any(|part| config.ignored_dirs.iter().any(|dir| dir == part))
}

#[cfg(feature = "zip")]
fn extract_from_zip(name: &str, bytes: &[u8], config: &SourceConfig) -> Result<String> {
    use std::io::{Cursor, Read};

    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        if entry.is_dir() || !is_transcript_entry(entry.name(), config) {
            tracing::trace!(entry = entry.name(), "skipping container entry");
            continue;
        }

        tracing::debug!(container = name, entry = entry.name(), "found transcript entry");
        let mut buf = Vec::new();
        entry.read_to_end(&mut buf)?;
        return Ok(String::from_utf8_lossy(&buf).into_owned());
    }

    Err(RecapError::container_entry_not_found(name))
}

#[cfg(not(feature = "zip"))]
fn extract_from_zip(name: &str, _bytes: &[u8], _config: &SourceConfig) -> Result<String> {
    Err(RecapError::unsupported_source(name))
}

/// Derives a chat title from an export's file name.
///
/// Strips the `WhatsApp Chat with ` prefix exporters add and the
/// `.txt`/`.zip` extension. Falls back to [`DEFAULT_CHAT_TITLE`].
pub fn chat_title_from_file_name(name: &str) -> String {
    let mut title = name;

    if title.len() >= EXPORT_PREFIX.len()
        && title.is_char_boundary(EXPORT_PREFIX.len())
        && title[..EXPORT_PREFIX.len()].eq_ignore_ascii_case(EXPORT_PREFIX)
    {
        title = &title[EXPORT_PREFIX.len()..];
    }

    for ext in [".txt", ".zip"] {
        let cut = title.len().saturating_sub(ext.len());
        if title.is_char_boundary(cut) && title[cut..].eq_ignore_ascii_case(ext) {
            title = &title[..cut];
            break;
        }
    }

    if title.trim().is_empty() {
        DEFAULT_CHAT_TITLE.to_string()
    } else {
        title.to_string()
    }
}
