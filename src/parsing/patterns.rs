//! Header-line patterns.
//!
//! Each export format is one [`HeaderPattern`]. Patterns are tried in the
//! order of [`HeaderPattern::ALL`] and the first match wins, so a line that
//! satisfies several formats is always read the way the earliest one reads it.

use once_cell::sync::Lazy;
use regex::Regex;

/// Header formats found in WhatsApp exports, in matching priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderPattern {
    /// Android, 4-digit year, minute precision
    /// Example: 20/06/2023 15:30 - Author: Message
    Android,
    /// iOS, bracketed, seconds precision
    /// Example: [20/06/2023 15:30:12] Author: Message
    IosBracketed,
    /// Short variable-width date, optional meridiem
    /// Example: 20/6/23, 3:30 PM - Author: Message
    ShortDate,
}

static ANDROID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{2}/[0-9]{2}/[0-9]{4}),?\s([0-9]{2}:[0-9]{2})\s-\s(.*?):(.*)").unwrap()
});

static IOS_BRACKETED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\[([0-9]{2}/[0-9]{2}/[0-9]{4}),?\s([0-9]{2}:[0-9]{2}:[0-9]{2})\]\s(.*?):(.*)").unwrap()
});

static SHORT_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{1,2}/[0-9]{1,2}/[0-9]{2,4}),?\s([0-9]{1,2}:[0-9]{2}(?:\s?[aApP][mM])?)\s-\s(.*?):(.*)")
        .unwrap()
});

impl HeaderPattern {
    /// All patterns, in the order they are tried.
    pub const ALL: [HeaderPattern; 3] = [
        HeaderPattern::Android,
        HeaderPattern::IosBracketed,
        HeaderPattern::ShortDate,
    ];

    /// Returns the compiled regex for this pattern.
    ///
    /// Capture groups: 1 date, 2 time, 3 author, 4 content.
    pub fn regex(self) -> &'static Regex {
        match self {
            HeaderPattern::Android => &ANDROID_RE,
            HeaderPattern::IosBracketed => &IOS_BRACKETED_RE,
            HeaderPattern::ShortDate => &SHORT_DATE_RE,
        }
    }

    /// Matches a cleaned line against this pattern alone.
    pub fn captures(self, line: &str) -> Option<HeaderCapture<'_>> {
        let caps = self.regex().captures(line)?;
        Some(HeaderCapture {
            pattern: self,
            date: caps.get(1).map_or("", |m| m.as_str()),
            time: caps.get(2).map_or("", |m| m.as_str()),
            author: caps.get(3).map_or("", |m| m.as_str()),
            content: caps.get(4).map_or("", |m| m.as_str()),
        })
    }
}

impl std::fmt::Display for HeaderPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeaderPattern::Android => write!(f, "android"),
            HeaderPattern::IosBracketed => write!(f, "ios-bracketed"),
            HeaderPattern::ShortDate => write!(f, "short-date"),
        }
    }
}

/// The uniform capture every pattern yields.
///
/// Fields borrow from the matched line and are untrimmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderCapture<'a> {
    /// Which pattern matched
    pub pattern: HeaderPattern,
    /// Date token, e.g. `20/06/2023`
    pub date: &'a str,
    /// Time token, e.g. `15:30`, `15:30:12` or `3:30 PM`
    pub time: &'a str,
    /// Everything between the header and the first colon
    pub author: &'a str,
    /// Everything after that colon
    pub content: &'a str,
}

/// Matches a cleaned line against every pattern in priority order.
pub fn match_header(line: &str) -> Option<HeaderCapture<'_>> {
    HeaderPattern::ALL
        .iter()
        .find_map(|pattern| pattern.captures(line))
}
