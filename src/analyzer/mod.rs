//! Reducing a message sequence to [`SessionStats`].
//!
//! The analyzer keeps only messages from the scope year, then makes a single
//! pass that tallies authors, days, hours and words and tracks the award
//! candidates. Rankings are derived from the tallies afterwards.
//!
//! # Example
//!
//! ```rust
//! use chatrecap::analyzer::Analyzer;
//! use chatrecap::parser::WhatsAppParser;
//!
//! let messages = WhatsAppParser::new().parse_str(
//!     "20/06/2024 15:30 - Alice: hi\n\
//!      20/06/2024 15:31 - Bob: yo",
//! )?;
//! let stats = Analyzer::new().analyze(&messages, "Friends", 2024)?;
//!
//! assert_eq!(stats.total_messages, 2);
//! assert_eq!(stats.top_active_day, "20/06/2024");
//! assert_eq!(stats.most_active_hour, "15:00 - 16:00");
//! # Ok::<(), chatrecap::RecapError>(())
//! ```

pub mod ranking;
pub mod words;

use std::collections::BTreeMap;
use std::fmt::Write as _;

use chrono::format::{Item, StrftimeItems};
use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};

use crate::Message;
use crate::config::AnalyzerConfig;
use crate::error::{RecapError, Result};
use crate::stats::{AuthorCount, LongestMessage, SessionAwards, SessionStats, WordCount};

use ranking::{least, mode, rank_desc};

/// Returns the current calendar year on the local clock.
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Renders an hour of day as a one-hour range, e.g. `21:00 - 22:00`.
pub fn hour_range(hour: u32) -> String {
    format!("{hour}:00 - {}:00", hour + 1)
}

/// Computes [`SessionStats`] from parsed messages.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalyzerConfig,
}

impl Analyzer {
    /// Creates a new analyzer with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an analyzer with custom configuration.
    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyzes messages from the current calendar year.
    pub fn analyze_current_year(&self, messages: &[Message], chat_title: &str) -> Result<SessionStats> {
        self.analyze(messages, chat_title, current_year())
    }

    /// Analyzes the messages sent during `scope_year`.
    ///
    /// The result depends only on the arguments: the same messages, title and
    /// year always give the same stats.
    pub fn analyze(&self, messages: &[Message], chat_title: &str, scope_year: i32) -> Result<SessionStats> {
        if messages.is_empty() {
            return Err(RecapError::EmptyTranscript);
        }
        self.check_date_format()?;

        let in_scope: Vec<&Message> = messages.iter().filter(|m| m.year() == scope_year).collect();
        tracing::debug!(
            total = messages.len(),
            in_scope = in_scope.len(),
            scope_year,
            "filtered messages to scope year"
        );

        let Some(&first) = in_scope.first() else {
            return Err(RecapError::NoMessagesInScopeYear { year: scope_year });
        };

        let mut tally = Tally::new(first);
        for &msg in &in_scope {
            tally.observe(msg, &self.config);
        }

        Ok(self.summarize(tally, chat_title))
    }

    fn check_date_format(&self) -> Result<()> {
        if StrftimeItems::new(&self.config.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(RecapError::config(format!(
                "invalid date format '{}'",
                self.config.date_format
            )));
        }
        // Time and zone specifiers parse fine but cannot render a bare date.
        let sample = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default();
        let mut rendered = String::new();
        if write!(rendered, "{}", sample.format(&self.config.date_format)).is_err() {
            return Err(RecapError::config(format!(
                "date format '{}' needs fields a calendar date does not have",
                self.config.date_format
            )));
        }
        Ok(())
    }

    fn format_date(&self, date: NaiveDate) -> String {
        date.format(&self.config.date_format).to_string()
    }

    fn summarize(&self, tally: Tally<'_>, chat_title: &str) -> SessionStats {
        let total_messages: usize = tally.authors.values().sum();

        let top_active_day = mode(&tally.days)
            .map(|(day, _)| self.format_date(day))
            .unwrap_or_default();
        let most_active_hour = hour_range(mode(&tally.hours).map_or(0, |(hour, _)| hour));

        let top_words = rank_desc(&tally.words)
            .into_iter()
            .take(self.config.top_words_limit)
            .map(|(word, count)| WordCount { word, count })
            .collect();

        let night_owl = mode(&tally.night)
            .map(|(author, count)| AuthorCount { author, count })
            .unwrap_or_else(|| AuthorCount {
                author: self.config.nobody_label.clone(),
                count: 0,
            });

        let ghost = least(&tally.authors)
            .map(|(author, count)| AuthorCount { author, count })
            .unwrap_or_else(|| AuthorCount {
                author: self.config.nobody_label.clone(),
                count: 0,
            });

        let awards = SessionAwards {
            longest_message: LongestMessage {
                author: tally.longest.0.to_string(),
                length: tally.longest.1,
            },
            night_owl,
            ghost,
        };

        SessionStats {
            chat_title: chat_title.to_string(),
            total_messages,
            participant_count: tally.authors.len(),
            date_range: (
                self.format_date(tally.earliest.date()),
                self.format_date(tally.latest.date()),
            ),
            top_active_day,
            most_active_hour,
            messages_by_author: tally.authors,
            top_words,
            awards,
        }
    }
}

/// Running aggregates for the single pass.
struct Tally<'a> {
    authors: BTreeMap<String, usize>,
    days: BTreeMap<NaiveDate, usize>,
    hours: BTreeMap<u32, usize>,
    words: BTreeMap<String, usize>,
    night: BTreeMap<String, usize>,
    earliest: NaiveDateTime,
    latest: NaiveDateTime,
    /// Author and character length of the longest message so far.
    longest: (&'a str, usize),
}

impl<'a> Tally<'a> {
    fn new(first: &'a Message) -> Self {
        Self {
            authors: BTreeMap::new(),
            days: BTreeMap::new(),
            hours: BTreeMap::new(),
            words: BTreeMap::new(),
            night: BTreeMap::new(),
            earliest: first.timestamp,
            latest: first.timestamp,
            longest: (first.author(), first.char_len()),
        }
    }

    fn observe(&mut self, msg: &'a Message, config: &AnalyzerConfig) {
        *self.authors.entry(msg.author.clone()).or_insert(0) += 1;

        self.earliest = self.earliest.min(msg.timestamp);
        self.latest = self.latest.max(msg.timestamp);

        *self.days.entry(msg.date()).or_insert(0) += 1;
        let hour = msg.hour();
        *self.hours.entry(hour).or_insert(0) += 1;

        // Strictly longer only: the first of equally long messages keeps it.
        let len = msg.char_len();
        if len > self.longest.1 {
            self.longest = (msg.author(), len);
        }

        if config.is_night_hour(hour) {
            *self.night.entry(msg.author.clone()).or_insert(0) += 1;
        }

        words::tally_words(&msg.content, config, &mut self.words);
    }
}
