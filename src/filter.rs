//! Filter messages by date range and sender.
//!
//! [`FilterConfig`] describes the criteria and [`apply_filters`] narrows
//! a message collection before export. Filters operate on the parsed
//! message stream, so they compose with every display option.
//!
//! # Examples
//!
//! ```
//! use chatscrub::filter::{FilterConfig, apply_filters};
//! use chatscrub::parse;
//!
//! let messages = parse(
//!     "12/5/23, 9:41 AM - Alice: hello\n\
//!      12/5/23, 9:42 AM - Bob: hi\n\
//!      12/6/23, 8:00 AM - Alice: morning",
//! );
//!
//! // Case-insensitive sender matching
//! let config = FilterConfig::new().with_sender("alice");
//! let filtered = apply_filters(messages, &config);
//!
//! assert_eq!(filtered.len(), 2);
//! ```
//!
//! # Behavior Notes
//!
//! - Messages whose date/time strings do not form a real timestamp are
//!   **excluded** while a date filter is active
//! - Sender matching is case-insensitive for ASCII characters
//! - Active filters are combined with AND logic

use chrono::{NaiveDate, NaiveDateTime};

use crate::Message;
use crate::error::ScrubError;

/// Configuration for filtering messages by date and sender.
///
/// Filters are combined with AND logic: a message must match all active
/// filters to be included in the result.
///
/// # Examples
///
/// ```
/// use chatscrub::filter::FilterConfig;
///
/// # fn main() -> chatscrub::Result<()> {
/// let combined = FilterConfig::new()
///     .with_sender("Alice")
///     .with_date_from("2023-12-01")?;
/// assert!(combined.is_active());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Include only messages at or after this timestamp.
    pub after: Option<NaiveDateTime>,

    /// Include only messages at or before this timestamp.
    pub before: Option<NaiveDateTime>,

    /// Include only messages from this sender (case-insensitive).
    pub from: Option<String>,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    ///
    /// No filters are active by default; all messages pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date filter (inclusive).
    ///
    /// Only messages on or after this date will be included.
    /// Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ScrubError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self, ScrubError> {
        let naive = parse_filter_date(date_str)?;
        self.after = Some(naive.and_hms_opt(0, 0, 0).unwrap());
        Ok(self)
    }

    /// Sets the end date filter (inclusive).
    ///
    /// Only messages on or before this date will be included.
    /// Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ScrubError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self, ScrubError> {
        let naive = parse_filter_date(date_str)?;
        // End of the day to include the full day
        self.before = Some(naive.and_hms_opt(23, 59, 59).unwrap());
        Ok(self)
    }

    /// Sets the sender filter.
    ///
    /// Only messages from this sender will be included.
    /// Matching is case-insensitive for ASCII characters.
    #[must_use]
    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.from = Some(sender.into());
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.after.is_some() || self.before.is_some() || self.from.is_some()
    }

    /// Returns `true` if date filters are active.
    pub fn has_date_filter(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }
}

/// Parse a date string in YYYY-MM-DD format.
fn parse_filter_date(date_str: &str) -> Result<NaiveDate, ScrubError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| ScrubError::invalid_date(date_str))
}

/// Filters a collection of messages based on the provided configuration.
///
/// Returns a new vector containing only messages that match all active
/// filters. If no filters are active, returns the input unchanged.
///
/// # Filter Behavior
///
/// - **Sender filter**: case-insensitive ASCII matching
/// - **Date filters**: messages with unparseable date/time strings are
///   excluded ([`Message::timestamp`] returns `None`)
/// - **Multiple filters**: combined with AND logic
pub fn apply_filters(messages: Vec<Message>, config: &FilterConfig) -> Vec<Message> {
    if !config.is_active() {
        return messages;
    }

    messages
        .into_iter()
        .filter(|msg| {
            // Filter by sender (case-insensitive)
            if let Some(ref from) = config.from {
                if !msg.sender.eq_ignore_ascii_case(from) {
                    return false;
                }
            }

            // Filter by date (only if the date/time strings parse)
            if config.has_date_filter() {
                match msg.timestamp() {
                    Some(ts) => {
                        if config.after.is_some_and(|after| ts < after) {
                            return false;
                        }
                        if config.before.is_some_and(|before| ts > before) {
                            return false;
                        }
                    }
                    None => {
                        return false;
                    }
                }
            }

            true
        })
        .collect()
}
