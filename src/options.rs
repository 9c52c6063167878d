//! Session-wide display options.
//!
//! The four redaction toggles that drive both message derivation and the
//! export formatters. They travel as an explicit value threaded through
//! [`Session`](crate::session::Session) and the formatters rather than as
//! ambient state.
//!
//! # Example
//!
//! ```rust
//! use chatscrub::options::DisplayOptions;
//!
//! let options = DisplayOptions::new()
//!     .with_anonymize(true)
//!     .with_hide_media(true);
//!
//! assert!(options.hide_dates); // dates and times are hidden by default
//! assert!(options.anonymize);
//! ```

use serde::{Deserialize, Serialize};

/// Redaction toggles for a session.
///
/// Dates and times are hidden by default; anonymization and media
/// stripping are opt-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayOptions {
    /// Omit the date from text exports.
    pub hide_dates: bool,

    /// Omit the time from text exports.
    pub hide_times: bool,

    /// Replace senders with `User<k>` pseudonyms.
    pub anonymize: bool,

    /// Drop media placeholder messages from exports.
    pub hide_media: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            hide_dates: true,
            hide_times: true,
            anonymize: false,
            hide_media: false,
        }
    }
}

impl DisplayOptions {
    /// Creates options with the default toggles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether dates are hidden in text exports.
    #[must_use]
    pub fn with_hide_dates(mut self, hide: bool) -> Self {
        self.hide_dates = hide;
        self
    }

    /// Sets whether times are hidden in text exports.
    #[must_use]
    pub fn with_hide_times(mut self, hide: bool) -> Self {
        self.hide_times = hide;
        self
    }

    /// Sets whether senders are anonymized.
    #[must_use]
    pub fn with_anonymize(mut self, anonymize: bool) -> Self {
        self.anonymize = anonymize;
        self
    }

    /// Sets whether media placeholders are dropped.
    #[must_use]
    pub fn with_hide_media(mut self, hide: bool) -> Self {
        self.hide_media = hide;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = DisplayOptions::default();
        assert!(options.hide_dates);
        assert!(options.hide_times);
        assert!(!options.anonymize);
        assert!(!options.hide_media);
    }

    #[test]
    fn test_builder() {
        let options = DisplayOptions::new()
            .with_hide_dates(false)
            .with_hide_times(false)
            .with_anonymize(true)
            .with_hide_media(true);

        assert!(!options.hide_dates);
        assert!(!options.hide_times);
        assert!(options.anonymize);
        assert!(options.hide_media);
    }
}
