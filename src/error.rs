//! Unified error types for chatscrub.
//!
//! This module provides a single [`ScrubError`] enum covering every error
//! case in the library, with a crate-wide [`Result`] alias.
//!
//! Two conditions are deliberately *not* errors: unparseable transcript
//! lines (the parser drops them) and gestures whose precondition is unmet
//! (shift-click with no anchor, export with nothing active; both are
//! defined no-ops). Errors here are the conditions a caller must surface:
//! I/O failures, undecodable input, corrupt archives, bad filter dates.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for chatscrub operations.
///
/// # Example
///
/// ```rust
/// use chatscrub::error::Result;
/// use chatscrub::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ScrubError>;

/// The error type for all chatscrub operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ScrubError {
    /// An I/O error occurred.
    ///
    /// This typically happens when an input file doesn't exist, a write
    /// target is not creatable, or the disk fills while exporting.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Input bytes that should be text did not decode as UTF-8.
    ///
    /// Decode failures abandon the whole ingestion batch.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// What was being decoded (input or archive member name).
        context: String,
        /// The underlying UTF-8 error.
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// An archive could not be opened or one of its members read.
    #[cfg(feature = "archives")]
    #[error("Archive error in {name}: {source}")]
    Archive {
        /// The archive (or member) that failed.
        name: String,
        /// The underlying archive error.
        #[source]
        source: zip::result::ZipError,
    },

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid date in a filter argument.
    ///
    /// Date filters expect `YYYY-MM-DD`.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided.
        input: String,
        /// Expected format description.
        expected: &'static str,
    },
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ScrubError {
    /// Creates a UTF-8 decode error with context.
    pub fn utf8(context: impl Into<String>, source: std::string::FromUtf8Error) -> Self {
        ScrubError::Utf8 {
            context: context.into(),
            source,
        }
    }

    /// Creates an archive error for the named archive or member.
    #[cfg(feature = "archives")]
    pub fn archive(name: impl Into<String>, source: zip::result::ZipError) -> Self {
        ScrubError::Archive {
            name: name.into(),
            source,
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ScrubError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ScrubError::Io(_))
    }

    /// Returns `true` if this is a UTF-8 decode error.
    pub fn is_utf8(&self) -> bool {
        matches!(self, ScrubError::Utf8 { .. })
    }

    /// Returns `true` if this is an archive error.
    #[cfg(feature = "archives")]
    pub fn is_archive(&self) -> bool {
        matches!(self, ScrubError::Archive { .. })
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ScrubError::InvalidDate { .. })
    }
}
