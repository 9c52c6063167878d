//! # chatscrub
//!
//! A Rust library for parsing exported chat transcripts, selectively
//! redacting them, and re-exporting the result, for one file or many at
//! once.
//!
//! ## Overview
//!
//! Chat apps export conversations as plain text, one message per line,
//! full of names, dates, and attachment placeholders. Chatscrub loads
//! those exports (directly or from ZIP bundles), parses them into
//! structured messages, and rebuilds clean output under four independent
//! toggles: hide dates, hide times, anonymize senders, strip media
//! placeholders.
//!
//! The pieces compose bottom-up:
//!
//! - [`parse`] — raw export text → ordered [`Message`]s (pure)
//! - [`anonymize`] — senders → `User1, User2, …` by first appearance (pure)
//! - [`export`] — messages + [`DisplayOptions`](options::DisplayOptions)
//!   → text / JSON / bulk ZIP
//! - [`ingest`] — named byte payloads → parsed file records, one
//!   all-or-nothing batch at a time
//! - [`session`] — the in-memory state a frontend drives: ordered files,
//!   click/ctrl/shift selection, option toggles, export operations
//!
//! ## Quick Start
//!
//! ```rust
//! use chatscrub::ingest::SourceInput;
//! use chatscrub::options::DisplayOptions;
//! use chatscrub::session::Session;
//!
//! fn main() -> chatscrub::Result<()> {
//!     let transcript = "12/5/23, 9:41 AM - Alice: hello there\n\
//!                       12/5/23, 9:42 AM - Bob: <Media omitted>\n\
//!                       garbage line with no structure";
//!
//!     let mut session = Session::new();
//!     session.set_options(DisplayOptions::new().with_hide_media(true));
//!     session.ingest(&[SourceInput::new("chat.txt", transcript.as_bytes().to_vec())])?;
//!
//!     let export = session.export_active_text("ChatScrub").expect("one file is active");
//!     assert_eq!(export.file_name, "ChatScrub_chat.txt");
//!     assert_eq!(String::from_utf8(export.payload).unwrap(), "Alice: hello there");
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] — the line grammar and [`parse`]
//! - [`anonymize`] — sender pseudonymization
//! - [`options`] — [`DisplayOptions`](options::DisplayOptions) toggles
//! - [`export`] — text/JSON/ZIP formatters and naming conventions
//! - [`ingest`] — batch ingestion of documents and archives
//! - [`session`] — [`Session`](session::Session),
//!   [`FileRecord`](session::FileRecord), [`FileId`](session::FileId)
//! - [`selection`] — the pure click/selection reducer
//! - [`filter`] — date-range and sender filters for exports
//! - [`error`] — unified error types ([`ScrubError`], [`Result`])
//! - [`prelude`] — convenient re-exports

pub mod anonymize;
#[cfg(feature = "cli")]
pub mod cli;
pub mod error;
pub mod export;
pub mod filter;
pub mod ingest;
pub mod message;
pub mod options;
pub mod parser;
pub mod selection;
pub mod session;

// Re-export the main types at the crate root for convenience
pub use anonymize::anonymize;
pub use error::{Result, ScrubError};
pub use message::{MEDIA_PLACEHOLDER, Message};
pub use parser::parse;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatscrub::prelude::*;
/// ```
pub mod prelude {
    // Core message type and parsing
    pub use crate::anonymize::anonymize;
    pub use crate::message::{MEDIA_PLACEHOLDER, Message};
    pub use crate::parser::parse;

    // Error types
    pub use crate::error::{Result, ScrubError};

    // Options and filtering
    pub use crate::filter::{FilterConfig, apply_filters};
    pub use crate::options::DisplayOptions;

    // Ingestion and session state
    pub use crate::ingest::SourceInput;
    pub use crate::selection::{Click, SelectionState};
    pub use crate::session::{Export, FileId, FileRecord, Session};

    // Export formatters and naming
    #[cfg(feature = "archives")]
    pub use crate::export::{ArchiveEntry, bulk_archive};
    #[cfg(feature = "json-output")]
    pub use crate::export::{to_json, write_json};
    pub use crate::export::{
        bulk_export_name, json_export_name, text_export_name, to_text, write_text,
    };
}
