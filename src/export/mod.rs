//! Export formatters and naming conventions.
//!
//! This module provides the writers that reconstruct output from parsed
//! messages:
//! - [`to_text`] / [`write_text`] - plain text in the export line shape
//! - [`to_json`] / [`write_json`] - pretty-printed JSON array - requires
//!   the `json-output` feature
//! - [`bulk_archive`] - ZIP bytes bundling one text export per selected
//!   file - requires the `archives` feature
//!
//! All formatters consume the *currently displayed* messages (already
//! anonymized when that toggle is on) plus the display options; they
//! never re-derive from raw text.
//!
//! # Naming conventions
//!
//! Export file names are derived from the ingested display name:
//!
//! ```
//! use chatscrub::export::{bulk_export_name, json_export_name, text_export_name};
//!
//! assert_eq!(text_export_name("ChatScrub", "chat1.txt"), "ChatScrub_chat1.txt");
//! assert_eq!(json_export_name("ChatScrub", "chat1.txt"), "ChatScrub_chat1.txt.json");
//! assert_eq!(bulk_export_name("ChatScrub"), "ChatScrub_BulkExport.zip");
//! ```

#[cfg(feature = "archives")]
mod archive;
#[cfg(feature = "json-output")]
mod json;
mod text;

#[cfg(feature = "archives")]
pub use archive::{ArchiveEntry, bulk_archive};
#[cfg(feature = "json-output")]
pub use json::{to_json, write_json};
pub use text::{to_text, write_text};

/// Default file name prefix for exports.
pub const DEFAULT_PREFIX: &str = "ChatScrub";

/// File name for a text export: `<prefix>_<displayName>`.
pub fn text_export_name(prefix: &str, display_name: &str) -> String {
    format!("{prefix}_{display_name}")
}

/// File name for a JSON export: `<prefix>_<displayName>.json`.
pub fn json_export_name(prefix: &str, display_name: &str) -> String {
    format!("{prefix}_{display_name}.json")
}

/// File name for a bulk export archive: `<prefix>_BulkExport.zip`.
pub fn bulk_export_name(prefix: &str) -> String {
    format!("{prefix}_BulkExport.zip")
}
