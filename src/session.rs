//! In-memory session state.
//!
//! One [`Session`] owns everything a frontend needs: the ordered file
//! list, the selection state, and the display options. Nothing persists
//! past the process; a restart starts empty.
//!
//! # Derivation invariant
//!
//! A [`FileRecord`]'s `messages` field is a cache, never an
//! independently-authored value: it is always `parse(raw_text)`,
//! composed with [`anonymize`] when that toggle is on. Flipping the
//! toggle re-derives every file from its raw text. Senders are never
//! rewritten in place, which is what keeps the pseudonym mapping stable
//! across off/on cycles.
//!
//! # Example
//!
//! ```
//! use chatscrub::ingest::SourceInput;
//! use chatscrub::session::Session;
//!
//! # fn main() -> chatscrub::Result<()> {
//! let transcript = "12/5/23, 9:41 AM - Alice: hello there";
//!
//! let mut session = Session::new();
//! session.ingest(&[SourceInput::new("chat.txt", transcript.as_bytes().to_vec())])?;
//!
//! let export = session.export_active_text("ChatScrub").expect("one file is active");
//! assert_eq!(export.file_name, "ChatScrub_chat.txt");
//! assert_eq!(String::from_utf8(export.payload).unwrap(), "Alice: hello there");
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Message;
use crate::anonymize::anonymize;
use crate::error::Result;
use crate::export;
use crate::ingest::{self, SourceInput};
use crate::options::DisplayOptions;
use crate::parser::parse;
use crate::selection::{Click, SelectionState};

/// Opaque identifier for a [`FileRecord`], stable for its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileId(Uuid);

impl FileId {
    pub(crate) fn fresh() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for FileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// One ingested transcript: a direct upload or one archive member.
#[derive(Debug, Clone)]
pub struct FileRecord {
    id: FileId,
    display_name: String,
    raw_text: String,
    messages: Vec<Message>,
}

impl FileRecord {
    /// Builds a record with a fresh id, deriving messages from the raw
    /// text under the given options.
    pub fn new(
        display_name: impl Into<String>,
        raw_text: impl Into<String>,
        options: &DisplayOptions,
    ) -> Self {
        let raw_text = raw_text.into();
        let messages = derive_messages(&raw_text, options);
        Self {
            id: FileId::fresh(),
            display_name: display_name.into(),
            raw_text,
            messages,
        }
    }

    /// Returns the record's stable id.
    pub fn id(&self) -> FileId {
        self.id
    }

    /// Returns the name the file was ingested under.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Returns the original text, untouched by any toggle.
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// Returns the currently derived messages.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Number of parsed messages, for listings.
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Recomputes the message cache from the raw text.
    fn rederive(&mut self, options: &DisplayOptions) {
        self.messages = derive_messages(&self.raw_text, options);
    }
}

/// Pure derivation: parse, then anonymize when the toggle is on.
fn derive_messages(raw_text: &str, options: &DisplayOptions) -> Vec<Message> {
    let parsed = parse(raw_text);
    if options.anonymize {
        anonymize(&parsed)
    } else {
        parsed
    }
}

/// A ready-to-write export: target file name plus payload bytes.
///
/// The session never writes anything itself; it hands these to whatever
/// sink the frontend uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    /// File name per the export naming convention.
    pub file_name: String,
    /// Export payload.
    pub payload: Vec<u8>,
}

/// The single in-process session.
///
/// Every transition replaces whole values (the file list, the selection
/// tuple) rather than patching in place, so each operation leaves the
/// state consistent or untouched.
#[derive(Debug, Default)]
pub struct Session {
    files: Vec<FileRecord>,
    selection: SelectionState,
    options: DisplayOptions,
}

impl Session {
    /// Creates an empty session with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// The loaded files, in ingestion order.
    pub fn files(&self) -> &[FileRecord] {
        &self.files
    }

    /// The current display options.
    pub fn options(&self) -> DisplayOptions {
        self.options
    }

    /// The current selection state.
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Returns `true` when no files are loaded.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Ingests one batch of inputs; returns how many files were added.
    ///
    /// All-or-nothing: on error nothing is committed and prior state is
    /// untouched. New files append after the existing ones and only
    /// become active when nothing was active before the batch; an
    /// append never steals focus from a file under review.
    pub fn ingest(&mut self, inputs: &[SourceInput]) -> Result<usize> {
        let records = ingest::ingest_batch(inputs, &self.options)?;
        let added = records.len();

        let first_new = records.first().map(FileRecord::id);
        self.files.extend(records);

        if self.selection.active.is_none() {
            self.selection.active = first_new;
        }

        Ok(added)
    }

    /// Applies a click gesture to the file list.
    ///
    /// Indices are resolved against the current ordering; a click on an
    /// id that is no longer loaded is a no-op.
    pub fn click(&mut self, target: FileId, click: Click) {
        let order = self.order();
        self.selection = self.selection.click(&order, target, click);
    }

    /// Selects every loaded file, anchored at the top of the list.
    ///
    /// The active file is left where it was; this is the headless
    /// equivalent of a plain click on the first file followed by a
    /// shift-click on the last, minus the focus change.
    pub fn select_all(&mut self) {
        if self.files.is_empty() {
            return;
        }
        self.selection = SelectionState {
            selected: self.files.iter().map(FileRecord::id).collect(),
            active: self.selection.active,
            anchor: Some(0),
        };
    }

    /// Deletes the given files, singly or in bulk.
    ///
    /// Deleted ids leave the selection too; if the active file is among
    /// them, the first survivor takes its place.
    pub fn delete_files(&mut self, ids: &[FileId]) {
        self.files.retain(|file| !ids.contains(&file.id));
        let remaining = self.order();
        self.selection = self.selection.after_deletion(&remaining);
    }

    /// Replaces the display options.
    ///
    /// A change to the anonymization toggle re-derives every file's
    /// messages from its raw text; the other toggles only affect
    /// formatting and need no re-derivation.
    pub fn set_options(&mut self, options: DisplayOptions) {
        let rederive = options.anonymize != self.options.anonymize;
        self.options = options;
        if rederive {
            for file in &mut self.files {
                file.rederive(&self.options);
            }
        }
    }

    /// Looks up a file by id.
    pub fn file(&self, id: FileId) -> Option<&FileRecord> {
        self.files.iter().find(|f| f.id == id)
    }

    /// The file whose messages are currently previewed and exported
    /// singly, if any.
    pub fn active_file(&self) -> Option<&FileRecord> {
        self.selection.active.and_then(|id| self.file(id))
    }

    /// The selected files, in list order.
    pub fn selected_files(&self) -> Vec<&FileRecord> {
        self.files
            .iter()
            .filter(|f| self.selection.selected.contains(&f.id))
            .collect()
    }

    /// Text export of the active file, or `None` when nothing is active.
    pub fn export_active_text(&self, prefix: &str) -> Option<Export> {
        let file = self.active_file()?;
        Some(Export {
            file_name: export::text_export_name(prefix, &file.display_name),
            payload: export::to_text(&file.messages, &self.options).into_bytes(),
        })
    }

    /// JSON export of the active file, or `Ok(None)` when nothing is
    /// active.
    #[cfg(feature = "json-output")]
    pub fn export_active_json(&self, prefix: &str) -> Result<Option<Export>> {
        let Some(file) = self.active_file() else {
            return Ok(None);
        };
        let payload = export::to_json(&file.messages, &self.options)?.into_bytes();
        Ok(Some(Export {
            file_name: export::json_export_name(prefix, &file.display_name),
            payload,
        }))
    }

    /// Bulk archive of the selected files, or `Ok(None)` when the
    /// selection is empty.
    ///
    /// The archive holds one text-export member per selected file, named
    /// by the text export convention, in list order.
    #[cfg(feature = "archives")]
    pub fn export_selection_archive(&self, prefix: &str) -> Result<Option<Export>> {
        let selected = self.selected_files();
        if selected.is_empty() {
            return Ok(None);
        }

        let entries: Vec<export::ArchiveEntry> = selected
            .iter()
            .map(|file| {
                export::ArchiveEntry::new(
                    export::text_export_name(prefix, &file.display_name),
                    export::to_text(&file.messages, &self.options),
                )
            })
            .collect();

        Ok(Some(Export {
            file_name: export::bulk_export_name(prefix),
            payload: export::bulk_archive(&entries)?,
        }))
    }

    fn order(&self) -> Vec<FileId> {
        self.files.iter().map(FileRecord::id).collect()
    }
}
