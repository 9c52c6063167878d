//! Bulk export archive writer.

use std::io::{Cursor, Write};

use zip::ZipWriter;
use zip::write::FileOptions;

use crate::error::{Result, ScrubError};

/// One member of a bulk export archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Member file name inside the archive.
    pub name: String,
    /// Member contents.
    pub contents: String,
}

impl ArchiveEntry {
    /// Creates an entry from name and contents.
    pub fn new(name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contents: contents.into(),
        }
    }
}

/// Builds a ZIP archive with one member per entry and returns its bytes.
///
/// Members appear in entry order. An empty entry list produces a valid
/// empty archive; callers gate on their own preconditions before getting
/// here.
pub fn bulk_archive(entries: &[ArchiveEntry]) -> Result<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));

    for entry in entries {
        writer
            .start_file(entry.name.as_str(), FileOptions::default())
            .map_err(|e| ScrubError::archive(&entry.name, e))?;
        writer.write_all(entry.contents.as_bytes())?;
    }

    let cursor = writer
        .finish()
        .map_err(|e| ScrubError::archive("bulk export", e))?;
    Ok(cursor.into_inner())
}
