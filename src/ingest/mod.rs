//! Batch ingestion pipeline.
//!
//! Turns named byte payloads into parsed [`FileRecord`]s. Classification
//! is by file extension: `.txt` payloads are plain documents, `.zip`
//! payloads are archives whose `.txt` members each become one record, and
//! anything else is skipped without error.
//!
//! A batch commits as a whole or not at all: the first decode failure
//! abandons every record from the batch, so the caller never sees a
//! silently incomplete import. [`Session::ingest`](crate::session::Session::ingest)
//! builds on this by only appending a fully materialized batch.
//!
//! The pipeline never touches the file system; callers read bytes however
//! they like and pass them in.

#[cfg(feature = "archives")]
mod archive;

#[cfg(feature = "archives")]
pub use archive::read_archive_members;

use crate::error::{Result, ScrubError};
use crate::options::DisplayOptions;
use crate::session::FileRecord;

/// A named byte payload handed to the pipeline.
///
/// The name decides classification and, for plain documents, becomes the
/// record's display name. Archive members use their member path instead.
#[derive(Debug, Clone)]
pub struct SourceInput {
    /// Name the payload arrived under.
    pub name: String,
    /// Raw bytes.
    pub bytes: Vec<u8>,
}

impl SourceInput {
    /// Creates an input from a name and its bytes.
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    fn kind(&self) -> InputKind {
        let lower = self.name.to_lowercase();
        if lower.ends_with(".txt") {
            InputKind::Document
        } else if lower.ends_with(".zip") {
            InputKind::Archive
        } else {
            InputKind::Ignored
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputKind {
    Document,
    Archive,
    Ignored,
}

/// Processes one batch of inputs into file records.
///
/// Records come back in per-input, per-member order, parsed and, when
/// `options.anonymize` is set, anonymized. Any failure discards the
/// whole batch; the error stands in for every partial result.
pub fn ingest_batch(inputs: &[SourceInput], options: &DisplayOptions) -> Result<Vec<FileRecord>> {
    let mut records = Vec::new();

    for input in inputs {
        match input.kind() {
            InputKind::Document => {
                let text = decode_text(&input.name, input.bytes.clone())?;
                records.push(FileRecord::new(input.name.clone(), text, options));
            }
            #[cfg(feature = "archives")]
            InputKind::Archive => {
                for (member_name, text) in read_archive_members(&input.name, &input.bytes)? {
                    records.push(FileRecord::new(member_name, text, options));
                }
            }
            #[cfg(not(feature = "archives"))]
            InputKind::Archive => {}
            InputKind::Ignored => {}
        }
    }

    Ok(records)
}

fn decode_text(name: &str, bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|e| ScrubError::utf8(name, e))
}
