//! ZIP member enumeration for the ingestion pipeline.

use std::io::{Cursor, Read};

use zip::ZipArchive;
use zip::result::ZipError;

use crate::error::{Result, ScrubError};

/// Text extension recognized inside archives.
const TEXT_EXTENSION: &str = ".txt";

/// Enumerates an archive's text members.
///
/// Returns `(member_path, decoded_text)` pairs for every non-directory
/// member whose name ends in `.txt` (case-insensitive), in archive order.
/// Other members are skipped without error. A corrupt archive or an
/// undecodable member fails the whole call, which in turn fails the
/// ingestion batch.
pub fn read_archive_members(name: &str, bytes: &[u8]) -> Result<Vec<(String, String)>> {
    let mut archive =
        ZipArchive::new(Cursor::new(bytes)).map_err(|e| ScrubError::archive(name, e))?;

    let mut members = Vec::new();

    for index in 0..archive.len() {
        let mut member = archive
            .by_index(index)
            .map_err(|e| ScrubError::archive(name, e))?;

        if member.is_dir() || !member.name().to_lowercase().ends_with(TEXT_EXTENSION) {
            continue;
        }

        let member_name = member.name().to_string();
        let mut raw = Vec::new();
        member
            .read_to_end(&mut raw)
            .map_err(|e| ScrubError::archive(&member_name, ZipError::Io(e)))?;

        let text = String::from_utf8(raw).map_err(|e| ScrubError::utf8(&member_name, e))?;
        members.push((member_name, text));
    }

    Ok(members)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::ZipWriter;
    use zip::write::FileOptions;

    fn build_zip(members: &[(&str, &[u8])]) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, bytes) in members {
            writer.start_file(*name, FileOptions::default()).unwrap();
            writer.write_all(bytes).unwrap();
        }
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_reads_text_members_in_order() {
        let bytes = build_zip(&[("chat1.txt", b"a"), ("chat2.txt", b"b")]);
        let members = read_archive_members("export.zip", &bytes).unwrap();

        assert_eq!(members.len(), 2);
        assert_eq!(members[0], ("chat1.txt".to_string(), "a".to_string()));
        assert_eq!(members[1], ("chat2.txt".to_string(), "b".to_string()));
    }

    #[test]
    fn test_skips_non_text_members() {
        let bytes = build_zip(&[("chat1.txt", b"a"), ("notes.pdf", b"%PDF")]);
        let members = read_archive_members("export.zip", &bytes).unwrap();

        assert_eq!(members.len(), 1);
        assert_eq!(members[0].0, "chat1.txt");
    }

    #[test]
    fn test_member_extension_is_case_insensitive() {
        let bytes = build_zip(&[("CHAT.TXT", b"a")]);
        let members = read_archive_members("export.zip", &bytes).unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].0, "CHAT.TXT");
    }

    #[test]
    fn test_nested_member_path_is_kept() {
        let bytes = build_zip(&[("backup/2023/chat.txt", b"a")]);
        let members = read_archive_members("export.zip", &bytes).unwrap();
        assert_eq!(members[0].0, "backup/2023/chat.txt");
    }

    #[test]
    fn test_corrupt_archive_is_an_error() {
        let err = read_archive_members("export.zip", b"this is not a zip").unwrap_err();
        assert!(err.is_archive());
    }

    #[test]
    fn test_non_utf8_member_is_an_error() {
        let bytes = build_zip(&[("chat.txt", &[0xff, 0xfe][..])]);
        let err = read_archive_members("export.zip", &bytes).unwrap_err();
        assert!(err.is_utf8());
    }
}
