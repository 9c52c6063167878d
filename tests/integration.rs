//! End-to-end tests driving the session the way a frontend would.

use std::io::{Cursor, Read, Write};

use chatscrub::ingest::SourceInput;
use chatscrub::options::DisplayOptions;
use chatscrub::selection::Click;
use chatscrub::session::{FileRecord, Session};
use chatscrub::{Message, anonymize, parse};

const CHAT_ONE: &str = "12/5/23, 9:41 AM - Alice: hello there\n\
                        12/5/23, 9:42 AM - Bob: <Media omitted>\n\
                        garbage line with no structure";

const CHAT_TWO: &str = "12/6/23, 8:00 AM - Carol: morning\n\
                        12/6/23, 8:01 AM - Dave: hey";

fn txt_input(name: &str, text: &str) -> SourceInput {
    SourceInput::new(name, text.as_bytes().to_vec())
}

fn zip_input(name: &str, members: &[(&str, &[u8])]) -> SourceInput {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    for (member_name, bytes) in members {
        writer
            .start_file(*member_name, zip::write::FileOptions::default())
            .unwrap();
        writer.write_all(bytes).unwrap();
    }
    SourceInput::new(name, writer.finish().unwrap().into_inner())
}

// =============================================================================
// Core scenarios
// =============================================================================

#[test]
fn test_parse_and_hide_media_scenario() {
    let messages = parse(CHAT_ONE);
    assert_eq!(messages.len(), 2);

    let mut session = Session::new();
    session.set_options(DisplayOptions::new().with_hide_media(true));
    session.ingest(&[txt_input("chat.txt", CHAT_ONE)]).unwrap();

    let export = session.export_active_text("ChatScrub").unwrap();
    assert_eq!(
        String::from_utf8(export.payload).unwrap(),
        "Alice: hello there"
    );
}

#[test]
fn test_archive_with_mixed_members_yields_only_text_files() {
    let mut session = Session::new();
    session
        .ingest(&[zip_input(
            "export.zip",
            &[
                ("chat1.txt", CHAT_ONE.as_bytes()),
                ("notes.pdf", b"%PDF-1.4 not a transcript"),
            ],
        )])
        .unwrap();

    assert_eq!(session.files().len(), 1);
    assert_eq!(session.files()[0].display_name(), "chat1.txt");
}

#[test]
fn test_full_visibility_round_trip() {
    let lines = [
        "12/5/23, 9:41 AM - Alice: hello there",
        "12/5/23, 9:42 AM - Bob: <Media omitted>",
        "12/6/23, 8:00 AM - Carol: morning",
    ];
    let text = lines.join("\n");

    let messages = parse(&text);
    let options = DisplayOptions::new()
        .with_hide_dates(false)
        .with_hide_times(false);

    assert_eq!(chatscrub::export::to_text(&messages, &options), text);
}

// =============================================================================
// Multi-file session flows
// =============================================================================

#[test]
fn test_mixed_batch_keeps_input_and_member_order() {
    let mut session = Session::new();
    session
        .ingest(&[
            txt_input("first.txt", CHAT_ONE),
            zip_input(
                "export.zip",
                &[
                    ("inner/a.txt", CHAT_TWO.as_bytes()),
                    ("inner/b.txt", CHAT_ONE.as_bytes()),
                ],
            ),
            txt_input("last.txt", CHAT_TWO),
        ])
        .unwrap();

    let names: Vec<&str> = session
        .files()
        .iter()
        .map(FileRecord::display_name)
        .collect();
    assert_eq!(names, ["first.txt", "inner/a.txt", "inner/b.txt", "last.txt"]);
}

#[test]
fn test_corrupt_archive_discards_whole_batch() {
    let mut session = Session::new();
    session.ingest(&[txt_input("kept.txt", CHAT_ONE)]).unwrap();

    let err = session
        .ingest(&[
            txt_input("would-be.txt", CHAT_TWO),
            SourceInput::new("broken.zip", b"definitely not a zip".to_vec()),
        ])
        .unwrap_err();

    assert!(err.is_archive());
    // Only the first batch survives.
    assert_eq!(session.files().len(), 1);
    assert_eq!(session.files()[0].display_name(), "kept.txt");
}

#[test]
fn test_click_shift_click_then_bulk_export() {
    let mut session = Session::new();
    session
        .ingest(&[
            txt_input("a.txt", CHAT_ONE),
            txt_input("b.txt", CHAT_TWO),
            txt_input("c.txt", CHAT_ONE),
        ])
        .unwrap();

    let first = session.files()[0].id();
    let third = session.files()[2].id();

    session.click(first, Click::PLAIN);
    session.click(third, Click::SHIFT);
    assert_eq!(session.selected_files().len(), 3);

    let export = session.export_selection_archive("WA").unwrap().unwrap();
    assert_eq!(export.file_name, "WA_BulkExport.zip");

    let mut archive = zip::ZipArchive::new(Cursor::new(export.payload)).unwrap();
    assert_eq!(archive.len(), 3);

    let mut member = archive.by_name("WA_b.txt").unwrap();
    let mut text = String::new();
    member.read_to_string(&mut text).unwrap();
    assert_eq!(text, "Carol: morning\nDave: hey");
}

#[test]
fn test_delete_selected_then_reselect() {
    let mut session = Session::new();
    session
        .ingest(&[
            txt_input("a.txt", CHAT_ONE),
            txt_input("b.txt", CHAT_TWO),
            txt_input("c.txt", CHAT_ONE),
        ])
        .unwrap();

    let a = session.files()[0].id();
    let b = session.files()[1].id();
    let c = session.files()[2].id();

    session.click(a, Click::PLAIN);
    session.click(b, Click::CTRL);
    session.delete_files(&[a, b]);

    assert_eq!(session.files().len(), 1);
    assert_eq!(session.selection().active, Some(c));
    assert!(session.selected_files().is_empty());

    // The remaining file is still clickable.
    session.click(c, Click::PLAIN);
    assert_eq!(session.selected_files().len(), 1);
}

// =============================================================================
// Anonymization across the session
// =============================================================================

#[test]
fn test_anonymize_toggle_is_session_wide_and_reversible() {
    let mut session = Session::new();
    session
        .ingest(&[txt_input("a.txt", CHAT_ONE), txt_input("b.txt", CHAT_TWO)])
        .unwrap();

    session.set_options(DisplayOptions::new().with_anonymize(true));

    // Each file numbers its own senders from scratch.
    let a_senders: Vec<&str> = session.files()[0]
        .messages()
        .iter()
        .map(Message::sender)
        .collect();
    let b_senders: Vec<&str> = session.files()[1]
        .messages()
        .iter()
        .map(Message::sender)
        .collect();
    assert_eq!(a_senders, ["User1", "User2"]);
    assert_eq!(b_senders, ["User1", "User2"]);

    session.set_options(DisplayOptions::new());
    assert_eq!(session.files()[0].messages()[0].sender(), "Alice");
    assert_eq!(session.files()[1].messages()[0].sender(), "Carol");
}

#[test]
fn test_ingest_while_anonymized_matches_rederivation() {
    let mut session = Session::new();
    session.set_options(DisplayOptions::new().with_anonymize(true));
    session.ingest(&[txt_input("a.txt", CHAT_ONE)]).unwrap();

    // A file ingested under the toggle carries the same derivation a
    // toggle flip would produce.
    assert_eq!(
        session.files()[0].messages(),
        anonymize(&parse(CHAT_ONE)).as_slice()
    );
}
