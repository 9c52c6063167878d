//! Edge cases for the parser, the formatters, and the selection machine.

use chatscrub::ingest::SourceInput;
use chatscrub::options::DisplayOptions;
use chatscrub::selection::Click;
use chatscrub::session::Session;
use chatscrub::{export, parse};

// =============================================================================
// Parser edge cases
// =============================================================================

#[test]
fn test_crlf_line_endings() {
    let messages = parse("12/5/23, 9:41 AM - Alice: hello\r\n12/5/23, 9:42 AM - Bob: hi\r\n");
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].body(), "hello");
    assert_eq!(messages[1].body(), "hi");
}

#[test]
fn test_unicode_senders_and_bodies() {
    let messages = parse("12/5/23, 9:41 AM - Мария: Добрый вечер 🎉");
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].sender(), "Мария");
    assert_eq!(messages[0].body(), "Добрый вечер 🎉");
}

#[test]
fn test_sender_with_phone_number_shape() {
    let messages = parse("12/5/23, 9:41 AM - +1 555 010 9999: who is this");
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].sender(), "+1 555 010 9999");
}

#[test]
fn test_body_with_url() {
    let messages = parse("12/5/23, 9:41 AM - Alice: see https://example.com/a?b=c");
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].body(), "see https://example.com/a?b=c");
}

#[test]
fn test_time_without_minutes_does_not_match() {
    assert!(parse("12/5/23, 9 AM - Alice: hello").is_empty());
}

#[test]
fn test_missing_dash_does_not_match() {
    assert!(parse("12/5/23, 9:41 AM Alice: hello").is_empty());
}

#[test]
fn test_header_only_line_is_dropped() {
    // Encryption notices have the header but no sender colon.
    assert!(parse("12/5/23, 9:41 AM - Messages are end-to-end encrypted").is_empty());
}

#[test]
fn test_whitespace_only_input() {
    assert!(parse("   \n\t\n   ").is_empty());
}

#[test]
fn test_media_placeholder_with_padding_still_flagged() {
    // Trailing spaces are trimmed before the sentinel comparison.
    let messages = parse("12/5/23, 9:41 AM - Bob: <Media omitted>   ");
    assert_eq!(messages.len(), 1);
    assert!(messages[0].is_media_placeholder());
}

// =============================================================================
// Formatter edge cases
// =============================================================================

#[test]
fn test_all_media_hidden_yields_empty_export() {
    let messages = parse("12/5/23, 9:41 AM - Bob: <Media omitted>");
    let options = DisplayOptions::new().with_hide_media(true);
    assert_eq!(export::to_text(&messages, &options), "");
    assert_eq!(export::to_json(&messages, &options).unwrap(), "[]");
}

#[test]
fn test_prefix_separator_only_with_visible_prefix() {
    let messages = parse("12/5/23, 9:41 AM - Alice: hi");

    let hidden = export::to_text(&messages, &DisplayOptions::default());
    assert!(!hidden.contains(" - "));

    let shown = export::to_text(
        &messages,
        &DisplayOptions::new().with_hide_times(false),
    );
    assert_eq!(shown, "9:41 AM - Alice: hi");
}

// =============================================================================
// Selection edge cases (through the session)
// =============================================================================

fn three_file_session() -> Session {
    let chat = "12/5/23, 9:41 AM - Alice: hello";
    let mut session = Session::new();
    session
        .ingest(&[
            SourceInput::new("a.txt", chat.as_bytes().to_vec()),
            SourceInput::new("b.txt", chat.as_bytes().to_vec()),
            SourceInput::new("c.txt", chat.as_bytes().to_vec()),
        ])
        .unwrap();
    session
}

#[test]
fn test_shift_click_before_any_click_is_noop() {
    let mut session = three_file_session();
    let target = session.files()[1].id();

    session.click(target, Click::SHIFT);

    assert!(session.selection().selected.is_empty());
    assert_eq!(session.selection().anchor, None);
    // Ingest focus is untouched.
    assert_eq!(session.selection().active, Some(session.files()[0].id()));
}

#[test]
fn test_ctrl_click_as_first_gesture() {
    let mut session = three_file_session();
    let second = session.files()[1].id();

    session.click(second, Click::CTRL);

    assert!(session.selection().selected.contains(&second));
    assert_eq!(session.selection().anchor, Some(1));
    // Toggling selection does not move the preview.
    assert_eq!(session.selection().active, Some(session.files()[0].id()));
}

#[test]
fn test_click_after_delete_uses_fresh_indices() {
    let mut session = three_file_session();
    let a = session.files()[0].id();
    let c = session.files()[2].id();

    // Anchor at index 2, then delete the file in front of it.
    session.click(c, Click::PLAIN);
    session.delete_files(&[a]);

    // c now sits at index 1; a shift-click at index 0 must select both
    // remaining files, not read stale positions.
    let b = session.files()[0].id();
    session.click(b, Click::SHIFT);
    assert_eq!(session.selected_files().len(), 2);
}

#[test]
fn test_delete_unknown_id_is_harmless() {
    let mut session = three_file_session();
    let before = session.files().len();

    // Ids from an emptied-and-reloaded list no longer match anything.
    let mut other = Session::new();
    other
        .ingest(&[SourceInput::new(
            "x.txt",
            b"12/5/23, 9:41 AM - Alice: hi".to_vec(),
        )])
        .unwrap();
    let foreign = other.files()[0].id();

    session.delete_files(&[foreign]);
    assert_eq!(session.files().len(), before);
}

#[test]
fn test_empty_file_parses_to_zero_messages_but_still_loads() {
    let mut session = Session::new();
    session
        .ingest(&[SourceInput::new("empty.txt", Vec::new())])
        .unwrap();

    assert_eq!(session.files().len(), 1);
    assert_eq!(session.files()[0].message_count(), 0);

    // It is active (only file) and exports an empty payload.
    let export = session.export_active_text("WA").unwrap();
    assert!(export.payload.is_empty());
}
