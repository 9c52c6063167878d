//! Plain-text export writer.

use std::fs;
use std::path::Path;

use crate::Message;
use crate::error::Result;
use crate::options::DisplayOptions;

/// Reconstructs export text from messages under the display options.
///
/// Media placeholders are dropped when `hide_media` is set. Each
/// remaining message becomes one line: the prefix is the non-hidden
/// subset of `{date, time}` joined by `", "`, followed by `" - "` only
/// when the prefix is non-empty, then `<sender>: <body>`. Lines are
/// joined with `\n`.
///
/// # Format
///
/// ```text
/// 12/5/23, 9:41 AM - Alice: hello there   (nothing hidden)
/// 9:41 AM - Alice: hello there            (dates hidden)
/// Alice: hello there                      (dates and times hidden)
/// ```
pub fn to_text(messages: &[Message], options: &DisplayOptions) -> String {
    messages
        .iter()
        .filter(|msg| !(options.hide_media && msg.is_media))
        .map(|msg| format_line(msg, options))
        .collect::<Vec<_>>()
        .join("\n")
}

fn format_line(msg: &Message, options: &DisplayOptions) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(2);
    if !options.hide_dates {
        parts.push(&msg.date);
    }
    if !options.hide_times {
        parts.push(&msg.time);
    }
    let prefix = parts.join(", ");

    if prefix.is_empty() {
        format!("{}: {}", msg.sender, msg.body)
    } else {
        format!("{} - {}: {}", prefix, msg.sender, msg.body)
    }
}

/// Writes the text export to a file.
pub fn write_text(messages: &[Message], path: &Path, options: &DisplayOptions) -> Result<()> {
    fs::write(path, to_text(messages, options))?;
    Ok(())
}
