//! Line-oriented transcript parser.
//!
//! Turns raw export text into an ordered sequence of [`Message`]s. The
//! grammar is the single recognized export line shape:
//!
//! ```text
//! 12/5/23, 9:41 AM - Alice: hello there
//! ```
//!
//! Lines that do not match are dropped without error: exports interleave
//! continuation lines of multi-line messages and other unstructured text,
//! and only the leading physical line of a message carries the full
//! header. Continuations are not reassembled.
//!
//! Parsing is pure: the same input always yields the same sequence.
//!
//! ```
//! use chatscrub::parse;
//!
//! let text = "12/5/23, 9:41 AM - Alice: hello there\njust a stray line";
//! let messages = parse(text);
//!
//! assert_eq!(messages.len(), 1);
//! assert_eq!(messages[0].sender(), "Alice");
//! assert_eq!(messages[0].body(), "hello there");
//! ```

use regex::Regex;

use crate::Message;

/// One export line: `<date>, <time> - <sender>: <body>`.
///
/// AM/PM is case-sensitive, matching the export writer. The sender capture
/// is non-greedy, so the first colon after the timestamp ends it.
const LINE_PATTERN: &str =
    r"^(\d{1,2}/\d{1,2}/\d{2}),\s*(\d{1,2}:\d{2}\s*[AP]M)\s*-\s*(.+?):\s*(.*)$";

/// Parses raw export text into messages.
///
/// Each newline-delimited line is trimmed and matched against the line
/// grammar once. Non-matching lines and matches whose body trims to
/// nothing yield no message; both are expected in real exports and are
/// not errors.
pub fn parse(text: &str) -> Vec<Message> {
    let regex = Regex::new(LINE_PATTERN).expect("line pattern is valid");

    text.lines()
        .filter_map(|line| parse_line(&regex, line))
        .collect()
}

fn parse_line(regex: &Regex, line: &str) -> Option<Message> {
    let caps = regex.captures(line.trim())?;

    let date = caps.get(1).map_or("", |m| m.as_str());
    let time = caps.get(2).map_or("", |m| m.as_str());
    let sender = caps.get(3).map_or("", |m| m.as_str());
    let body = caps.get(4).map_or("", |m| m.as_str()).trim();

    if body.is_empty() {
        return None;
    }

    Some(Message::new(sender, body, date, time))
}
