//! Sender anonymization.
//!
//! Replaces real sender names with `User<k>` pseudonyms, numbered by
//! first appearance. The mapping is recomputed from scratch on every run,
//! so re-deriving from the same raw text always reproduces it. Two files
//! that happen to share a sender can legitimately number that sender
//! differently.
//!
//! Callers must always anonymize freshly parsed messages, never an
//! already-anonymized sequence: `UserK` names would be renumbered like
//! any other sender. [`FileRecord`](crate::session::FileRecord) enforces
//! this by deriving from raw text whenever the toggle changes.

use std::collections::HashMap;

use crate::Message;

/// Returns a copy of `messages` with every sender replaced by its
/// pseudonym. The input sequence is left untouched.
///
/// Pseudonyms are `User1, User2, …` ranked by each distinct sender's
/// first appearance:
///
/// ```
/// use chatscrub::{anonymize, parse};
///
/// let text = "\
/// 12/5/23, 9:00 AM - Bob: one
/// 12/5/23, 9:01 AM - Alice: two
/// 12/5/23, 9:02 AM - Bob: three
/// 12/5/23, 9:03 AM - Carol: four";
///
/// let senders: Vec<String> = anonymize(&parse(text))
///     .into_iter()
///     .map(|m| m.sender)
///     .collect();
/// assert_eq!(senders, ["User1", "User2", "User1", "User3"]);
/// ```
pub fn anonymize(messages: &[Message]) -> Vec<Message> {
    let mut pseudonyms: HashMap<&str, String> = HashMap::new();

    for msg in messages {
        if !pseudonyms.contains_key(msg.sender.as_str()) {
            let rank = pseudonyms.len() + 1;
            pseudonyms.insert(&msg.sender, format!("User{rank}"));
        }
    }

    messages
        .iter()
        .map(|msg| {
            let mut copy = msg.clone();
            copy.sender = pseudonyms[msg.sender.as_str()].clone();
            copy
        })
        .collect()
}
