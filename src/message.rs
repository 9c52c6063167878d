//! Parsed chat message type.
//!
//! [`Message`] is the unit every other component operates on: the parser
//! produces them, the anonymizer rewrites their senders, and the export
//! formatters reconstruct text or JSON from them.
//!
//! # Overview
//!
//! A message carries the four pieces the export line grammar yields
//! (`sender`, `body`, `date`, `time`) plus a flag marking media
//! placeholder bodies.
//!
//! # Serialization
//!
//! The JSON field names are an external contract and differ from the
//! struct field names: `sender, message, date, time, isMediaOmitted`,
//! in exactly that order.
//!
//! ```
//! use chatscrub::Message;
//!
//! let msg = Message::new("Alice", "hello there", "12/5/23", "9:41 AM");
//! let json = serde_json::to_string(&msg)?;
//!
//! assert!(json.contains(r#""message":"hello there""#));
//! assert!(json.contains(r#""isMediaOmitted":false"#));
//! # Ok::<(), serde_json::Error>(())
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Body text the export writer substitutes for a stripped attachment.
pub const MEDIA_PLACEHOLDER: &str = "<Media omitted>";

/// One parsed chat line.
///
/// Only lines matching the export grammar produce a `Message`; everything
/// else is dropped by the parser. The anonymizer replaces `sender` when it
/// runs; all other fields are fixed once parsed. Messages are owned by the
/// file they were parsed from and live exactly as long as it does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Display name of the message author.
    pub sender: String,

    /// Text content, trimmed.
    #[serde(rename = "message")]
    pub body: String,

    /// Date string as exported, `M/D/YY`.
    pub date: String,

    /// Time string as exported, `H:MM AM|PM`.
    pub time: String,

    /// True iff the body is exactly [`MEDIA_PLACEHOLDER`].
    #[serde(rename = "isMediaOmitted")]
    pub is_media: bool,
}

/// Accepted `date, time` layouts for [`Message::timestamp`]. The space
/// before AM/PM is optional in the line grammar, so both shapes appear.
const TIMESTAMP_FORMATS: &[&str] = &["%m/%d/%y, %I:%M %p", "%m/%d/%y, %I:%M%p"];

impl Message {
    /// Creates a message from already-trimmed parts.
    ///
    /// The media flag is derived from the body, never set independently.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatscrub::{Message, MEDIA_PLACEHOLDER};
    ///
    /// let msg = Message::new("Bob", MEDIA_PLACEHOLDER, "12/5/23", "9:42 AM");
    /// assert!(msg.is_media_placeholder());
    /// ```
    pub fn new(
        sender: impl Into<String>,
        body: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        let body = body.into();
        let is_media = body == MEDIA_PLACEHOLDER;
        Self {
            sender: sender.into(),
            body,
            date: date.into(),
            time: time.into(),
            is_media,
        }
    }

    /// Returns the sender name.
    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Returns the message body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns `true` if this message is a media placeholder.
    pub fn is_media_placeholder(&self) -> bool {
        self.is_media
    }

    /// Parses the `date` and `time` strings into a timestamp.
    ///
    /// Returns `None` when the strings do not form a real calendar date or
    /// clock time. That is not an error; it only means date filters cannot
    /// match this message.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        let datetime_str = format!("{}, {}", self.date, self.time);
        TIMESTAMP_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(&datetime_str, fmt).ok())
    }
}
