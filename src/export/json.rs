//! JSON export writer.

use std::fs;
use std::path::Path;

use crate::Message;
use crate::error::Result;
use crate::options::DisplayOptions;

/// Serializes messages as a pretty-printed JSON array.
///
/// Media placeholders are filtered exactly as in the text form. Date and
/// time hiding does not apply here: the JSON record always carries the
/// full field set, with the key order fixed by the external contract as
/// `sender, message, date, time, isMediaOmitted`.
///
/// # Format
///
/// ```json
/// [
///   {
///     "sender": "Alice",
///     "message": "hello there",
///     "date": "12/5/23",
///     "time": "9:41 AM",
///     "isMediaOmitted": false
///   }
/// ]
/// ```
pub fn to_json(messages: &[Message], options: &DisplayOptions) -> Result<String> {
    let visible: Vec<&Message> = messages
        .iter()
        .filter(|msg| !(options.hide_media && msg.is_media))
        .collect();

    Ok(serde_json::to_string_pretty(&visible)?)
}

/// Writes the JSON export to a file.
pub fn write_json(messages: &[Message], path: &Path, options: &DisplayOptions) -> Result<()> {
    fs::write(path, to_json(messages, options)?)?;
    Ok(())
}
