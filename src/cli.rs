//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`ExportFormat`] - per-file export format options
//!
//! [`ExportFormat`] is usable outside of CLI context:
//!
//! ```rust
//! use chatscrub::cli::ExportFormat;
//!
//! let format = ExportFormat::Json;
//! assert_eq!(format.extension(), "json");
//! println!("Format: {}", format); // "JSON"
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::options::DisplayOptions;

/// Scrub exported chat transcripts: redact dates, times, senders, and
/// media placeholders, then re-export as text, JSON, or a bulk archive.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatscrub")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatscrub chat.txt
    chatscrub export.zip -o scrubbed/
    chatscrub chat.txt --anonymize --strip-media
    chatscrub chat.txt --keep-dates --keep-times --format json
    chatscrub a.txt b.txt export.zip --bulk
    chatscrub chat.txt --after 2023-12-01 --from Alice
    chatscrub export.zip --list")]
pub struct Args {
    /// Input files: .txt transcripts and .zip bundles (others are skipped)
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Directory to write exports into
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Per-file export format
    #[arg(short, long, value_enum, default_value = "txt")]
    pub format: ExportFormat,

    /// Prefix for export file names
    #[arg(long, default_value = crate::export::DEFAULT_PREFIX)]
    pub prefix: String,

    /// Keep dates in text exports (hidden by default)
    #[arg(long)]
    pub keep_dates: bool,

    /// Keep times in text exports (hidden by default)
    #[arg(long)]
    pub keep_times: bool,

    /// Replace sender names with User1, User2, ... pseudonyms
    #[arg(short, long)]
    pub anonymize: bool,

    /// Drop "<Media omitted>" placeholder messages
    #[arg(long)]
    pub strip_media: bool,

    /// Write one ZIP archive over all loaded files instead of per-file exports
    #[arg(short, long)]
    pub bulk: bool,

    /// Keep only messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Keep only messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Keep only messages from this sender
    #[arg(long, value_name = "USER")]
    pub from: Option<String>,

    /// List loaded files and message counts without exporting
    #[arg(short, long)]
    pub list: bool,
}

impl Args {
    /// Translates the CLI flags into display options.
    ///
    /// The flags are phrased positively (`--keep-dates`) while the
    /// options default to hiding, so each keep flag clears its hide
    /// toggle.
    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions::new()
            .with_hide_dates(!self.keep_dates)
            .with_hide_times(!self.keep_times)
            .with_anonymize(self.anonymize)
            .with_hide_media(self.strip_media)
    }
}

/// Per-file export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Reconstructed transcript text (default)
    #[default]
    Txt,

    /// Pretty-printed JSON array of messages
    Json,
}

impl ExportFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Txt => "txt",
            ExportFormat::Json => "json",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["txt", "json"]
    }

    /// Returns the MIME type for this format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Txt => "text/plain",
            ExportFormat::Json => "application/json",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Txt => write!(f, "TXT"),
            ExportFormat::Json => write!(f, "JSON"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "txt" | "text" => Ok(ExportFormat::Txt),
            "json" => Ok(ExportFormat::Json),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                ExportFormat::all_names().join(", ")
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_parse() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_format_display() {
        assert_eq!(ExportFormat::Txt.to_string(), "TXT");
        assert_eq!(ExportFormat::Json.to_string(), "JSON");
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("txt".parse::<ExportFormat>().unwrap(), ExportFormat::Txt);
        assert_eq!("text".parse::<ExportFormat>().unwrap(), ExportFormat::Txt);
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert!("xml".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_format_extension() {
        assert_eq!(ExportFormat::Txt.extension(), "txt");
        assert_eq!(ExportFormat::Json.extension(), "json");
    }

    #[test]
    fn test_format_serde() {
        let format = ExportFormat::Json;
        let json = serde_json::to_string(&format).unwrap();
        assert_eq!(json, "\"json\"");

        let parsed: ExportFormat = serde_json::from_str("\"txt\"").unwrap();
        assert_eq!(parsed, ExportFormat::Txt);
    }

    #[test]
    fn test_display_options_mapping() {
        let args = Args::parse_from(["chatscrub", "chat.txt", "--keep-dates", "--anonymize"]);
        let options = args.display_options();

        assert!(!options.hide_dates);
        assert!(options.hide_times);
        assert!(options.anonymize);
        assert!(!options.hide_media);
    }
}
