//! rekordbox export parsing
//!
//! Reads the two text exports rekordbox produces: the play history list
//! and the cue sheet written next to a recorded mix.

pub mod encoding;
mod history;
mod recording;

pub use encoding::TextEncoding;
pub use history::{parse_history, parse_history_str, HISTORY_COLUMNS};
pub use recording::{parse_recording, parse_recording_str, TIMESTAMP_COLUMN};

use crate::error::{ExportError, Result};
use crate::model::Playlist;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Kind of rekordbox export being read
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum InputKind {
    /// Tab-separated play history (.txt)
    History,
    /// Recording cue sheet (.cue)
    Recording,
}

impl InputKind {
    /// Parse `path` with the parser for this kind
    pub fn parse(&self, path: &Path) -> Result<Playlist> {
        match self {
            InputKind::History => parse_history(path),
            InputKind::Recording => parse_recording(path),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::History => "history",
            InputKind::Recording => "recording",
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputKind {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "history" => Ok(InputKind::History),
            "recording" => Ok(InputKind::Recording),
            _ => Err(ExportError::UnknownFormat {
                kind: "input type",
                value: s.to_string(),
            }),
        }
    }
}
