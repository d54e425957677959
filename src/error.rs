//! Error types for the history parser

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No candidate encoding could read {path:?} (tried {})", .tried.join(", "))]
    Encoding {
        path: PathBuf,
        tried: Vec<&'static str>,
    },

    #[error("File {path:?} is not valid {encoding} past its first line")]
    Decode {
        path: PathBuf,
        encoding: &'static str,
    },

    #[error(
        "Incorrect number of columns for line {line} starting with {first_field:?}: expected {expected}, found {found}"
    )]
    ColumnCount {
        line: usize,
        first_field: String,
        expected: usize,
        found: usize,
    },

    #[error("Malformed line {line}: {content:?}")]
    MalformedLine { line: usize, content: String },

    #[error("Columns not found: {}", .missing.join(", "))]
    UnknownColumn { missing: Vec<String> },

    #[error("Unknown {kind} {value:?}")]
    UnknownFormat { kind: &'static str, value: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl ExportError {
    /// Wrap an IO error with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExportError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ExportError>;
