//! Export configuration

use crate::error::{ExportError, Result};
use crate::rekordbox::InputKind;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Configuration for one conversion run
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// rekordbox export to read
    pub input: PathBuf,

    /// Which parser reads `input`
    pub kind: InputKind,

    /// Columns to keep, in output order
    pub columns: Vec<String>,
}

/// Output file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Fields joined with " - ", one song per line
    #[default]
    #[value(name = "txt")]
    Text,

    /// Header row plus one row per song
    Csv,
}

impl OutputFormat {
    /// File extension of the written output
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "txt" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(ExportError::UnknownFormat {
                kind: "output format",
                value: s.to_string(),
            }),
        }
    }
}

impl ExportConfig {
    /// Create a new export configuration
    pub fn new(input: PathBuf, kind: InputKind) -> Self {
        Self {
            input,
            kind,
            columns: Vec::new(),
        }
    }

    /// Set the columns to keep
    pub fn with_columns<S: Into<String>>(mut self, columns: impl IntoIterator<Item = S>) -> Self {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }
}

/// Split a comma-separated column list, dropping blanks
pub fn parse_columns(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_columns() {
        assert_eq!(parse_columns("order, title ,artist"), vec!["order", "title", "artist"]);
        assert_eq!(parse_columns("title,,"), vec!["title"]);
        assert!(parse_columns("").is_empty());
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("txt".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert!(matches!(
            "json".parse::<OutputFormat>(),
            Err(ExportError::UnknownFormat { kind: "output format", .. })
        ));
    }

    #[test]
    fn test_builder_sets_columns() {
        let config = ExportConfig::new(PathBuf::from("h.txt"), InputKind::History)
            .with_columns(["title"]);
        assert_eq!(config.columns, vec!["title"]);
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }
}
