//! Playlist serializers
//!
//! A writer turns a trimmed playlist into the full contents of one output
//! file. Rendering happens in memory so a failed run never leaves a partial
//! file behind.

use super::config::OutputFormat;
use crate::error::{ExportError, Result};
use crate::model::Playlist;
use std::collections::BTreeSet;

/// Separator between fields of one song in plain text output
pub const TEXT_SEPARATOR: &str = " - ";

/// Serializer trait - one implementation per output format
pub trait PlaylistWriter {
    /// Format this writer produces
    fn format(&self) -> OutputFormat;

    /// Render `playlist` using `columns` where the format needs them
    fn render(&self, playlist: &Playlist, columns: &[String]) -> Result<String>;
}

/// Plain text writer, fields in each record's own order
#[derive(Debug, Default, Clone, Copy)]
pub struct TextWriter;

impl TextWriter {
    pub fn new() -> Self {
        Self
    }
}

impl PlaylistWriter for TextWriter {
    fn format(&self) -> OutputFormat {
        OutputFormat::Text
    }

    fn render(&self, playlist: &Playlist, _columns: &[String]) -> Result<String> {
        Ok(playlist
            .records()
            .iter()
            .map(|record| record.values().collect::<Vec<_>>().join(TEXT_SEPARATOR))
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

/// CSV writer with a header row
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvWriter;

impl CsvWriter {
    pub fn new() -> Self {
        Self
    }
}

impl PlaylistWriter for CsvWriter {
    fn format(&self) -> OutputFormat {
        OutputFormat::Csv
    }

    fn render(&self, playlist: &Playlist, columns: &[String]) -> Result<String> {
        // Every record must carry exactly the listed columns
        let mut mismatched: BTreeSet<&str> = BTreeSet::new();
        for record in playlist.records() {
            mismatched.extend(
                columns
                    .iter()
                    .map(String::as_str)
                    .filter(|c| !record.contains_key(c)),
            );
            mismatched.extend(record.keys().filter(|k| !columns.iter().any(|c| c == k)));
        }
        if !mismatched.is_empty() {
            return Err(ExportError::UnknownColumn {
                missing: mismatched.into_iter().map(str::to_string).collect(),
            });
        }

        let mut wtr = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        wtr.write_record(columns)?;
        for record in playlist.records() {
            wtr.write_record(columns.iter().map(|c| record.get(c).unwrap_or_default()))?;
        }

        let bytes = wtr
            .into_inner()
            .map_err(|e| ExportError::Csv(e.into_error().into()))?;
        String::from_utf8(bytes).map_err(|e| {
            ExportError::Csv(std::io::Error::new(std::io::ErrorKind::InvalidData, e).into())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;

    fn playlist() -> Playlist {
        let records = vec![
            [("title", "title1"), ("artist", "artist1")].into_iter().collect(),
            [("title", "title2"), ("artist", "artist2")].into_iter().collect(),
        ];
        Playlist::from_records(records)
    }

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_text_one_line_per_song() {
        let out = TextWriter::new().render(&playlist(), &[]).unwrap();
        assert_eq!(out, "title1 - artist1\ntitle2 - artist2");
    }

    #[test]
    fn test_text_empty_playlist() {
        let out = TextWriter::new()
            .render(&Playlist::from_records(Vec::new()), &[])
            .unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_csv_header_and_rows() {
        let out = CsvWriter::new()
            .render(&playlist(), &columns(&["artist", "title"]))
            .unwrap();
        assert_eq!(out, "artist,title\nartist1,title1\nartist2,title2\n");
        assert_eq!(out.split('\n').count(), 4);
    }

    #[test]
    fn test_csv_quotes_embedded_separators() {
        let record: Record = [("title", "Hello, \"World\"")].into_iter().collect();
        let out = CsvWriter::new()
            .render(&Playlist::from_records(vec![record]), &columns(&["title"]))
            .unwrap();
        assert_eq!(out, "title\n\"Hello, \"\"World\"\"\"\n");
    }

    #[test]
    fn test_csv_missing_column() {
        let err = CsvWriter::new()
            .render(&playlist(), &columns(&["title", "album"]))
            .unwrap_err();
        match err {
            ExportError::UnknownColumn { missing } => assert_eq!(missing, vec!["album"]),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_csv_record_with_unlisted_column() {
        let err = CsvWriter::new()
            .render(&playlist(), &columns(&["title"]))
            .unwrap_err();
        match err {
            ExportError::UnknownColumn { missing } => assert_eq!(missing, vec!["artist"]),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
