//! rekordbox play history (.txt) parser
//!
//! The export is tab-separated with one song per line and `#` comment lines.
//! Its column layout is fixed; any other field count means rekordbox changed
//! the format and parsing stops.

use super::encoding;
use crate::error::{ExportError, Result};
use crate::model::{Playlist, Record};
use std::path::Path;

/// Columns of a history export, in file order
pub const HISTORY_COLUMNS: [&str; 11] = [
    "order", "artwork", "title", "artist", "album", "genre", "BPM", "rating", "time", "key",
    "added",
];

/// Parse a history export file
pub fn parse_history(path: &Path) -> Result<Playlist> {
    let (text, enc) = encoding::read_to_string(path)?;
    log::info!("Reading history {:?} as {}", path, enc.name());

    let playlist = parse_history_str(&text)?;
    log::info!("Parsed {} songs from history", playlist.len());
    Ok(playlist)
}

/// Parse history export content that is already decoded
pub fn parse_history_str(text: &str) -> Result<Playlist> {
    let mut records = Vec::new();

    for (i, line) in text.lines().enumerate() {
        if line.starts_with('#') {
            log::debug!("Skipping comment line {}", i + 1);
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != HISTORY_COLUMNS.len() {
            return Err(ExportError::ColumnCount {
                line: i + 1,
                first_field: fields[0].to_string(),
                expected: HISTORY_COLUMNS.len(),
                found: fields.len(),
            });
        }

        let record: Record = HISTORY_COLUMNS.iter().copied().zip(fields).collect();
        records.push(record);
    }

    Ok(Playlist::with_columns(&HISTORY_COLUMNS, records))
}
