//! rekordbox recording cue sheet (.cue) parser
//!
//! Only tab-indented lines matter: `\tTRACK` opens a track block and each
//! `\t\tKEY value` line inside it becomes one field of that track.

use super::encoding;
use crate::error::{ExportError, Result};
use crate::model::{Playlist, Record, ORDER_COLUMN};
use std::path::Path;

/// Key under which the INDEX timestamp is stored
pub const TIMESTAMP_COLUMN: &str = "timestamp";

/// Parse a recording cue sheet file
pub fn parse_recording(path: &Path) -> Result<Playlist> {
    let (text, enc) = encoding::read_to_string(path)?;
    log::info!("Reading cue sheet {:?} as {}", path, enc.name());

    let playlist = parse_recording_str(&text)?;
    log::info!("Parsed {} tracks from cue sheet", playlist.len());
    Ok(playlist)
}

/// Parse cue sheet content that is already decoded
pub fn parse_recording_str(text: &str) -> Result<Playlist> {
    let mut records = Vec::new();
    let mut current: Option<Record> = None;

    for (i, line) in text.lines().enumerate() {
        if line.starts_with("\tTRACK") {
            flush(&mut records, current.replace(Record::new()));
        } else if let Some(field) = line.strip_prefix("\t\t") {
            let Some(record) = current.as_mut() else {
                log::debug!("Ignoring line {} outside a track block", i + 1);
                continue;
            };
            apply_field(record, field).ok_or_else(|| ExportError::MalformedLine {
                line: i + 1,
                content: line.to_string(),
            })?;
        } else {
            log::debug!("Ignoring line {}", i + 1);
        }
    }
    flush(&mut records, current.take());

    Ok(Playlist::from_records(records))
}

/// Append a finished track block unless nothing was read into it
fn flush(records: &mut Vec<Record>, record: Option<Record>) {
    match record {
        Some(record) if !record.is_empty() => records.push(record),
        Some(_) => log::warn!("Dropping empty track block after track {}", records.len()),
        None => {}
    }
}

/// Store one `KEY value` line on `record`, `None` if it has no value
fn apply_field(record: &mut Record, field: &str) -> Option<()> {
    let (key, rest) = field.trim_start().split_once(' ')?;

    match key.to_lowercase().as_str() {
        "file" => record.insert("file", clean_value(strip_file_type(rest))),
        "index" => {
            let (number, timestamp) = rest.trim().split_once(' ')?;
            record.insert(ORDER_COLUMN, clean_value(number));
            record.insert(TIMESTAMP_COLUMN, clean_value(timestamp));
        }
        "performer" => record.insert("artist", clean_value(rest)),
        other => record.insert(other, clean_value(rest)),
    }
    Some(())
}

/// Drop the trailing file type tag, as in `"mix.wav" WAVE`
fn strip_file_type(rest: &str) -> &str {
    let rest = rest.trim();
    if rest.ends_with('"') {
        return rest;
    }
    rest.rsplit_once(' ').map_or(rest, |(path, _)| path)
}

/// Trim whitespace and one layer of double quotes
fn clean_value(value: &str) -> String {
    let value = value.trim();
    let value = value.strip_prefix('"').unwrap_or(value);
    let value = value.strip_suffix('"').unwrap_or(value);
    value.to_string()
}
