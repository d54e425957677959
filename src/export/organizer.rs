//! Output file placement

use crate::error::{ExportError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Output path next to `input`: `<stem>_output.<extension>`
///
/// Only the final extension of `input` is replaced.
pub fn output_path(input: &Path, extension: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{}_output.{}", stem, extension))
}

/// Write `contents` to `path`, replacing any existing file
pub fn write_output(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|e| ExportError::io(path, e))?;
    log::debug!("Wrote {} bytes to {:?}", contents.len(), path);
    Ok(())
}
