//! Text encoding detection for rekordbox exports
//!
//! rekordbox writes history files as UTF-16 on some platforms and UTF-8 on
//! others. Candidates are probed in order against the first line only.

use crate::error::{ExportError, Result};
use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};
use std::fs;
use std::path::Path;

/// Candidate encodings, in probing order
pub const CANDIDATES: [TextEncoding; 2] = [TextEncoding::Utf8, TextEncoding::Utf16];

/// Encodings a rekordbox export may use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    /// Byte order taken from the BOM, little-endian without one
    Utf16,
}

impl TextEncoding {
    pub fn name(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "UTF-8",
            TextEncoding::Utf16 => "UTF-16",
        }
    }

    /// Concrete decoder and the payload with any BOM removed
    fn resolve<'a>(&self, bytes: &'a [u8]) -> (&'static Encoding, &'a [u8]) {
        match self {
            TextEncoding::Utf8 => (UTF_8, bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes)),
            TextEncoding::Utf16 => match Encoding::for_bom(bytes) {
                Some((enc, bom_len)) if enc == UTF_16LE || enc == UTF_16BE => {
                    (enc, &bytes[bom_len..])
                }
                _ => (UTF_16LE, bytes),
            },
        }
    }

    /// Strictly decode the whole buffer, `None` on any malformed sequence
    pub fn decode(&self, bytes: &[u8]) -> Option<String> {
        let (enc, payload) = self.resolve(bytes);
        if enc != UTF_8 && payload.len() % 2 != 0 {
            return None;
        }
        enc.decode_without_bom_handling_and_without_replacement(payload)
            .map(|text| text.into_owned())
    }

    /// Whether the first line of `bytes` decodes cleanly
    pub fn reads_first_line(&self, bytes: &[u8]) -> bool {
        let (enc, payload) = self.resolve(bytes);
        let line = if enc == UTF_8 {
            let end = payload
                .iter()
                .position(|&b| b == b'\n')
                .map_or(payload.len(), |i| i + 1);
            &payload[..end]
        } else {
            let newline: [u8; 2] = if enc == UTF_16BE { [0, b'\n'] } else { [b'\n', 0] };
            let end = payload
                .chunks(2)
                .position(|unit| unit == newline)
                .map_or(payload.len(), |i| (i + 1) * 2);
            let line = &payload[..end];
            if line.len() % 2 != 0 {
                return false;
            }
            line
        };
        enc.decode_without_bom_handling_and_without_replacement(line)
            .is_some()
    }
}

/// Pick the first candidate that reads the first line of `bytes`
pub fn detect(bytes: &[u8]) -> Option<TextEncoding> {
    CANDIDATES.into_iter().find(|enc| enc.reads_first_line(bytes))
}

/// Read a whole export file as text, detecting its encoding
pub fn read_to_string(path: &Path) -> Result<(String, TextEncoding)> {
    let bytes = fs::read(path).map_err(|e| ExportError::io(path, e))?;

    let encoding = detect(&bytes).ok_or_else(|| ExportError::Encoding {
        path: path.to_path_buf(),
        tried: CANDIDATES.iter().map(TextEncoding::name).collect(),
    })?;
    log::debug!("Detected {} for {:?}", encoding.name(), path);

    let text = encoding.decode(&bytes).ok_or_else(|| ExportError::Decode {
        path: path.to_path_buf(),
        encoding: encoding.name(),
    })?;
    Ok((text, encoding))
}
