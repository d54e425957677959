//! rekordbox history parser
//!
//! Converts rekordbox play history lists and recording cue sheets into
//! trimmed, renumbered track lists as plain text or CSV.

pub mod error;
pub mod export;
pub mod model;
pub mod rekordbox;

pub use error::{ExportError, Result};
pub use export::{CsvWriter, ExportConfig, ExportPipeline, OutputFormat, TextWriter};
pub use rekordbox::InputKind;
