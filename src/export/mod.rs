//! Export orchestration and output writing

pub mod config;
pub mod organizer;
pub mod pipeline;
pub mod writer;

pub use config::{parse_columns, ExportConfig, OutputFormat};
pub use organizer::output_path;
pub use pipeline::ExportPipeline;
pub use writer::{CsvWriter, PlaylistWriter, TextWriter, TEXT_SEPARATOR};
