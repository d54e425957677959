//! Conversion pipeline orchestration

use super::config::ExportConfig;
use super::organizer;
use super::writer::PlaylistWriter;
use crate::error::Result;
use crate::model::Playlist;
use std::path::PathBuf;

/// Main conversion pipeline: parse, trim, renumber, write
pub struct ExportPipeline<W: PlaylistWriter> {
    config: ExportConfig,
    writer: W,
}

impl<W: PlaylistWriter> ExportPipeline<W> {
    /// Create a new pipeline
    pub fn new(config: ExportConfig, writer: W) -> Self {
        Self { config, writer }
    }

    /// Where [`ExportPipeline::export`] writes its output
    pub fn output_path(&self) -> PathBuf {
        organizer::output_path(&self.config.input, self.writer.format().extension())
    }

    /// Run the complete conversion, returning the written file
    pub fn export(&self) -> Result<PathBuf> {
        log::info!("Converting {} export {:?}", self.config.kind, self.config.input);

        // Step 1: Parse
        let playlist = self.config.kind.parse(&self.config.input)?;

        // Step 2: Trim and renumber
        let playlist = self.transform(playlist)?;

        // Step 3: Render everything before touching the output file
        let contents = self.writer.render(&playlist, playlist.columns())?;

        let output = self.output_path();
        organizer::write_output(&output, &contents)?;

        log::info!("Wrote {} songs to {:?}", playlist.len(), output);
        Ok(output)
    }

    /// Trim to the configured columns, then renumber `order` if kept
    pub fn transform(&self, playlist: Playlist) -> Result<Playlist> {
        let mut playlist = playlist.trim(&self.config.columns)?;
        playlist.renumerate(&self.config.columns);
        Ok(playlist)
    }
}
