use anyhow::{Context, Result};
use clap::Parser;
use rekordbox_history_parser::export::parse_columns;
use rekordbox_history_parser::{
    CsvWriter, ExportConfig, ExportPipeline, InputKind, OutputFormat, TextWriter,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "rekordbox-history-parser")]
#[command(about = "Convert rekordbox history and recording exports to track lists", long_about = None)]
struct Args {
    /// Path to the rekordbox export (.txt history or .cue recording)
    input: String,

    /// Kind of export being read
    #[arg(long = "type", value_enum)]
    kind: InputKind,

    /// Comma-separated columns to keep, in output order
    #[arg(long)]
    columns: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Expand ~ in paths
    let input = PathBuf::from(shellexpand::tilde(&args.input).into_owned());

    let columns = parse_columns(&args.columns);
    log::debug!("Keeping columns: {:?}", columns);

    let config = ExportConfig::new(input.clone(), args.kind).with_columns(columns);

    match args.output {
        OutputFormat::Text => ExportPipeline::new(config, TextWriter::new()).export(),
        OutputFormat::Csv => ExportPipeline::new(config, CsvWriter::new()).export(),
    }
    .with_context(|| format!("Failed to convert {:?}", input))?;

    Ok(())
}
