// src/main.rs
mod batch;
mod extractors;
mod gazette;
mod storage;
mod utils;

use batch::{RunConfig, SplitMode};
use clap::Parser;
use extractors::{FieldExtractor, MinistryRuleKind};
use gazette::PdfTextReader;
use std::path::PathBuf;
use utils::AppError;

/// Extracts decrees and resolutions from Diario Oficial PDFs into a CSV
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding the gazette PDFs
    #[arg(short, long, env = "GAZETTE_INPUT_DIR", default_value = "data")]
    input_dir: PathBuf,

    /// Directory where resultados_<timestamp>.csv is written
    #[arg(short, long, env = "GAZETTE_OUTPUT_DIR", default_value = "resultados")]
    output_dir: PathBuf,

    /// How to find the ministry: pattern, line:N or none
    #[arg(long, env = "GAZETTE_MINISTRY_RULE", default_value = "pattern")]
    ministry_rule: MinistryRuleKind,

    /// Treat each PDF as a full issue and emit one row per decree or resolution
    #[arg(long)]
    split_documents: bool,

    /// Also write a JSON run summary next to the CSV
    #[arg(long)]
    summary: bool,

    /// Debug mode - verbose logs and annotated text dumps under <output-dir>/debug
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<(), AppError> {
    // 1. Parse CLI Arguments
    let args = Args::parse();

    // 2. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging(args.debug);
    tracing::info!("Starting processing for args: {:?}", args);

    // 3. Capture the run timestamp once; it names every output file
    let run_timestamp = chrono::Local::now().naive_local();

    let extractor = FieldExtractor::new(args.ministry_rule.build());
    tracing::debug!("Using ministry rule '{}'", extractor.ministry_rule_name());

    let config = RunConfig {
        input_dir: args.input_dir,
        output_dir: args.output_dir,
        split_mode: if args.split_documents { SplitMode::Documents } else { SplitMode::PerFile },
        write_summary: args.summary,
        debug: args.debug,
    };

    // 4. Process every PDF and export
    let outcome = batch::run(&config, &PdfTextReader, &extractor, run_timestamp)?;

    match outcome.results_file {
        Some(path) => {
            tracing::info!("Resultados guardados en: {}", path.display());
            tracing::info!(
                "Processing finished. Files: {}, processed: {}, failed: {}, records: {}",
                outcome.report.files_found,
                outcome.report.files_processed(),
                outcome.report.failures.len(),
                outcome.report.records.len()
            );
            for failure in &outcome.report.failures {
                tracing::warn!("Not processed: {} ({})", failure.archivo, failure.error);
            }
        }
        None => tracing::info!("No se encontraron archivos PDF en {}", config.input_dir.display()),
    }
    if let Some(path) = outcome.summary_file {
        tracing::info!("Run summary: {}", path.display());
    }

    Ok(())
}
