// src/batch.rs
//! The batch loop: enumerate PDFs, read them, extract records, export.

use crate::extractors::{fields, splitter, split_gazette, ExtractedRecord, FieldExtractor};
use crate::gazette::{scan_pdf_files, TextSource};
use crate::storage::{CsvExporter, FailedFile, RunSummary};
use crate::utils::{text_debug, AppError};
use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};

/// How many records one input file produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitMode {
    /// The whole file is one document.
    #[default]
    PerFile,
    /// The file is a full gazette issue, cut into one record per decree or resolution.
    Documents,
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub split_mode: SplitMode,
    pub write_summary: bool,
    pub debug: bool,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub files_found: usize,
    pub records: Vec<ExtractedRecord>,
    pub failures: Vec<FailedFile>,
}

impl BatchReport {
    pub fn files_processed(&self) -> usize {
        self.files_found - self.failures.len()
    }
}

#[derive(Debug)]
pub struct RunOutcome {
    pub report: BatchReport,
    pub results_file: Option<PathBuf>,
    pub summary_file: Option<PathBuf>,
}

/// Records for one file's text under the given split mode.
pub fn records_for_text(
    extractor: &FieldExtractor,
    text: &str,
    filename: &str,
    split_mode: SplitMode,
) -> Vec<ExtractedRecord> {
    match split_mode {
        SplitMode::PerFile => vec![extractor.extract(text, filename)],
        SplitMode::Documents => {
            let segments = split_gazette(text);
            if segments.is_empty() {
                tracing::warn!("No decree or resolution found in {}", filename);
            }
            segments
                .into_iter()
                .map(|segment| extractor.extract(segment.text, filename).with_ministerio(segment.ministry))
                .collect()
        }
    }
}

/// Reads and extracts every file in order. A file that cannot be read is
/// logged and recorded as a failure; the batch carries on.
pub fn process_files<S: TextSource>(
    source: &S,
    extractor: &FieldExtractor,
    files: &[PathBuf],
    split_mode: SplitMode,
    debug_dir: Option<&Path>,
) -> BatchReport {
    let mut report = BatchReport { files_found: files.len(), ..Default::default() };

    for path in files {
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        tracing::info!("Procesando {}...", filename);

        let text = match source.read_text(path) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Skipping {}: {}", filename, e);
                report.failures.push(FailedFile { archivo: filename, error: e.to_string() });
                continue;
            }
        };

        if let Some(debug_dir) = debug_dir {
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| filename.clone());
            if let Err(e) = text_debug::save_debug_text(&text, debug_dir, &stem, &debug_patterns()) {
                tracing::warn!("Failed to save debug text for {}: {}", filename, e);
            }
        }

        let records = records_for_text(extractor, &text, &filename, split_mode);
        tracing::debug!("{} produced {} records", filename, records.len());
        report.records.extend(records);
    }

    report
}

fn debug_patterns() -> Vec<(&'static regex::Regex, &'static str)> {
    let mut patterns = fields::anchor_patterns();
    patterns.push((&*splitter::MINISTRY_HEADING_RE, "ministerio"));
    patterns.push((&*splitter::DOCUMENT_OPENER_RE, "documento"));
    patterns
}

/// Runs the whole pipeline. Nothing is written when the input directory holds
/// no PDFs. Only export failures are returned as errors.
pub fn run<S: TextSource>(
    config: &RunConfig,
    source: &S,
    extractor: &FieldExtractor,
    run_timestamp: NaiveDateTime,
) -> Result<RunOutcome, AppError> {
    let files = scan_pdf_files(&config.input_dir)?;
    if files.is_empty() {
        tracing::info!("No PDF files found in {}", config.input_dir.display());
        return Ok(RunOutcome { report: BatchReport::default(), results_file: None, summary_file: None });
    }

    // Fail on an unusable output directory before spending time on the PDFs.
    let exporter = CsvExporter::new(&config.output_dir)?;
    let debug_dir = config.debug.then(|| config.output_dir.join("debug"));

    let report = process_files(source, extractor, &files, config.split_mode, debug_dir.as_deref());
    let results_file = exporter.export(&report.records, &run_timestamp)?;

    let summary_file = if config.write_summary {
        let summary = RunSummary {
            generated_at: run_timestamp.format("%Y-%m-%dT%H:%M:%S").to_string(),
            input_dir: config.input_dir.display().to_string(),
            results_file: results_file
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
            files_found: report.files_found,
            files_processed: report.files_processed(),
            records: report.records.len(),
            failed_files: report.failures.clone(),
        };
        Some(exporter.export_summary(&summary, &run_timestamp)?)
    } else {
        None
    };

    Ok(RunOutcome { report, results_file: Some(results_file), summary_file })
}
