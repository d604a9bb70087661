// src/storage/mod.rs
use crate::extractors::record::ExtractedRecord;
use crate::utils::error::StorageError;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Column order of the results file.
pub const CSV_HEADER: [&str; 6] = ["ministerio", "tipo_documento", "titulo", "proposito", "contenido", "archivo"];

/// Input file that could not be read, as reported in the run summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedFile {
    pub archivo: String,
    pub error: String,
}

/// Sidecar JSON describing one run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub generated_at: String,
    pub input_dir: String,
    pub results_file: String,
    pub files_found: usize,
    pub files_processed: usize,
    pub records: usize,
    pub failed_files: Vec<FailedFile>,
}

pub struct CsvExporter {
    output_dir: PathBuf,
}

impl CsvExporter {
    /// Creates a new exporter writing into `output_dir`, creating it if needed.
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Result<Self, StorageError> {
        let output_dir = output_dir.as_ref().to_path_buf();

        if !output_dir.is_dir() {
            fs::create_dir_all(&output_dir).map_err(StorageError::IoError)?;
        }

        Ok(Self { output_dir })
    }

    /// `resultados_<YYYYMMDD>_<HHMMSS>.<extension>` for the given run time.
    pub fn output_file_name(run_timestamp: &NaiveDateTime, extension: &str) -> String {
        format!("resultados_{}.{}", run_timestamp.format("%Y%m%d_%H%M%S"), extension)
    }

    /// Writes all records to a timestamped CSV and returns its path.
    ///
    /// Rows go to a temporary file in the same directory, which is renamed
    /// into place only once everything is flushed.
    pub fn export(&self, records: &[ExtractedRecord], run_timestamp: &NaiveDateTime) -> Result<PathBuf, StorageError> {
        let target = self.output_dir.join(Self::output_file_name(run_timestamp, "csv"));
        let tmp = self.temp_file()?;

        {
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(tmp.as_file());
            writer.write_record(CSV_HEADER)?;
            for record in records {
                writer.serialize(record)?;
            }
            writer.flush()?;
        }
        tmp.as_file().sync_all()?;
        tmp.persist(&target)?;

        tracing::info!("Saved {} records to {}", records.len(), target.display());
        Ok(target)
    }

    /// Writes the run summary next to the CSV, same stem, `.json` extension.
    pub fn export_summary(&self, summary: &RunSummary, run_timestamp: &NaiveDateTime) -> Result<PathBuf, StorageError> {
        let target = self.output_dir.join(Self::output_file_name(run_timestamp, "json"));

        let summary_str = serde_json::to_string_pretty(summary)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        let mut tmp = self.temp_file()?;
        tmp.write_all(summary_str.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&target)?;

        tracing::info!("Saved run summary to {}", target.display());
        Ok(target)
    }

    fn temp_file(&self) -> Result<NamedTempFile, StorageError> {
        let tmp = tempfile::Builder::new()
            .prefix(".resultados_")
            .suffix(".tmp")
            .tempfile_in(&self.output_dir)?;
        Ok(tmp)
    }
}
