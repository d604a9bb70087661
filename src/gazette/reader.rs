// src/gazette/reader.rs
use crate::utils::error::ReadError;
use std::panic;
use std::path::Path;

/// Anything that can turn a file on disk into plain text.
pub trait TextSource {
    fn read_text(&self, path: &Path) -> Result<String, ReadError>;
}

/// Reads PDFs with `pdf-extract`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfTextReader;

impl TextSource for PdfTextReader {
    fn read_text(&self, path: &Path) -> Result<String, ReadError> {
        let bytes = std::fs::read(path).map_err(|source| ReadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Read {} bytes from {}", bytes.len(), path.display());

        // pdf-extract panics on some malformed files instead of returning an error.
        let text = match panic::catch_unwind(|| pdf_extract::extract_text_from_mem(&bytes)) {
            Ok(Ok(text)) => text,
            Ok(Err(e)) => {
                return Err(ReadError::Pdf { path: path.to_path_buf(), message: e.to_string() });
            }
            Err(_) => {
                return Err(ReadError::Pdf {
                    path: path.to_path_buf(),
                    message: "PDF decoder panicked".to_string(),
                });
            }
        };

        let text = normalize_text(&text);
        if text.trim().is_empty() {
            tracing::warn!("{} has no extractable text (scanned image?)", path.display());
        }
        Ok(text)
    }
}

/// Line endings to `\n`, page breaks to newlines, and stray NUL/BOM characters removed.
pub fn normalize_text(raw: &str) -> String {
    raw.replace("\r\n", "\n")
        .replace(['\r', '\x0C'], "\n")
        .replace(['\u{0}', '\u{FEFF}'], "")
}
