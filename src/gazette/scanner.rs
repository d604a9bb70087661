// src/gazette/scanner.rs
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Lists the PDF files directly inside `dir`, sorted by name.
/// The directory is created when it does not exist yet.
pub fn scan_pdf_files(dir: &Path) -> Result<Vec<PathBuf>, io::Error> {
    if !dir.exists() {
        tracing::info!("Input directory {} does not exist, creating it", dir.display());
        fs::create_dir_all(dir)?;
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && has_pdf_extension(&path) {
            files.push(path);
        }
    }
    files.sort();

    tracing::debug!("Found {} PDF files in {}", files.len(), dir.display());
    Ok(files)
}

fn has_pdf_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}
