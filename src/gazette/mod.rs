// src/gazette/mod.rs
pub mod reader;
pub mod scanner;

pub use reader::{PdfTextReader, TextSource};
pub use scanner::scan_pdf_files;
