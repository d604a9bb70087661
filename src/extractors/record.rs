// src/extractors/record.rs
use serde::{Serialize, Serializer};
use std::fmt;

/// Class of official document, decided by the first keyword found in the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentType {
    Decreto,
    Resolucion,
    #[default]
    Unknown,
}

impl DocumentType {
    /// Label written to the `tipo_documento` column. Unknown documents leave it blank.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::Decreto => "DECRETO",
            DocumentType::Resolucion => "RESOLUCIÓN",
            DocumentType::Unknown => "",
        }
    }

    /// Maps a matched keyword back to its type. Accepts the keyword with or
    /// without the accent.
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "DECRETO" => DocumentType::Decreto,
            "RESOLUCIÓN" | "RESOLUCION" => DocumentType::Resolucion,
            _ => DocumentType::Unknown,
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentType::Unknown => f.write_str("UNKNOWN"),
            other => f.write_str(other.label()),
        }
    }
}

impl Serialize for DocumentType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

// --- Data Structures ---
/// One row of the output table. Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedRecord {
    pub ministerio: String,           // Issuing ministry, empty when no anchor matched
    pub tipo_documento: DocumentType, // DECRETO / RESOLUCIÓN / blank
    pub titulo: String,               // First non-empty line
    pub proposito: String,            // Text between "por la cual" and "ACUERDO"
    pub contenido: String,            // Body after the purpose segment
    pub archivo: String,              // Source filename
}

impl ExtractedRecord {
    /// Replaces the ministry, used when the gazette splitter already knows
    /// which ministry section a document belongs to.
    pub fn with_ministerio(mut self, ministerio: impl Into<String>) -> Self {
        self.ministerio = ministerio.into();
        self
    }
}
