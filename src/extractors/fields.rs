// src/extractors/fields.rs

// --- Imports ---
use crate::extractors::ministry::{HeaderPatternRule, MinistryRule};
use crate::extractors::record::{DocumentType, ExtractedRecord};
use once_cell::sync::Lazy;
use regex::Regex;

// --- Regex Patterns for Marker Anchors (Lazy Static) ---
// Keyword that classifies the document. Case-sensitive on purpose: the gazette
// prints these in capitals, lowercase mentions are just prose.
pub(crate) static DOCUMENT_TYPE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(DECRETO|RESOLUCI[ÓO]N)\b").expect("Failed to compile DOCUMENT_TYPE_RE")
});

// Opening phrase of the purpose statement. PDF text often breaks or doubles
// the spaces between the words.
pub(crate) static PURPOSE_START_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)por\s+la\s+cual").expect("Failed to compile PURPOSE_START_RE")
});

// Closing anchor of the purpose statement. Lowercase "de acuerdo con" is
// common in the recitals and must not end the segment.
pub(crate) static PURPOSE_END_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"ACUERDO").expect("Failed to compile PURPOSE_END_RE")
});

// --- Main Extractor Structure ---
/// Turns the raw text of one document into an [`ExtractedRecord`].
///
/// Extraction never fails: every missing anchor leaves its field empty.
#[derive(Debug)]
pub struct FieldExtractor {
    ministry_rule: Box<dyn MinistryRule>,
}

impl Default for FieldExtractor {
    fn default() -> Self {
        Self::new(Box::new(HeaderPatternRule))
    }
}

impl FieldExtractor {
    pub fn new(ministry_rule: Box<dyn MinistryRule>) -> Self {
        Self { ministry_rule }
    }

    pub fn ministry_rule_name(&self) -> &'static str {
        self.ministry_rule.name()
    }

    /// Extracts the five semantic fields from `raw_text` and tags the record with `filename`.
    pub fn extract(&self, raw_text: &str, filename: &str) -> ExtractedRecord {
        let (titulo, body_start) = locate_title(raw_text);
        let tipo_documento = detect_document_type(raw_text);
        let ministerio = self.ministry_rule.find(raw_text).unwrap_or_default();

        let (proposito, contenido) = match locate_purpose(raw_text) {
            Some((purpose, purpose_end)) => (purpose, raw_text[purpose_end..].trim()),
            None => ("", raw_text[body_start..].trim()),
        };

        tracing::trace!(
            "Extracted {} from {}: type={}, ministry={:?}, purpose {} bytes, content {} bytes",
            if titulo.is_empty() { "<untitled>" } else { titulo },
            filename,
            tipo_documento,
            ministerio,
            proposito.len(),
            contenido.len()
        );

        ExtractedRecord {
            ministerio: ministerio.to_string(),
            tipo_documento,
            titulo: titulo.to_string(),
            proposito: proposito.to_string(),
            contenido: contenido.to_string(),
            archivo: filename.to_string(),
        }
    }
}

/// Returns the first non-empty line (trimmed) and the byte offset right after it.
/// For text with no content the title is empty and the offset is the end of text.
fn locate_title(text: &str) -> (&str, usize) {
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        offset += line.len();
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            return (trimmed, offset);
        }
    }
    ("", text.len())
}

/// First document keyword in text order decides the type.
fn detect_document_type(text: &str) -> DocumentType {
    DOCUMENT_TYPE_RE
        .find(text)
        .map(|m| DocumentType::from_keyword(m.as_str()))
        .unwrap_or_default()
}

/// Finds the purpose between "por la cual" and the next "ACUERDO".
/// Returns the trimmed purpose and the byte offset just past "ACUERDO".
fn locate_purpose(text: &str) -> Option<(&str, usize)> {
    let start = PURPOSE_START_RE.find(text)?;
    let end = PURPOSE_END_RE.find_at(text, start.end())?;
    Some((text[start.end()..end.start()].trim(), end.end()))
}

/// Marker anchors with a label, for annotated debug output.
pub fn anchor_patterns() -> Vec<(&'static Regex, &'static str)> {
    vec![
        (&*DOCUMENT_TYPE_RE, "tipo"),
        (&*PURPOSE_START_RE, "inicio_proposito"),
        (&*PURPOSE_END_RE, "fin_proposito"),
    ]
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::ministry::{FixedLineRule, NoMinistryRule};

    const DECREE: &str = "DECRETO NÚMERO 123 DE 2024\n\
        (enero 15)\n\
        por la cual se ordena algo importante\n\
        ACUERDO\n\
        Artículo 1. Objeto.\n\
        Artículo 2. Vigencia.\n";

    #[test]
    fn test_purpose_between_anchors() {
        let record = FieldExtractor::default().extract(DECREE, "d.pdf");
        assert_eq!(record.titulo, "DECRETO NÚMERO 123 DE 2024");
        assert_eq!(record.tipo_documento, DocumentType::Decreto);
        assert_eq!(record.proposito, "se ordena algo importante");
        assert_eq!(record.contenido, "Artículo 1. Objeto.\nArtículo 2. Vigencia.");
        assert_eq!(record.archivo, "d.pdf");
    }

    #[test]
    fn test_purpose_is_trimmed_exactly() {
        let record = FieldExtractor::default().extract("X\npor la cual   \n uno, dos \t ACUERDO fin", "a.pdf");
        assert_eq!(record.proposito, "uno, dos");
        assert_eq!(record.contenido, "fin");
    }

    #[test]
    fn test_purpose_start_is_case_insensitive_and_whitespace_tolerant() {
        let record = FieldExtractor::default().extract("T\nPOR LA\n CUAL se crea ACUERDO resto", "a.pdf");
        assert_eq!(record.proposito, "se crea");
        assert_eq!(record.contenido, "resto");
    }

    #[test]
    fn test_lowercase_acuerdo_does_not_close_purpose() {
        let text = "T\npor la cual se reglamenta, de acuerdo con la ley, algo\nACUERDO\nArt 1";
        let record = FieldExtractor::default().extract(text, "a.pdf");
        assert_eq!(record.proposito, "se reglamenta, de acuerdo con la ley, algo");
        assert_eq!(record.contenido, "Art 1");
    }

    #[test]
    fn test_missing_purpose_start_falls_back_to_text_minus_title() {
        let text = "\n  RESOLUCIÓN 45  \nConsiderando que ACUERDO\nArtículo único.\n";
        let record = FieldExtractor::default().extract(text, "r.pdf");
        assert_eq!(record.titulo, "RESOLUCIÓN 45");
        assert_eq!(record.proposito, "");
        assert_eq!(record.contenido, "Considerando que ACUERDO\nArtículo único.");
    }

    #[test]
    fn test_acuerdo_before_purpose_start_is_ignored() {
        let text = "T\nACUERDO previo\npor la cual algo sin cierre";
        let record = FieldExtractor::default().extract(text, "a.pdf");
        assert_eq!(record.proposito, "");
        assert_eq!(record.contenido, "ACUERDO previo\npor la cual algo sin cierre");
    }

    #[test]
    fn test_document_type_first_occurrence_wins() {
        let extractor = FieldExtractor::default();
        assert_eq!(
            extractor.extract("DECRETO 1\nque modifica la RESOLUCIÓN 4", "a").tipo_documento,
            DocumentType::Decreto
        );
        assert_eq!(
            extractor.extract("RESOLUCION 9\ncon base en el DECRETO 2", "a").tipo_documento,
            DocumentType::Resolucion
        );
        assert_eq!(extractor.extract("Circular 3\nsin tipo", "a").tipo_documento, DocumentType::Unknown);
        // Case-sensitive: prose mentions do not count.
        assert_eq!(extractor.extract("Aviso\nel decreto citado", "a").tipo_documento, DocumentType::Unknown);
    }

    #[test]
    fn test_empty_text_yields_empty_fields() {
        let record = FieldExtractor::default().extract("", "vacio.pdf");
        assert_eq!(
            record,
            ExtractedRecord {
                ministerio: String::new(),
                tipo_documento: DocumentType::Unknown,
                titulo: String::new(),
                proposito: String::new(),
                contenido: String::new(),
                archivo: "vacio.pdf".to_string(),
            }
        );
        let whitespace = FieldExtractor::default().extract(" \n\t\n ", "blanco.pdf");
        assert_eq!(whitespace.titulo, "");
        assert_eq!(whitespace.contenido, "");
    }

    #[test]
    fn test_ministry_comes_from_rule() {
        let text = "Ministerio del Interior\nDECRETO 7\npor la cual x ACUERDO y";
        assert_eq!(FieldExtractor::default().extract(text, "a").ministerio, "Ministerio del Interior");
        assert_eq!(FieldExtractor::new(Box::new(FixedLineRule { line: 2 })).extract(text, "a").ministerio, "DECRETO 7");
        assert_eq!(FieldExtractor::new(Box::new(NoMinistryRule)).extract(text, "a").ministerio, "");
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let extractor = FieldExtractor::default();
        assert_eq!(extractor.extract(DECREE, "d.pdf"), extractor.extract(DECREE, "d.pdf"));
    }

    #[test]
    fn test_locate_title_offsets() {
        assert_eq!(locate_title("\n\nuno\ndos"), ("uno", 6));
        assert_eq!(locate_title("solo"), ("solo", 4));
        assert_eq!(locate_title(""), ("", 0));
    }
}
