// src/extractors/splitter.rs
//! Splits a full gazette issue into per-document segments grouped by ministry.

use once_cell::sync::Lazy;
use regex::Regex;

// Ministry headings sit on their own line and run to the end of it.
pub(crate) static MINISTRY_HEADING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*((?:Ministerio|MINISTERIO)\b[^\n]*)")
        .expect("Failed to compile MINISTRY_HEADING_RE")
});

// Each decree or resolution opens with its number line.
pub(crate) static DOCUMENT_OPENER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:DECRETO|RESOLUCI[ÓO]N)\s+NÚMERO").expect("Failed to compile DOCUMENT_OPENER_RE")
});

/// One decree or resolution cut out of an issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSegment<'a> {
    pub ministry: &'a str,
    pub text: &'a str,
}

/// Cuts `text` into ministry sections, then each section into documents.
///
/// Text ahead of the first ministry heading (cover, index) is dropped, as is
/// section text ahead of the first document opener. Segments come back in
/// document order.
pub fn split_gazette(text: &str) -> Vec<DocumentSegment<'_>> {
    let headings: Vec<_> = MINISTRY_HEADING_RE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .collect();

    let mut segments = Vec::new();
    for (idx, heading) in headings.iter().enumerate() {
        let section_end = headings
            .get(idx + 1)
            .map(|next| next.start())
            .unwrap_or(text.len());
        let section = &text[heading.end()..section_end];
        let ministry = heading.as_str().trim();

        let openers: Vec<usize> = DOCUMENT_OPENER_RE.find_iter(section).map(|m| m.start()).collect();
        if openers.is_empty() {
            tracing::debug!("Ministry section '{}' holds no decree or resolution", ministry);
            continue;
        }

        for (j, &start) in openers.iter().enumerate() {
            let end = openers.get(j + 1).copied().unwrap_or(section.len());
            let document = section[start..end].trim();
            if !document.is_empty() {
                segments.push(DocumentSegment { ministry, text: document });
            }
        }
    }

    tracing::debug!("Split gazette into {} documents across {} ministry sections", segments.len(), headings.len());
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    const ISSUE: &str = "DIARIO OFICIAL\nÍndice: DECRETO NÚMERO 1 ... pág 2\n\
        MINISTERIO DE HACIENDA Y CRÉDITO PÚBLICO\n\
        DECRETO NÚMERO 100 DE 2024\npor la cual se reglamenta ACUERDO\nArtículo 1.\n\
        RESOLUCIÓN NÚMERO 7 DE 2024\npor la cual se fija ACUERDO\nArtículo 1.\n\
        Ministerio de Educación Nacional\n\
        Nota editorial sin número\n\
        RESOLUCION NÚMERO 8 DE 2024\nsin marcadores\n";

    #[test]
    fn test_split_by_ministry_and_opener() {
        let segments = split_gazette(ISSUE);
        assert_eq!(segments.len(), 3);

        assert_eq!(segments[0].ministry, "MINISTERIO DE HACIENDA Y CRÉDITO PÚBLICO");
        assert!(segments[0].text.starts_with("DECRETO NÚMERO 100 DE 2024"));
        assert!(segments[0].text.ends_with("Artículo 1."));
        assert!(!segments[0].text.contains("RESOLUCIÓN NÚMERO 7"));

        assert_eq!(segments[1].ministry, "MINISTERIO DE HACIENDA Y CRÉDITO PÚBLICO");
        assert!(segments[1].text.starts_with("RESOLUCIÓN NÚMERO 7 DE 2024"));
        assert!(!segments[1].text.contains("Ministerio de Educación"));

        assert_eq!(segments[2].ministry, "Ministerio de Educación Nacional");
        assert_eq!(segments[2].text, "RESOLUCION NÚMERO 8 DE 2024\nsin marcadores");
    }

    #[test]
    fn test_preamble_and_mid_line_mentions_are_not_sections() {
        let text = "Portada DECRETO NÚMERO 9\nen el Ministerio de Salud se dijo\n";
        assert!(split_gazette(text).is_empty());
    }

    #[test]
    fn test_section_without_documents() {
        assert!(split_gazette("Ministerio de Cultura\nsolo avisos\n").is_empty());
        assert!(split_gazette("").is_empty());
    }
}
