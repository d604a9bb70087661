// src/utils/text_debug.rs
use crate::utils::error::AppError;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Wraps every highlight in `[[kind:...]]` markers.
/// Highlights that overlap an earlier one are skipped.
pub fn annotate_text(text: &str, highlights: &[(usize, usize, &str)]) -> String {
    let mut sorted_highlights = highlights.to_vec();
    sorted_highlights.sort_by_key(|h| (h.0, h.1)); // Sort by position

    let mut annotated = String::with_capacity(text.len() + highlights.len() * 16);
    let mut last_pos = 0;
    for (start, end, kind) in sorted_highlights {
        if start < last_pos {
            continue;
        }
        annotated.push_str(&text[last_pos..start]);
        annotated.push_str(&format!("[[{}:", kind));
        annotated.push_str(&text[start..end]);
        annotated.push_str("]]");
        last_pos = end;
    }
    annotated.push_str(&text[last_pos..]);
    annotated
}

/// Writes the extracted text of one input and an annotated copy with every
/// pattern match marked, into `debug_dir`. Returns the annotated file path.
pub fn save_debug_text(
    text: &str,
    debug_dir: &Path,
    stem: &str,
    patterns: &[(&Regex, &str)],
) -> Result<PathBuf, AppError> {
    fs::create_dir_all(debug_dir)?;

    let raw_path = debug_dir.join(format!("{}.txt", stem));
    fs::write(&raw_path, text)?;

    let mut highlights = Vec::new();
    for (re, kind) in patterns {
        for mat in re.find_iter(text) {
            highlights.push((mat.start(), mat.end(), *kind));
        }
    }

    let annotated_path = debug_dir.join(format!("{}.annotated.txt", stem));
    fs::write(&annotated_path, annotate_text(text, &highlights))?;

    tracing::debug!("Saved debug text for {} ({} anchors) to {}", stem, highlights.len(), debug_dir.display());
    Ok(annotated_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotate_text_marks_and_skips_overlaps() {
        let text = "DECRETO 1 por la cual x ACUERDO y";
        let annotated = annotate_text(text, &[(24, 31, "fin"), (0, 7, "tipo"), (2, 5, "otro"), (10, 21, "inicio")]);
        assert_eq!(annotated, "[[tipo:DECRETO]] 1 [[inicio:por la cual]] x [[fin:ACUERDO]] y");
    }

    #[test]
    fn test_save_debug_text_writes_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let re = Regex::new("ACUERDO").unwrap();
        let path = save_debug_text("a ACUERDO b", dir.path(), "gaceta", &[(&re, "fin")]).unwrap();

        assert_eq!(fs::read_to_string(dir.path().join("gaceta.txt")).unwrap(), "a ACUERDO b");
        assert_eq!(fs::read_to_string(path).unwrap(), "a [[fin:ACUERDO]] b");
    }
}
