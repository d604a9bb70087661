// src/extractors/ministry.rs
//! Rules that decide which line of a document names the issuing ministry.
//!
//! The gazette does not label the ministry, it only places it near the top of
//! each issue. Every convention lives behind [`MinistryRule`] so a layout change
//! means writing one new rule instead of touching the field extractor.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// How many non-empty lines count as the header area.
const HEADER_AREA_LINES: usize = 15;

static MINISTRY_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^ministerio\b").expect("Failed to compile MINISTRY_LINE_RE")
});

/// Strategy for locating the ministry name in a document's raw text.
pub trait MinistryRule: fmt::Debug + Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Returns the ministry name, or `None` when the anchor is missing.
    fn find<'t>(&self, text: &'t str) -> Option<&'t str>;
}

/// First header line that starts with "Ministerio".
#[derive(Debug, Default, Clone, Copy)]
pub struct HeaderPatternRule;

impl MinistryRule for HeaderPatternRule {
    fn name(&self) -> &'static str {
        "pattern"
    }

    fn find<'t>(&self, text: &'t str) -> Option<&'t str> {
        non_empty_lines(text)
            .take(HEADER_AREA_LINES)
            .find(|line| MINISTRY_LINE_RE.is_match(line))
    }
}

/// The N-th non-empty line (1-based) of the text.
#[derive(Debug, Clone, Copy)]
pub struct FixedLineRule {
    pub line: usize,
}

impl MinistryRule for FixedLineRule {
    fn name(&self) -> &'static str {
        "line"
    }

    fn find<'t>(&self, text: &'t str) -> Option<&'t str> {
        non_empty_lines(text).nth(self.line.checked_sub(1)?)
    }
}

/// Never finds a ministry. Useful when the input carries none.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoMinistryRule;

impl MinistryRule for NoMinistryRule {
    fn name(&self) -> &'static str {
        "none"
    }

    fn find<'t>(&self, _text: &'t str) -> Option<&'t str> {
        None
    }
}

fn non_empty_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// Rule selection as given on the command line: `pattern`, `line:N` or `none`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MinistryRuleKind {
    #[default]
    Pattern,
    Line(usize),
    None,
}

impl MinistryRuleKind {
    pub fn build(self) -> Box<dyn MinistryRule> {
        match self {
            MinistryRuleKind::Pattern => Box::new(HeaderPatternRule),
            MinistryRuleKind::Line(line) => Box::new(FixedLineRule { line }),
            MinistryRuleKind::None => Box::new(NoMinistryRule),
        }
    }
}

impl FromStr for MinistryRuleKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rule = s.trim().to_ascii_lowercase();
        match rule.as_str() {
            "pattern" => Ok(MinistryRuleKind::Pattern),
            "none" => Ok(MinistryRuleKind::None),
            _ => {
                let number = rule.strip_prefix("line:").ok_or_else(|| {
                    format!("unknown ministry rule '{}' (expected pattern, line:N or none)", s)
                })?;
                match number.parse::<usize>() {
                    Ok(line) if line > 0 => Ok(MinistryRuleKind::Line(line)),
                    _ => Err(format!("invalid line number in ministry rule '{}' (lines start at 1)", s)),
                }
            }
        }
    }
}

impl fmt::Display for MinistryRuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinistryRuleKind::Pattern => f.write_str("pattern"),
            MinistryRuleKind::Line(line) => write!(f, "line:{}", line),
            MinistryRuleKind::None => f.write_str("none"),
        }
    }
}
