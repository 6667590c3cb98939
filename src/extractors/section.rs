// src/extractors/section.rs

// --- Imports ---
use crate::utils::error::ExtractError;
use regex::Regex;

/// Builds the pattern for a section bounded by two literal markers.
///
/// `(?s)` lets the body span lines; the lazy `.*?` stops at the first end
/// marker after the first start marker. Surrounding whitespace is eaten by
/// the `\s*` on either side of the capture.
fn section_pattern(start_marker: &str, end_marker: &str) -> Result<Regex, ExtractError> {
    let pattern = format!(
        r"(?s){}\s*(.*?)\s*{}",
        regex::escape(start_marker),
        regex::escape(end_marker)
    );
    Ok(Regex::new(&pattern)?)
}

/// Returns the trimmed text between the first `start_marker` and the first
/// `end_marker` that follows it.
///
/// Both markers are literal strings, not patterns.
pub fn extract_section(text: &str, start_marker: &str, end_marker: &str) -> Result<String, ExtractError> {
    SectionExtractor::new(start_marker, end_marker)?.extract(text)
}

// --- Extractor Structure ---

/// A section extractor with its pattern compiled once.
#[derive(Debug, Clone)]
pub struct SectionExtractor {
    start_marker: String,
    end_marker: String,
    pattern: Regex,
}

impl SectionExtractor {
    pub fn new(start_marker: &str, end_marker: &str) -> Result<Self, ExtractError> {
        Ok(Self {
            start_marker: start_marker.to_string(),
            end_marker: end_marker.to_string(),
            pattern: section_pattern(start_marker, end_marker)?,
        })
    }

    pub fn extract(&self, text: &str) -> Result<String, ExtractError> {
        let captures = self.pattern.captures(text).ok_or_else(|| {
            tracing::warn!(
                "Section '{}' .. '{}' not found in {} bytes of text",
                self.start_marker,
                self.end_marker,
                text.len()
            );
            ExtractError::SectionNotFound {
                start: self.start_marker.clone(),
                end: self.end_marker.clone(),
            }
        })?;

        // Group 1 always participates when the whole pattern matched.
        let body = captures.get(1).map_or("", |m| m.as_str()).trim();
        tracing::debug!("Extracted section '{}' ({} bytes)", self.start_marker, body.len());
        Ok(body.to_string())
    }
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    const README: &str = "# Project\n\nIntro text.\n\n### Guide\n\n#### Wallet\n- [Create](examples/create.py)\n\n## Contribution\n\nPRs welcome.\n";

    #[test]
    fn test_returns_trimmed_text_between_markers() {
        let section = extract_section(README, "### Guide", "## Contribution").unwrap();
        assert_eq!(section, "#### Wallet\n- [Create](examples/create.py)");
    }

    #[test]
    fn test_missing_end_marker_is_an_error() {
        let text = "### Guide\n#### Wallet\n- [Create](a.py)\n";
        let err = extract_section(text, "### Guide", "## Contribution").unwrap_err();
        assert!(matches!(err, ExtractError::SectionNotFound { .. }));
    }

    #[test]
    fn test_missing_start_marker_is_an_error() {
        let text = "#### Wallet\n## Contribution\n";
        assert!(extract_section(text, "### Guide", "## Contribution").is_err());
    }

    #[test]
    fn test_end_before_start_is_an_error() {
        let text = "## Contribution\n\nstuff\n\n### Guide\n- [A](a.py)\n";
        let err = extract_section(text, "### Guide", "## Contribution").unwrap_err();
        assert!(matches!(err, ExtractError::SectionNotFound { .. }));
    }

    #[test]
    fn test_first_start_and_first_following_end_win() {
        let text = "### Guide\none\n## Contribution\n### Guide\ntwo\n## Contribution\n";
        assert_eq!(extract_section(text, "### Guide", "## Contribution").unwrap(), "one");
    }

    #[test]
    fn test_markers_are_matched_literally() {
        let text = "### Guide (v2)\nbody\n## End.\n";
        assert_eq!(extract_section(text, "### Guide (v2)", "## End.").unwrap(), "body");

        // As a pattern "(v2)" would match "v2" without parentheses.
        let unescaped_lookalike = "### Guide v2\nbody\n## End.\n";
        assert!(extract_section(unescaped_lookalike, "### Guide (v2)", "## End.").is_err());
    }

    #[test]
    fn test_empty_section() {
        let text = "### Guide\n\n   \n## Contribution";
        assert_eq!(extract_section(text, "### Guide", "## Contribution").unwrap(), "");
    }
}
