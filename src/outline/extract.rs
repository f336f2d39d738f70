//! Heading extraction from raw Markdown source
//!
//! Line-based scan, recomputed from scratch on every buffer change.

use super::{slug, HeadingEntry, Outline, OUTLINE_MARKER};

/// Result of one extraction pass over the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Headings in document order
    pub headings: Vec<HeadingEntry>,
    /// Whether the document contains the outline marker
    pub has_marker: bool,
    /// Document text with every outline marker removed
    pub stripped: String,
}

impl Extraction {
    /// Split into the outline and the text handed to the renderer
    pub fn into_parts(self) -> (Outline, String) {
        (
            Outline {
                headings: self.headings,
                has_marker: self.has_marker,
            },
            self.stripped,
        )
    }
}

/// Extract headings and the outline marker from `text`
pub fn extract(text: &str) -> Extraction {
    let headings = text
        .split('\n')
        .filter_map(parse_heading_line)
        .map(|(level, heading)| HeadingEntry {
            level,
            // The renderer sees the line with markers removed
            id: slug(heading.replace(OUTLINE_MARKER, "").trim()),
            text: heading.to_string(),
        })
        .collect();

    let has_marker = text.contains(OUTLINE_MARKER);
    let stripped = if has_marker {
        text.replace(OUTLINE_MARKER, "")
    } else {
        text.to_string()
    };

    Extraction {
        headings,
        has_marker,
        stripped,
    }
}

/// Parse a single ATX heading line into `(level, trimmed text)`.
///
/// Matches 1-6 `#`, at least one whitespace character, then text that is
/// non-empty once trimmed. A trailing `\r` is ignored.
pub fn parse_heading_line(line: &str) -> Option<(u8, &str)> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let hashes = line.bytes().take_while(|b| *b == b'#').count();
    if !(1..=6).contains(&hashes) {
        return None;
    }

    let rest = &line[hashes..];
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }

    let text = rest.trim();
    if text.is_empty() {
        return None;
    }

    Some((hashes as u8, text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_scenario_document() {
        let result = extract("# Title\n\ntext\n## Sub\n");
        assert_eq!(
            result.headings,
            vec![
                HeadingEntry {
                    level: 1,
                    text: "Title".to_string(),
                    id: "title".to_string(),
                },
                HeadingEntry {
                    level: 2,
                    text: "Sub".to_string(),
                    id: "sub".to_string(),
                },
            ]
        );
        assert!(!result.has_marker);
        assert_eq!(result.stripped, "# Title\n\ntext\n## Sub\n");
    }

    #[test]
    fn test_parse_heading_levels() {
        assert_eq!(parse_heading_line("# a"), Some((1, "a")));
        assert_eq!(parse_heading_line("###### six"), Some((6, "six")));
        assert_eq!(parse_heading_line("####### seven"), None);
    }

    #[test]
    fn test_parse_heading_requires_whitespace_and_text() {
        assert_eq!(parse_heading_line("#no-space"), None);
        assert_eq!(parse_heading_line("#"), None);
        assert_eq!(parse_heading_line("##   "), None);
        assert_eq!(parse_heading_line(" # indented"), None);
    }

    #[test]
    fn test_parse_heading_trims_text() {
        assert_eq!(parse_heading_line("##\t  Spaced out  "), Some((2, "Spaced out")));
        assert_eq!(parse_heading_line("# Windows\r"), Some((1, "Windows")));
    }

    #[test]
    fn test_parse_heading_keeps_closing_hashes() {
        assert_eq!(parse_heading_line("## Closed ##"), Some((2, "Closed ##")));
    }

    #[test]
    fn test_extract_marker_removes_all_occurrences() {
        let result = extract("[TOC]\n# A\n\n[TOC] again");
        assert!(result.has_marker);
        assert_eq!(result.stripped, "\n# A\n\n again");
        assert_eq!(result.headings.len(), 1);
    }

    #[test]
    fn test_extract_duplicate_headings_share_ids() {
        let result = extract("# Notes\n## Notes\n");
        assert_eq!(result.headings[0].id, "notes");
        assert_eq!(result.headings[1].id, "notes");
    }

    #[test]
    fn test_extract_count_matches_heading_lines() {
        let doc = "# one\nplain\n#two\n### three\n####### no\n  # no\n## four";
        let result = extract(doc);
        assert_eq!(result.headings.len(), 3);
        assert_eq!(
            result
                .headings
                .iter()
                .map(|h| h.text.as_str())
                .collect::<Vec<_>>(),
            vec!["one", "three", "four"]
        );
    }

    #[test]
    fn test_extract_marker_inside_heading_is_left_out_of_id() {
        let result = extract("[TOC]\n# Intro [TOC]\n## [TOC]Setup\n");
        assert_eq!(result.headings[0].text, "Intro [TOC]");
        assert_eq!(result.headings[0].id, "intro");
        assert_eq!(result.headings[1].id, "setup");
    }

    #[test]
    fn test_extract_empty_document() {
        let result = extract("");
        assert!(result.headings.is_empty());
        assert!(!result.has_marker);
        assert_eq!(result.stripped, "");
    }
}
