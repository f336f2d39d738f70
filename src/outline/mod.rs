//! Document outline extraction
//!
//! Derives the heading hierarchy of a Markdown document. Headings carry slug
//! ids that the renderer attaches to the same headings, so outline links and
//! rendered anchors match.

mod extract;
mod slug;

use serde::Serialize;

pub use extract::{extract, parse_heading_line, Extraction};
pub use slug::slug;

/// Literal token that asks for the outline block in the preview
pub const OUTLINE_MARKER: &str = "[TOC]";

/// A single heading in document order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadingEntry {
    /// Heading level, 1-6
    pub level: u8,
    pub text: String,
    /// Anchor id (see [`slug`])
    pub id: String,
}

/// Flat outline of a document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Outline {
    pub headings: Vec<HeadingEntry>,
    /// Whether the outline marker is present (gates display)
    pub has_marker: bool,
}

impl Outline {
    /// Whether the outline should be shown in the preview
    pub fn is_visible(&self) -> bool {
        self.has_marker && !self.headings.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.headings.is_empty()
    }

    /// Nest headings by level: each heading becomes a child of the nearest
    /// preceding heading with a smaller level.
    pub fn nested(&self) -> Vec<OutlineNode> {
        let mut roots: Vec<OutlineNode> = Vec::new();
        let mut stack: Vec<OutlineNode> = Vec::new();

        for heading in &self.headings {
            // Pop everything at same level or deeper
            while stack
                .last()
                .is_some_and(|top| top.heading.level >= heading.level)
            {
                if let Some(finished) = stack.pop() {
                    attach(&mut stack, &mut roots, finished);
                }
            }

            stack.push(OutlineNode {
                heading: heading.clone(),
                children: Vec::new(),
            });
        }

        while let Some(finished) = stack.pop() {
            attach(&mut stack, &mut roots, finished);
        }

        roots
    }
}

fn attach(stack: &mut [OutlineNode], roots: &mut Vec<OutlineNode>, node: OutlineNode) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => roots.push(node),
    }
}

/// A heading with its nested sub-headings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineNode {
    pub heading: HeadingEntry,
    pub children: Vec<OutlineNode>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_tree_basic() {
        let (outline, _) = extract("# Title\n## Section 1\n### Sub 1.1\n## Section 2\n").into_parts();
        let tree = outline.nested();

        assert_eq!(tree.len(), 1, "Should have one root (H1)");
        assert_eq!(tree[0].heading.text, "Title");
        assert_eq!(tree[0].children.len(), 2, "H1 should have 2 H2 children");
        assert_eq!(tree[0].children[0].heading.text, "Section 1");
        assert_eq!(
            tree[0].children[0].children.len(),
            1,
            "First H2 should have 1 H3 child"
        );
        assert_eq!(tree[0].children[1].heading.text, "Section 2");
    }

    #[test]
    fn test_heading_tree_starting_deeper() {
        let (outline, _) = extract("### Deep\n# Top\n").into_parts();
        let tree = outline.nested();
        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].heading.text, "Deep");
        assert_eq!(tree[1].heading.text, "Top");
    }

    #[test]
    fn test_outline_visibility_requires_marker() {
        let (outline, _) = extract("# A\n").into_parts();
        assert!(!outline.is_visible());

        let (outline, stripped) = extract("[TOC]\n# A\n").into_parts();
        assert!(outline.is_visible());
        assert_eq!(stripped, "\n# A\n");

        let (outline, _) = extract("[TOC]\nno headings").into_parts();
        assert!(!outline.is_visible());
    }
}
