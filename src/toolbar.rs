//! Toolbar actions
//!
//! Text actions map to an [`EditCommand`]; the rest (images, clipboard,
//! clear, download) are handled by the session because they need dialogs
//! or host I/O.

use crate::editable::EditCommand;

/// Identifies a toolbar button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolbarAction {
    // Block prefixes
    Heading1,
    Heading2,
    Heading3,

    // Inline wrappers
    Bold,
    Italic,
    Strikethrough,
    Link,

    // Blocks
    CodeBlock,
    Quote,
    BulletList,
    OrderedList,
    TaskList,
    Table,
    HorizontalRule,
    Formula,
    Diagram,
    TableOfContents,

    // Images
    ImageUrl,
    ImageUpload,

    // Clipboard
    Copy,
    Paste,

    // Document
    Clear,
    Download,
}

/// Toolbar button definition
#[derive(Debug, Clone)]
pub struct ToolbarDef {
    pub action: ToolbarAction,
    pub label: &'static str,
    /// Tooltip
    pub title: &'static str,
}

/// Toolbar buttons in display order
pub static TOOLBAR: &[ToolbarDef] = &[
    ToolbarDef {
        action: ToolbarAction::Heading1,
        label: "H1",
        title: "Heading 1",
    },
    ToolbarDef {
        action: ToolbarAction::Heading2,
        label: "H2",
        title: "Heading 2",
    },
    ToolbarDef {
        action: ToolbarAction::Heading3,
        label: "H3",
        title: "Heading 3",
    },
    ToolbarDef {
        action: ToolbarAction::Bold,
        label: "Bold",
        title: "Bold",
    },
    ToolbarDef {
        action: ToolbarAction::Italic,
        label: "Italic",
        title: "Italic",
    },
    ToolbarDef {
        action: ToolbarAction::Strikethrough,
        label: "Strike",
        title: "Strikethrough",
    },
    ToolbarDef {
        action: ToolbarAction::Link,
        label: "Link",
        title: "Insert link",
    },
    ToolbarDef {
        action: ToolbarAction::CodeBlock,
        label: "Code",
        title: "Code block",
    },
    ToolbarDef {
        action: ToolbarAction::Quote,
        label: "Quote",
        title: "Quote",
    },
    ToolbarDef {
        action: ToolbarAction::BulletList,
        label: "List",
        title: "Bulleted list",
    },
    ToolbarDef {
        action: ToolbarAction::OrderedList,
        label: "Ordered",
        title: "Numbered list",
    },
    ToolbarDef {
        action: ToolbarAction::TaskList,
        label: "Task",
        title: "Task list",
    },
    ToolbarDef {
        action: ToolbarAction::Table,
        label: "Table",
        title: "Insert table",
    },
    ToolbarDef {
        action: ToolbarAction::HorizontalRule,
        label: "Rule",
        title: "Horizontal rule",
    },
    ToolbarDef {
        action: ToolbarAction::Formula,
        label: "Formula",
        title: "Math formula",
    },
    ToolbarDef {
        action: ToolbarAction::Diagram,
        label: "Mermaid",
        title: "Mermaid diagram",
    },
    ToolbarDef {
        action: ToolbarAction::TableOfContents,
        label: "TOC",
        title: "Insert table of contents",
    },
    ToolbarDef {
        action: ToolbarAction::ImageUrl,
        label: "Image",
        title: "Insert image URL",
    },
    ToolbarDef {
        action: ToolbarAction::ImageUpload,
        label: "Upload",
        title: "Upload image",
    },
    ToolbarDef {
        action: ToolbarAction::Copy,
        label: "Copy",
        title: "Copy all content",
    },
    ToolbarDef {
        action: ToolbarAction::Paste,
        label: "Paste",
        title: "Paste content",
    },
    ToolbarDef {
        action: ToolbarAction::Clear,
        label: "Clear",
        title: "Clear editor",
    },
    ToolbarDef {
        action: ToolbarAction::Download,
        label: "Download",
        title: "Download Markdown",
    },
];

impl ToolbarAction {
    /// The text edit this action performs, if it is a pure text action
    pub fn edit_command(self) -> Option<EditCommand> {
        let cmd = match self {
            ToolbarAction::Heading1 => EditCommand::insert("# "),
            ToolbarAction::Heading2 => EditCommand::insert("## "),
            ToolbarAction::Heading3 => EditCommand::insert("### "),
            ToolbarAction::Bold => EditCommand::wrap("**", "**", "bold text"),
            ToolbarAction::Italic => EditCommand::wrap("*", "*", "italic text"),
            ToolbarAction::Strikethrough => EditCommand::wrap("~~", "~~", "strikethrough text"),
            ToolbarAction::Link => EditCommand::wrap("[", "](https://example.com)", "link text"),
            ToolbarAction::CodeBlock => EditCommand::insert("```javascript\n// code\n```\n"),
            ToolbarAction::Quote => EditCommand::insert("> "),
            ToolbarAction::BulletList => EditCommand::insert("- "),
            ToolbarAction::OrderedList => EditCommand::insert("1. "),
            ToolbarAction::TaskList => EditCommand::insert("- [ ] "),
            ToolbarAction::Table => EditCommand::insert(
                "| Column 1 | Column 2 |\n|----------|----------|\n| Cell | Cell |\n",
            ),
            ToolbarAction::HorizontalRule => EditCommand::insert("\n---\n"),
            ToolbarAction::Formula => EditCommand::insert("$$\n\\frac{1}{2}\n$$\n"),
            ToolbarAction::Diagram => {
                EditCommand::insert("```mermaid\ngraph TD\n  A[Start] --> B[End]\n```\n")
            }
            ToolbarAction::TableOfContents => {
                EditCommand::insert(format!("{}\n\n", crate::outline::OUTLINE_MARKER))
            }
            ToolbarAction::ImageUrl
            | ToolbarAction::ImageUpload
            | ToolbarAction::Copy
            | ToolbarAction::Paste
            | ToolbarAction::Clear
            | ToolbarAction::Download => return None,
        };
        Some(cmd)
    }

    /// Registry entry for this action
    pub fn def(self) -> Option<&'static ToolbarDef> {
        TOOLBAR.iter().find(|def| def.action == self)
    }
}

/// Markdown for an inline image
pub fn image_markdown(alt: &str, url: &str) -> String {
    format!("![{}]({})\n", alt, url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editable::EditKind;

    #[test]
    fn test_every_action_is_registered_once() {
        use std::collections::HashSet;
        let actions: HashSet<_> = TOOLBAR.iter().map(|def| def.action).collect();
        assert_eq!(actions.len(), TOOLBAR.len());
        assert!(ToolbarAction::Download.def().is_some());
    }

    #[test]
    fn test_wrapping_actions() {
        for action in [
            ToolbarAction::Bold,
            ToolbarAction::Italic,
            ToolbarAction::Strikethrough,
            ToolbarAction::Link,
        ] {
            let cmd = action.edit_command().unwrap();
            assert_eq!(cmd.kind, EditKind::Wrap, "{:?}", action);
            assert!(!cmd.placeholder.is_empty());
        }
    }

    #[test]
    fn test_host_actions_have_no_edit() {
        assert!(ToolbarAction::Clear.edit_command().is_none());
        assert!(ToolbarAction::Paste.edit_command().is_none());
    }

    #[test]
    fn test_toc_inserts_marker() {
        let cmd = ToolbarAction::TableOfContents.edit_command().unwrap();
        assert_eq!(cmd.prefix, "[TOC]\n\n");
    }

    #[test]
    fn test_image_markdown() {
        assert_eq!(image_markdown("cat", "https://x/cat.png"), "![cat](https://x/cat.png)\n");
    }
}
