//! Cursor-aware text mutation for editing commands
//!
//! Computes the replacement buffer and the selection to restore for an
//! insert or wrap command. Offsets are char offsets; the buffer is spliced
//! through a rope so multi-byte text never splits a code point.

use ropey::Rope;

use super::SelectionRange;

/// How a command applies to the selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditKind {
    /// Replace the selection with the payload
    Insert,
    /// Enclose the selection (or the placeholder) between prefix and suffix
    Wrap,
}

/// A text command to apply at the current selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    pub kind: EditKind,
    /// Inserted text for `Insert`, opening marker for `Wrap`
    pub prefix: String,
    /// Closing marker (empty for `Insert`)
    pub suffix: String,
    /// Text wrapped when nothing is selected (empty for `Insert`)
    pub placeholder: String,
}

impl EditCommand {
    pub fn insert(text: impl Into<String>) -> Self {
        Self {
            kind: EditKind::Insert,
            prefix: text.into(),
            suffix: String::new(),
            placeholder: String::new(),
        }
    }

    pub fn wrap(
        prefix: impl Into<String>,
        suffix: impl Into<String>,
        placeholder: impl Into<String>,
    ) -> Self {
        Self {
            kind: EditKind::Wrap,
            prefix: prefix.into(),
            suffix: suffix.into(),
            placeholder: placeholder.into(),
        }
    }

    /// The full text inserted when nothing is selected
    pub fn unselected_text(&self) -> String {
        format!("{}{}{}", self.prefix, self.placeholder, self.suffix)
    }
}

/// Outcome of applying a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mutation {
    pub text: String,
    /// Selection to restore, `None` when there was no cursor target
    pub selection: Option<SelectionRange>,
}

/// Apply `command` to `buffer` at `selection`.
///
/// Without a selection (no addressable cursor) the text is appended to the
/// end of the buffer and no selection is returned. Out-of-range bounds are
/// clamped to the buffer.
pub fn apply(buffer: &str, selection: Option<SelectionRange>, command: &EditCommand) -> Mutation {
    let Some(selection) = selection else {
        tracing::debug!("no cursor target, appending to end of buffer");
        let mut text = String::with_capacity(buffer.len() + command.prefix.len());
        text.push_str(buffer);
        text.push_str(&command.unselected_text());
        return Mutation {
            text,
            selection: None,
        };
    };

    let mut rope = Rope::from_str(buffer);
    let range = selection.clamp(rope.len_chars());
    if range != selection {
        tracing::debug!(?selection, clamped = ?range, "clamped stale selection");
    }

    let selected = rope.slice(range.start..range.end).to_string();
    let had_selection = !range.is_caret();

    let (inserted, new_selection) = match command.kind {
        EditKind::Insert => {
            let inserted = command.prefix.clone();
            let caret = range.start + char_len(&inserted);
            (inserted, SelectionRange::caret(caret))
        }
        EditKind::Wrap => {
            let middle = if had_selection {
                selected.as_str()
            } else {
                command.placeholder.as_str()
            };
            let inserted = format!("{}{}{}", command.prefix, middle, command.suffix);
            let new_selection = if had_selection {
                let inner_start = range.start + char_len(&command.prefix);
                SelectionRange::new(inner_start, inner_start + char_len(middle))
            } else {
                SelectionRange::caret(range.start + char_len(&inserted))
            };
            (inserted, new_selection)
        }
    };

    if had_selection {
        rope.remove(range.start..range.end);
    }
    rope.insert(range.start, &inserted);

    Mutation {
        text: rope.to_string(),
        selection: Some(new_selection),
    }
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}
