//! Selection ranges over the document buffer.

/// A selection between two char offsets, `start <= end`.
/// A collapsed range (`start == end`) is a caret.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SelectionRange {
    pub start: usize,
    pub end: usize,
}

impl SelectionRange {
    /// Create a range, normalizing reversed bounds
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// Create a collapsed range (caret)
    pub fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Check if this is a caret with nothing selected
    pub fn is_caret(&self) -> bool {
        self.start == self.end
    }

    /// Number of selected chars
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.is_caret()
    }

    /// Clamp both bounds into `[0, len_chars]`
    pub fn clamp(&self, len_chars: usize) -> Self {
        Self::new(self.start.min(len_chars), self.end.min(len_chars))
    }
}
