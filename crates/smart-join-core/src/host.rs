//! Host capability interfaces.
//!
//! The join operation needs two things from the editor that owns the document: read access to
//! its lines ([`LineReader`]) and a way to apply a batch of edits atomically ([`EditSink`]).
//! [`crate::Document`] implements both; editors embed the core by implementing them over their
//! own document model.

use crate::edit::Edit;
use crate::position::{Position, Range};

/// Read-only access to a document's logical lines.
pub trait LineReader {
    /// Total number of logical lines. An empty document has one (empty) line.
    fn line_count(&self) -> usize;

    /// Text of line `line` without its terminator, or `None` if out of range.
    fn line_text(&self, line: usize) -> Option<String>;

    /// Length of line `line` in characters (0 if out of range).
    fn line_len(&self, line: usize) -> usize {
        self.line_text(line).map_or(0, |text| text.chars().count())
    }

    /// Clamp `pos` to the nearest valid position in the document.
    fn clamp_position(&self, pos: Position) -> Position {
        let Some(last_line) = self.line_count().checked_sub(1) else {
            return Position::default();
        };
        let line = pos.line.min(last_line);
        Position::new(line, pos.column.min(self.line_len(line)))
    }

    /// The pieces of each line covered by `range`, terminators excluded.
    ///
    /// The first piece starts at `range.start.column` and the last one ends at
    /// `range.end.column`; columns past the end of a line are clamped to it.
    fn lines_in_range(&self, range: Range) -> Vec<String> {
        let Some(last_line) = self.line_count().checked_sub(1) else {
            return Vec::new();
        };
        if range.start.line > last_line {
            return Vec::new();
        }
        let end_line = range.end.line.min(last_line);

        (range.start.line..=end_line)
            .map(|line| {
                let text = self.line_text(line).unwrap_or_default();
                let from = if line == range.start.line {
                    range.start.column
                } else {
                    0
                };
                let to = if line == range.end.line {
                    range.end.column
                } else {
                    usize::MAX
                };
                slice_chars(&text, from, to).to_string()
            })
            .collect()
    }
}

/// Applies a batch of edits as a single transaction.
pub trait EditSink {
    /// The error type returned by [`EditSink::apply_edits`].
    type Error;

    /// Apply every edit or none of them.
    ///
    /// Edit ranges refer to the document as it was before the batch; implementations must
    /// not let one edit shift another's coordinates.
    fn apply_edits(&mut self, edits: Vec<Edit>) -> Result<(), Self::Error>;
}

/// A plain slice of lines is a read-only document.
impl<S: AsRef<str>> LineReader for [S] {
    fn line_count(&self) -> usize {
        self.len()
    }

    fn line_text(&self, line: usize) -> Option<String> {
        self.get(line).map(|text| text.as_ref().to_string())
    }

    fn line_len(&self, line: usize) -> usize {
        self.get(line).map_or(0, |text| text.as_ref().chars().count())
    }
}

/// Slice `text` by character columns, clamping both ends.
pub(crate) fn slice_chars(text: &str, from: usize, to: usize) -> &str {
    let byte_at = |column: usize| {
        text.char_indices()
            .nth(column)
            .map_or(text.len(), |(offset, _)| offset)
    };
    let start = byte_at(from);
    if to <= from {
        return &text[start..start];
    }
    let end = byte_at(to);
    &text[start..end]
}
