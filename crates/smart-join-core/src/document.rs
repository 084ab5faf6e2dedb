//! In-memory reference host.
//!
//! [`Document`] keeps LF-normalized text in a Rope, which gives O(log N) line access and
//! editing. It implements [`LineReader`] and [`EditSink`], so it can drive the join
//! operation directly; the CLI and the integration tests use it as their editor.

use ropey::Rope;

use crate::edit::Edit;
use crate::error::DocumentError;
use crate::host::{EditSink, LineReader};
use crate::line_ending::{LineEnding, has_mixed_line_endings, normalize_to_lf};
use crate::position::{Position, Range};

/// A text document backed by a Rope.
#[derive(Debug, Clone, Default)]
pub struct Document {
    rope: Rope,
    line_ending: LineEnding,
    mixed_line_endings: bool,
}

impl Document {
    /// Build a document from text, detecting its line ending.
    pub fn new(text: &str) -> Self {
        Self {
            rope: Rope::from_str(&normalize_to_lf(text)),
            line_ending: LineEnding::detect_in_text(text),
            mixed_line_endings: has_mixed_line_endings(text),
        }
    }

    /// Returns `true` if the loaded text mixed LF and CRLF or contained a lone CR.
    ///
    /// [`Document::text_for_saving`] writes one terminator everywhere, so saving such a
    /// document changes lines that were never edited.
    pub fn has_mixed_line_endings(&self) -> bool {
        self.mixed_line_endings
    }

    /// The line ending detected on load.
    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Override the line ending used for saving.
    pub fn set_line_ending(&mut self, line_ending: LineEnding) {
        self.line_ending = line_ending;
    }

    /// Get complete text (LF newlines).
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Get complete text using the document's line ending on every line.
    pub fn text_for_saving(&self) -> String {
        self.line_ending.apply_to_text(&self.text())
    }

    /// Character offset of `pos`, which must lie inside the document.
    pub fn position_to_char_offset(&self, pos: Position) -> Result<usize, DocumentError> {
        if pos.line >= self.rope.len_lines() || pos.column > self.line_len(pos.line) {
            return Err(DocumentError::InvalidPosition(pos));
        }
        Ok(self.rope.line_to_char(pos.line) + pos.column)
    }

    /// Resolve every edit to a char span and check the batch against the current text.
    ///
    /// Returns the spans sorted by start offset.
    fn resolve_spans(&self, edits: Vec<Edit>) -> Result<Vec<(usize, usize, Edit)>, DocumentError> {
        let mut spans = Vec::with_capacity(edits.len());
        for edit in edits {
            let Range { start, end } = edit.range;
            if start > end {
                return Err(DocumentError::InvalidRange { start, end });
            }
            let start_char = self.position_to_char_offset(start)?;
            let end_char = self.position_to_char_offset(end)?;
            spans.push((start_char, end_char, edit));
        }

        spans.sort_by_key(|(start, end, _)| (*start, *end));
        for pair in spans.windows(2) {
            let (first, second) = (&pair[0], &pair[1]);
            // Equal starts are ambiguous even for two empty ranges.
            if second.0 < first.1 || second.0 == first.0 {
                return Err(DocumentError::OverlappingEdits {
                    first: first.2.range,
                    second: second.2.range,
                });
            }
        }
        Ok(spans)
    }
}

impl LineReader for Document {
    fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    fn line_text(&self, line: usize) -> Option<String> {
        if line >= self.rope.len_lines() {
            return None;
        }

        let mut text = self.rope.line(line).to_string();

        // Remove trailing newline
        if text.ends_with('\n') {
            text.pop();
        }

        Some(text)
    }

    fn line_len(&self, line: usize) -> usize {
        if line >= self.rope.len_lines() {
            return 0;
        }
        let slice = self.rope.line(line);
        let len = slice.len_chars();
        if len > 0 && slice.char(len - 1) == '\n' {
            len - 1
        } else {
            len
        }
    }
}

impl EditSink for Document {
    type Error = DocumentError;

    fn apply_edits(&mut self, edits: Vec<Edit>) -> Result<(), DocumentError> {
        let spans = self.resolve_spans(edits)?;

        // Descending start offsets keep earlier offsets stable while mutating.
        for (start, end, edit) in spans.into_iter().rev() {
            if start < end {
                self.rope.remove(start..end);
            }
            let text = normalize_to_lf(&edit.replacement);
            if !text.is_empty() {
                self.rope.insert(start, &text);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: (usize, usize), end: (usize, usize)) -> Range {
        Range::new(Position::new(start.0, start.1), Position::new(end.0, end.1))
    }

    #[test]
    fn test_empty_document_has_one_line() {
        let doc = Document::new("");
        assert_eq!(doc.line_count(), 1);
        assert_eq!(doc.line_text(0).as_deref(), Some(""));
        assert_eq!(doc.line_len(0), 0);
        assert_eq!(doc.line_text(1), None);
    }

    #[test]
    fn test_lines_exclude_terminators() {
        let doc = Document::new("ABC\r\n你好\r\n");
        assert_eq!(doc.line_ending(), LineEnding::Crlf);
        assert_eq!(doc.line_count(), 3);
        assert_eq!(doc.line_text(0).as_deref(), Some("ABC"));
        assert_eq!(doc.line_text(1).as_deref(), Some("你好"));
        assert_eq!(doc.line_len(1), 2);
        assert_eq!(doc.line_len(2), 0);
        assert_eq!(doc.text_for_saving(), "ABC\r\n你好\r\n");
    }

    #[test]
    fn test_mixed_line_endings_are_flagged() {
        let input = "a\nb\r\nc\rd\n";
        let doc = Document::new(input);
        assert!(doc.has_mixed_line_endings());
        assert_eq!(doc.line_count(), 5);
        // Saving rewrites every terminator, so the input does not survive unchanged.
        assert_ne!(doc.text_for_saving(), input);
        assert_eq!(doc.text_for_saving(), "a\r\nb\r\nc\r\nd\r\n");

        for uniform in ["a\nb\n", "a\r\nb\r\n", "single"] {
            let doc = Document::new(uniform);
            assert!(!doc.has_mixed_line_endings());
            assert_eq!(doc.text_for_saving(), uniform);
        }
    }

    #[test]
    fn test_position_to_char_offset() {
        let doc = Document::new("ABC\nDEF\nGHI");
        assert_eq!(doc.position_to_char_offset(Position::new(0, 0)), Ok(0));
        assert_eq!(doc.position_to_char_offset(Position::new(1, 0)), Ok(4));
        assert_eq!(doc.position_to_char_offset(Position::new(2, 3)), Ok(11));
        assert_eq!(
            doc.position_to_char_offset(Position::new(1, 4)),
            Err(DocumentError::InvalidPosition(Position::new(1, 4)))
        );
        assert!(doc.position_to_char_offset(Position::new(3, 0)).is_err());
    }

    #[test]
    fn test_apply_edits_uses_pre_edit_coordinates() {
        let mut doc = Document::new("a\nb\nc\nd");
        doc.apply_edits(vec![
            Edit::new(range((0, 0), (1, 1)), "a b"),
            Edit::new(range((2, 0), (3, 1)), "c d"),
        ])
        .unwrap();
        assert_eq!(doc.text(), "a b\nc d");
    }

    #[test]
    fn test_apply_edits_is_all_or_nothing() {
        let mut doc = Document::new("one\ntwo");
        let err = doc
            .apply_edits(vec![
                Edit::new(range((0, 0), (0, 3)), "ONE"),
                Edit::new(range((1, 0), (1, 9)), "TWO"),
            ])
            .unwrap_err();
        assert_eq!(err, DocumentError::InvalidPosition(Position::new(1, 9)));
        assert_eq!(doc.text(), "one\ntwo");
    }

    #[test]
    fn test_apply_edits_rejects_overlap() {
        let mut doc = Document::new("one\ntwo\nthree");
        let err = doc
            .apply_edits(vec![
                Edit::new(range((1, 0), (2, 2)), "x"),
                Edit::new(range((0, 1), (1, 1)), "y"),
            ])
            .unwrap_err();
        assert_eq!(
            err,
            DocumentError::OverlappingEdits {
                first: range((0, 1), (1, 1)),
                second: range((1, 0), (2, 2)),
            }
        );
        assert_eq!(doc.text(), "one\ntwo\nthree");
    }

    #[test]
    fn test_replacement_newlines_are_normalized() {
        let mut doc = Document::new("ab");
        doc.apply_edits(vec![Edit::new(range((0, 1), (0, 1)), "\r\n")])
            .unwrap();
        assert_eq!(doc.text(), "a\nb");
        assert_eq!(doc.line_count(), 2);
    }
}
