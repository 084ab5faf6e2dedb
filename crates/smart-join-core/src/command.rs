//! The "join selected/current lines" operation.
//!
//! # Example
//!
//! ```rust
//! use smart_join_core::{Document, Position, Selection, join_selected_lines};
//!
//! let mut doc = Document::new("The exam-\nple is\n  here.\nNext");
//! let carets = vec![Selection::caret(Position::new(0, 0))];
//!
//! let line_ending = doc.line_ending();
//! let applied = join_selected_lines(&mut doc, &carets, line_ending).unwrap();
//!
//! assert_eq!(applied, 1);
//! assert_eq!(doc.text(), "The example is\n  here.\nNext");
//! ```

use crate::edit::Edit;
use crate::host::{EditSink, LineReader};
use crate::joiner::join_lines;
use crate::line_ending::LineEnding;
use crate::position::Selection;
use crate::selection_set::resolve_ranges;

/// Compute the edits that join the lines covered by `selections`.
///
/// Returned edits are sorted by position and pairwise disjoint. Ranges whose joined text is
/// identical to the original produce no edit.
pub fn compute_join_edits<R: LineReader + ?Sized>(
    reader: &R,
    selections: &[Selection],
    line_ending: LineEnding,
) -> Vec<Edit> {
    let ranges = resolve_ranges(selections, reader);
    log::debug!(
        "join lines: {} selection(s) resolved to {} range(s)",
        selections.len(),
        ranges.len()
    );

    let mut edits = Vec::with_capacity(ranges.len());
    for range in ranges {
        let lines = reader.lines_in_range(range);
        if lines.is_empty() {
            continue;
        }

        let original = lines.join(line_ending.as_str());
        let joined = join_lines(&lines);
        if joined == original {
            log::trace!("{range:?} already joined");
            continue;
        }

        log::trace!("{range:?}: {} line(s) -> {joined:?}", lines.len());
        edits.push(Edit::new(range, joined));
    }
    edits
}

/// Join the lines covered by `selections` and apply the result to `doc` in one batch.
///
/// Returns the number of edits applied. When nothing changes the sink is not called.
pub fn join_selected_lines<D>(
    doc: &mut D,
    selections: &[Selection],
    line_ending: LineEnding,
) -> Result<usize, D::Error>
where
    D: LineReader + EditSink + ?Sized,
{
    let edits = compute_join_edits(&*doc, selections, line_ending);
    let count = edits.len();
    if count == 0 {
        log::debug!("join lines: nothing to change");
        return Ok(0);
    }

    doc.apply_edits(edits)?;
    log::debug!("join lines: applied {count} edit(s)");
    Ok(count)
}
