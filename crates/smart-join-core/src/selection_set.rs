//! Selection resolution.
//!
//! Turns the host's selections into the disjoint, position-sorted ranges the join operation
//! rewrites. Single-line selections (carets included) are widened to the whole active line
//! plus the next one, so invoking the command with a bare caret joins the current line with
//! the following line.

use crate::host::LineReader;
use crate::position::{Position, Range, Selection};

/// Widen a single-line selection to its active line and the next line.
///
/// At the last line of the document the range covers that line only. Multi-line selections
/// keep their extent, clamped to the document.
pub fn expand_selection<R: LineReader + ?Sized>(selection: &Selection, reader: &R) -> Range {
    if !selection.is_single_line() {
        let range = selection.range();
        return Range::new(
            reader.clamp_position(range.start),
            reader.clamp_position(range.end),
        );
    }

    let last_line = reader.line_count().saturating_sub(1);
    let line = selection.active().line.min(last_line);
    let next_line = (line + 1).min(last_line);
    Range::new(
        Position::new(line, 0),
        Position::new(next_line, reader.line_len(next_line)),
    )
}

/// Drop ranges that intersect the previously kept range.
///
/// Ranges are stably sorted by start position first, so ties keep their input order. The
/// result is sorted and pairwise non-intersecting.
pub fn dedup_ranges(mut ranges: Vec<Range>) -> Vec<Range> {
    ranges.sort_by_key(|range| range.start);

    let mut kept: Vec<Range> = Vec::with_capacity(ranges.len());
    for range in ranges {
        if let Some(last) = kept.last()
            && last.intersects(&range)
        {
            log::trace!("dropping {range:?}: intersects {last:?}");
            continue;
        }
        kept.push(range);
    }
    kept
}

/// Expand every selection and merge the results into disjoint ranges.
pub fn resolve_ranges<R: LineReader + ?Sized>(selections: &[Selection], reader: &R) -> Vec<Range> {
    if reader.line_count() == 0 {
        return Vec::new();
    }

    let expanded = selections
        .iter()
        .map(|selection| expand_selection(selection, reader))
        .collect();
    dedup_ranges(expanded)
}
