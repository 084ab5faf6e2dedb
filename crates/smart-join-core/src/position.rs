//! Document coordinates: positions, ranges and host selections.
//!
//! All coordinates are zero-based. Columns count characters (Unicode scalar values) within a
//! logical line, excluding the line terminator.

use std::cmp::Ordering;

/// Position coordinates (line and column numbers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Zero-based logical line index.
    pub line: usize,
    /// Zero-based column in characters within the logical line.
    pub column: usize,
}

impl Position {
    /// Create a new logical position.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.line
            .cmp(&other.line)
            .then_with(|| self.column.cmp(&other.column))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// An ordered text range `[start, end)`.
///
/// `start <= end` always holds; [`Range::new`] swaps its arguments if needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Range {
    /// Inclusive start position.
    pub start: Position,
    /// Exclusive end position.
    pub end: Position,
}

impl Range {
    /// Create a range between two positions, in either order.
    pub fn new(a: Position, b: Position) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// Returns `true` if the two ranges overlap or touch.
    ///
    /// Touching ranges (`a.end == b.start`) count as intersecting: two edits meeting at the
    /// same position would otherwise splice into each other's output.
    pub fn intersects(&self, other: &Range) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

/// A host selection.
///
/// `start` is the anchor and `end` the active (caret) end, so `end` may precede `start`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selection {
    /// Selection start position (anchor)
    pub start: Position,
    /// Selection end position (active end)
    pub end: Position,
}

impl Selection {
    /// Create a selection from an anchor and an active position.
    pub fn new(anchor: Position, active: Position) -> Self {
        Self {
            start: anchor,
            end: active,
        }
    }

    /// Create an empty selection (a caret).
    pub fn caret(pos: Position) -> Self {
        Self::new(pos, pos)
    }

    /// The active end of the selection, where the caret is drawn.
    pub fn active(&self) -> Position {
        self.end
    }

    /// Returns `true` if anchor and active end lie on the same line.
    pub fn is_single_line(&self) -> bool {
        self.start.line == self.end.line
    }

    /// The ordered range covered by the selection.
    pub fn range(&self) -> Range {
        Range::new(self.start, self.end)
    }
}
