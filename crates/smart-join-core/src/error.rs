//! Error types for the reference host.

use thiserror::Error;

use crate::position::{Position, Range};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Errors produced when applying an edit batch to a [`crate::Document`].
pub enum DocumentError {
    #[error("invalid position {}:{}", .0.line, .0.column)]
    /// A position lies outside the document.
    InvalidPosition(Position),

    #[error("invalid range {start:?}..{end:?}")]
    /// A range's start lies after its end.
    InvalidRange {
        /// Range start.
        start: Position,
        /// Range end.
        end: Position,
    },

    #[error("overlapping edits {first:?} and {second:?}")]
    /// Two edits of the same batch touch the same text.
    OverlappingEdits {
        /// The earlier edit's range.
        first: Range,
        /// The later edit's range.
        second: Range,
    },
}
