//! Edit records handed back to the host.

use crate::position::Range;

/// Replace the text at `range` with `replacement`.
///
/// `range` is expressed against the document as it was before any edit of the same batch
/// was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    /// The replaced range.
    pub range: Range,
    /// Replacement text.
    pub replacement: String,
}

impl Edit {
    /// Create a new edit.
    pub fn new(range: Range, replacement: impl Into<String>) -> Self {
        Self {
            range,
            replacement: replacement.into(),
        }
    }
}
