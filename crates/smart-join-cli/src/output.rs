use serde::Serialize;
use smart_join_core::{Edit, Position};

/// JSON shape of one edit, 0-based.
#[derive(Debug, Serialize)]
pub struct EditView {
    pub start: PositionView,
    pub end: PositionView,
    pub replacement: String,
}

#[derive(Debug, Serialize)]
pub struct PositionView {
    pub line: usize,
    pub column: usize,
}

impl From<Position> for PositionView {
    fn from(pos: Position) -> Self {
        Self {
            line: pos.line,
            column: pos.column,
        }
    }
}

impl From<&Edit> for EditView {
    fn from(edit: &Edit) -> Self {
        Self {
            start: edit.range.start.into(),
            end: edit.range.end.into(),
            replacement: edit.replacement.clone(),
        }
    }
}

pub fn edits_to_json(edits: &[Edit]) -> serde_json::Result<String> {
    let views: Vec<EditView> = edits.iter().map(EditView::from).collect();
    serde_json::to_string_pretty(&views)
}

#[cfg(test)]
mod tests {
    use super::*;
    use smart_join_core::Range;

    #[test]
    fn serializes_edits() {
        let edit = Edit::new(
            Range::new(Position::new(0, 0), Position::new(1, 3)),
            "a b",
        );
        let json = edits_to_json(&[edit]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            serde_json::json!([{
                "start": { "line": 0, "column": 0 },
                "end": { "line": 1, "column": 3 },
                "replacement": "a b",
            }])
        );
    }

    #[test]
    fn empty_batch_is_an_empty_array() {
        assert_eq!(edits_to_json(&[]).unwrap(), "[]");
    }
}
