//! Rows and cells produced by the tokenizer

use serde::Serialize;

/// Token marking a deliberately empty cell
pub const ESCAPE_CELL: &str = "\\";

/// A single trimmed cell value and where it starts within its row.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Cell {
    /// Byte offset of the first character of `value`, relative to the row start
    pub offset: usize,
    pub value: String,
}

impl Cell {
    pub fn new(offset: usize, value: impl Into<String>) -> Self {
        Cell {
            offset,
            value: value.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value.trim().is_empty()
    }

    pub fn is_comment(&self) -> bool {
        self.value.trim_start().starts_with('#')
    }

    /// Empty and `\` cells carry no content and are skipped by populators.
    pub fn is_skippable(&self) -> bool {
        self.value.is_empty() || self.value == ESCAPE_CELL
    }
}

/// One physical line of the source buffer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Row {
    /// Absolute byte offset of the row in the buffer
    pub offset: usize,
    /// Byte length, including the line feed when present
    pub length: usize,
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new(offset: usize, length: usize, cells: Vec<Cell>) -> Self {
        Row {
            offset,
            length,
            cells,
        }
    }

    /// A row without any non-empty cell produces no model content.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(Cell::is_empty)
    }

    /// True when the first cell with content is a comment.
    pub fn is_comment_row(&self) -> bool {
        for cell in &self.cells {
            if cell.is_comment() {
                return true;
            }
            if !cell.is_empty() {
                return false;
            }
        }
        false
    }

    pub fn first_cell(&self) -> Option<&Cell> {
        self.cells.first()
    }

    /// Cell values, mostly useful in tests and debug output.
    pub fn values(&self) -> Vec<&str> {
        self.cells.iter().map(|cell| cell.value.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(values: &[&str]) -> Row {
        let cells = values
            .iter()
            .enumerate()
            .map(|(i, v)| Cell::new(i * 4, *v))
            .collect();
        Row::new(0, 0, cells)
    }

    #[test]
    fn test_blank_rows() {
        assert!(row(&[]).is_blank());
        assert!(row(&["", " "]).is_blank());
        assert!(!row(&["", "Log"]).is_blank());
    }

    #[test]
    fn test_comment_rows() {
        assert!(row(&["# note"]).is_comment_row());
        assert!(row(&["", "#note", "Log"]).is_comment_row());
        assert!(!row(&["Log", "# trailing"]).is_comment_row());
        assert!(!row(&["", ""]).is_comment_row());
    }

    #[test]
    fn test_skippable_cells() {
        assert!(Cell::new(0, "").is_skippable());
        assert!(Cell::new(0, "\\").is_skippable());
        assert!(!Cell::new(0, "...").is_skippable());
    }
}
