//! Position type for addressing the document.

use std::cmp::Ordering;

/// A position in the document (0-indexed row and column).
///
/// The column is a character index into the line's raw content, not a
/// display column; see `Line::col_to_display` for the mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Row index (0-indexed).
    pub row: usize,
    /// Column (0-indexed character offset within the line).
    pub col: usize,
}

impl Position {
    /// Create a new position.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Position at the start of the document.
    pub fn start() -> Self {
        Self { row: 0, col: 0 }
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.row.cmp(&other.row) {
            Ordering::Equal => self.col.cmp(&other.col),
            ord => ord,
        }
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
