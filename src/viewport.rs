//! Viewport: the visible window into the document.

use crate::buffer::Document;
use crate::cursor::Cursor;

/// The visible window: a row/column offset into the document plus the
/// text area dimensions.
///
/// The viewport never moves on its own; `scroll_to_cursor` recomputes
/// the offsets after every action so the cursor stays visible.
#[derive(Debug, Clone, Copy, Default)]
pub struct Viewport {
    /// First visible document row.
    pub row_offset: usize,
    /// First visible display column.
    pub col_offset: usize,
    /// Height of the text area in rows.
    pub rows: usize,
    /// Width of the text area in columns.
    pub cols: usize,
}

impl Viewport {
    /// Create a viewport with the given text area dimensions.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            row_offset: 0,
            col_offset: 0,
            rows,
            cols,
        }
    }

    /// Adjust the offsets so the cursor is inside the visible window.
    ///
    /// Vertically the row offset follows the cursor in both directions.
    /// Horizontally the clamp runs on display columns (the cursor's
    /// character column mapped through tab expansion), and the column
    /// offset resets to 0 whenever the whole line fits in the window.
    pub fn scroll_to_cursor(&mut self, doc: &Document, cursor: &Cursor) {
        if cursor.pos.row < self.row_offset {
            self.row_offset = cursor.pos.row;
        }
        if cursor.pos.row >= self.row_offset + self.rows {
            self.row_offset = cursor.pos.row - self.rows + 1;
        }

        let (display_col, display_width) = match doc.line(cursor.pos.row) {
            Some(line) => (line.col_to_display(cursor.pos.col), line.display_width()),
            None => (0, 0),
        };
        if display_col < self.col_offset {
            self.col_offset = display_col;
        }
        if display_col >= self.col_offset + self.cols {
            self.col_offset = display_col - self.cols + 1;
        }
        if display_width <= self.cols {
            self.col_offset = 0;
        }
    }

    /// Cursor position on screen, relative to the viewport origin.
    /// Returns `(screen_row, screen_col)`, both 0-indexed.
    pub fn screen_position(&self, doc: &Document, cursor: &Cursor) -> (usize, usize) {
        let display_col = doc
            .line(cursor.pos.row)
            .map(|l| l.col_to_display(cursor.pos.col))
            .unwrap_or(0);
        (
            cursor.pos.row - self.row_offset,
            display_col.saturating_sub(self.col_offset),
        )
    }
}
