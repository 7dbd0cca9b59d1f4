//! The document: an ordered sequence of lines.

use super::line::Line;

/// The text being edited, as an ordered sequence of lines.
///
/// Rows are 0-indexed; the valid range is `[0, line_count())`. The
/// document itself tolerates being empty, but the editor keeps it at one
/// empty line as the minimal working state (callers that delete the last
/// line re-insert an empty one immediately).
#[derive(Debug, Default)]
pub struct Document {
    lines: Vec<Line>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Create a document from text content.
    pub fn from_text(text: &str) -> Self {
        let lines = if text.is_empty() {
            Vec::new()
        } else {
            text.lines().map(Line::from).collect()
        };
        Self { lines }
    }

    /// Check if the document has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Get a line by row.
    pub fn line(&self, row: usize) -> Option<&Line> {
        self.lines.get(row)
    }

    /// Get a line mutably by row.
    pub fn line_mut(&mut self, row: usize) -> Option<&mut Line> {
        self.lines.get_mut(row)
    }

    /// Length of a line in characters, 0 when the row is out of range.
    pub fn line_len(&self, row: usize) -> usize {
        self.line(row).map(|l| l.len()).unwrap_or(0)
    }

    /// Insert a line at the given row (clamped to the end).
    /// Untouched lines keep their order.
    pub fn insert_line(&mut self, at: usize, line: Line) {
        let at = at.min(self.lines.len());
        self.lines.insert(at, line);
    }

    /// Delete the line at the given row, returning it.
    pub fn delete_line(&mut self, at: usize) -> Option<Line> {
        if at < self.lines.len() {
            Some(self.lines.remove(at))
        } else {
            None
        }
    }

    /// Delete the rows in `[start, end]` inclusive, clamped to the
    /// document, returning the removed lines.
    pub fn delete_line_range(&mut self, start: usize, end: usize) -> Vec<Line> {
        if self.lines.is_empty() || start >= self.lines.len() {
            return Vec::new();
        }
        let end = end.min(self.lines.len() - 1);
        let start = start.min(end);
        self.lines.drain(start..=end).collect()
    }

    /// Insert a character into a line.
    pub fn insert_char(&mut self, row: usize, col: usize, c: char) {
        if let Some(line) = self.line_mut(row) {
            line.insert_char(col, c);
        }
    }

    /// Delete the character at the given position, returning it.
    pub fn delete_char(&mut self, row: usize, col: usize) -> Option<char> {
        self.line_mut(row).and_then(|line| line.delete_char(col))
    }

    /// Append text to the end of a line (used by line joins).
    pub fn append_text(&mut self, row: usize, text: &str) {
        if let Some(line) = self.line_mut(row) {
            line.push_str(text);
        }
    }

    /// Split a line at the given column, inserting the remainder as a
    /// new line directly below.
    pub fn split_line(&mut self, row: usize, col: usize) {
        if row >= self.lines.len() {
            return;
        }
        let rest = self.lines[row].split_off(col);
        self.lines.insert(row + 1, rest);
    }

    /// Re-insert an empty line if the document has none, restoring the
    /// minimal working state after a deletion removed the last line.
    pub fn ensure_non_empty(&mut self) {
        if self.lines.is_empty() {
            self.lines.push(Line::new());
        }
    }

    /// Serialize all lines joined by the line terminator.
    ///
    /// A non-empty document always ends with a single trailing newline;
    /// an empty document serializes to the empty string.
    pub fn to_text(&self) -> String {
        if self.lines.is_empty() {
            String::new()
        } else {
            let mut text = self
                .lines
                .iter()
                .map(|l| l.raw())
                .collect::<Vec<_>>()
                .join("\n");
            text.push('\n');
            text
        }
    }

}

impl std::fmt::Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_text())
    }
}
