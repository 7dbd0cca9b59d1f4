//! Line abstraction: raw content plus its cached display rendering.

/// Tab stop width used for display rendering.
pub const TAB_STOP: usize = 4;

/// A single line in the document.
///
/// Lines do NOT include the trailing newline character; the newline is
/// implicit between lines. Alongside the raw content a line caches its
/// `rendered` form, with tabs expanded to the next multiple of
/// [`TAB_STOP`]. The cache is regenerated synchronously by every
/// mutation, so reads never observe a stale rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// The content of the line (without newline).
    raw: String,
    /// The display form, tabs expanded.
    rendered: String,
}

impl Line {
    /// Create a new empty line.
    pub fn new() -> Self {
        Self {
            raw: String::new(),
            rendered: String::new(),
        }
    }

    /// Create a line from a string, stripping trailing line terminators.
    fn from_str_trimmed(s: &str) -> Self {
        let content = s.strip_suffix('\n').unwrap_or(s);
        let content = content.strip_suffix('\r').unwrap_or(content);
        let mut line = Self {
            raw: content.to_string(),
            rendered: String::new(),
        };
        line.update_render();
        line
    }

    /// Get the raw content of the line.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Get the rendered (tab-expanded) content of the line.
    pub fn rendered(&self) -> &str {
        &self.rendered
    }

    /// Length of the line in characters.
    pub fn len(&self) -> usize {
        self.raw.chars().count()
    }

    /// Check if the line is empty.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Width of the rendered line in display columns.
    pub fn display_width(&self) -> usize {
        self.rendered.chars().count()
    }

    /// Get the character at the given column.
    pub fn char_at(&self, col: usize) -> Option<char> {
        self.raw.chars().nth(col)
    }

    /// Byte offset of the given character column, or the end of the line
    /// when the column is past the last character.
    fn byte_of(&self, col: usize) -> usize {
        self.raw
            .char_indices()
            .nth(col)
            .map(|(idx, _)| idx)
            .unwrap_or(self.raw.len())
    }

    /// Insert a character at the given column (clamped to line length).
    pub fn insert_char(&mut self, col: usize, c: char) {
        let at = self.byte_of(col);
        self.raw.insert(at, c);
        self.update_render();
    }

    /// Delete the character at the given column, returning it.
    pub fn delete_char(&mut self, col: usize) -> Option<char> {
        if col >= self.len() {
            return None;
        }
        let at = self.byte_of(col);
        let deleted = self.raw.remove(at);
        self.update_render();
        Some(deleted)
    }

    /// Delete the columns in `[start, end)`, returning the removed text.
    pub fn delete_range(&mut self, start: usize, end: usize) -> String {
        let end = end.min(self.len());
        let start = start.min(end);
        let start_byte = self.byte_of(start);
        let end_byte = self.byte_of(end);
        let removed: String = self.raw.drain(start_byte..end_byte).collect();
        self.update_render();
        removed
    }

    /// Truncate the line at the given column, returning the removed tail.
    pub fn truncate(&mut self, col: usize) -> String {
        let at = self.byte_of(col);
        let removed = self.raw.split_off(at);
        self.update_render();
        removed
    }

    /// Split the line at the given column, returning the portion after it.
    pub fn split_off(&mut self, col: usize) -> Line {
        let at = self.byte_of(col);
        let rest = self.raw.split_off(at);
        self.update_render();
        Line::from(rest)
    }

    /// Append a string to the line.
    pub fn push_str(&mut self, s: &str) {
        self.raw.push_str(s);
        self.update_render();
    }

    /// Column of the first non-blank character, or 0 when the line is
    /// blank or empty.
    pub fn first_non_blank(&self) -> usize {
        self.raw
            .chars()
            .position(|c| !c.is_whitespace())
            .unwrap_or(0)
    }

    /// Check if the line contains only blanks (or nothing).
    pub fn is_blank(&self) -> bool {
        self.raw.chars().all(|c| c == ' ' || c == '\t')
    }

    /// Map a character column to its display column.
    ///
    /// Walks characters `0..col`; a tab advances to the next multiple of
    /// [`TAB_STOP`], everything else advances by one.
    pub fn col_to_display(&self, col: usize) -> usize {
        let mut display = 0;
        for c in self.raw.chars().take(col) {
            if c == '\t' {
                display += TAB_STOP - (display % TAB_STOP);
            } else {
                display += 1;
            }
        }
        display
    }

    /// Regenerate the rendered form from the raw content.
    fn update_render(&mut self) {
        self.rendered.clear();
        let mut col = 0;
        for c in self.raw.chars() {
            if c == '\t' {
                let spaces = TAB_STOP - (col % TAB_STOP);
                for _ in 0..spaces {
                    self.rendered.push(' ');
                }
                col += spaces;
            } else {
                self.rendered.push(c);
                col += 1;
            }
        }
    }
}

impl Default for Line {
    fn default() -> Self {
        Self::new()
    }
}

impl From<String> for Line {
    fn from(s: String) -> Self {
        Line::from_str_trimmed(&s)
    }
}

impl From<&str> for Line {
    fn from(s: &str) -> Self {
        Line::from_str_trimmed(s)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}
