//! Cursor controller: logical position, sticky column, and motions.

use crate::buffer::{Document, Position};

/// Character class used by word motions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Word,
    Punct,
    Blank,
}

fn classify(c: char) -> CharClass {
    if c == ' ' || c == '\t' {
        CharClass::Blank
    } else if c.is_alphanumeric() || c == '_' {
        CharClass::Word
    } else {
        CharClass::Punct
    }
}

/// The cursor: a logical position plus the state needed to keep vertical
/// motion predictable.
///
/// `sticky_col` remembers the last intentionally-set column so that
/// moving across lines of different lengths re-anchors to the intended
/// column. `line_end_anchor` pins the cursor to end-of-line (set by `$`)
/// until any horizontal motion clears it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cursor {
    /// Current logical position.
    pub pos: Position,
    /// Preferred column across vertical moves.
    pub sticky_col: usize,
    /// Cursor is pinned to end-of-line.
    pub line_end_anchor: bool,
}

impl Cursor {
    /// Create a cursor at the start of the document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Maximum Normal-mode column on the given row.
    fn max_col(doc: &Document, row: usize) -> usize {
        doc.line_len(row).saturating_sub(1)
    }

    /// Clamp the position to the Normal-mode bounds: row within the
    /// document, column on a character (or 0 on an empty line).
    pub fn clamp(&mut self, doc: &Document) {
        let last_row = doc.line_count().saturating_sub(1);
        if self.pos.row > last_row {
            self.pos.row = last_row;
        }
        let max = Self::max_col(doc, self.pos.row);
        if self.line_end_anchor || self.pos.col > max {
            self.pos.col = max;
        }
    }

    /// Re-anchor the column after a vertical move: end-of-line when
    /// anchored, otherwise the sticky column clamped to the new line.
    fn reanchor_col(&mut self, doc: &Document) {
        let max = Self::max_col(doc, self.pos.row);
        self.pos.col = if self.line_end_anchor {
            max
        } else {
            self.sticky_col.min(max)
        };
    }

    /// Record an intentional horizontal placement.
    fn set_col(&mut self, col: usize) {
        self.pos.col = col;
        self.sticky_col = col;
        self.line_end_anchor = false;
    }

    /// Move left, clamped at column 0.
    pub fn move_left(&mut self, _doc: &Document, count: usize) {
        self.set_col(self.pos.col.saturating_sub(count));
    }

    /// Move right, clamped at the last character.
    pub fn move_right(&mut self, doc: &Document, count: usize) {
        let max = Self::max_col(doc, self.pos.row);
        self.set_col((self.pos.col + count).min(max));
    }

    /// Move down, clamped at the last line.
    pub fn move_down(&mut self, doc: &Document, count: usize) {
        let last_row = doc.line_count().saturating_sub(1);
        self.pos.row = (self.pos.row + count).min(last_row);
        self.reanchor_col(doc);
    }

    /// Move up, clamped at the first line.
    pub fn move_up(&mut self, doc: &Document, count: usize) {
        self.pos.row = self.pos.row.saturating_sub(count);
        self.reanchor_col(doc);
    }

    /// Move to column 0.
    pub fn line_start(&mut self) {
        self.set_col(0);
    }

    /// Move to the first non-blank character of the line.
    pub fn first_non_blank(&mut self, doc: &Document) {
        let col = doc
            .line(self.pos.row)
            .map(|l| l.first_non_blank())
            .unwrap_or(0);
        self.set_col(col.min(Self::max_col(doc, self.pos.row)));
    }

    /// Move to the last character of the line and pin there.
    pub fn line_end(&mut self, doc: &Document) {
        self.pos.col = Self::max_col(doc, self.pos.row);
        self.sticky_col = self.pos.col;
        self.line_end_anchor = true;
    }

    /// Jump to a row (0-indexed, clamped).
    pub fn to_line(&mut self, doc: &Document, row: usize) {
        let last_row = doc.line_count().saturating_sub(1);
        self.pos.row = row.min(last_row);
        self.reanchor_col(doc);
    }

    /// Jump to the `count`-th occurrence of `target` after the cursor on
    /// the current line. A no-op when there are fewer occurrences.
    pub fn find_char_forward(&mut self, doc: &Document, target: char, count: usize) {
        let line = match doc.line(self.pos.row) {
            Some(l) => l,
            None => return,
        };
        let mut found = 0;
        for (col, c) in line.raw().chars().enumerate().skip(self.pos.col + 1) {
            if c == target {
                found += 1;
                if found == count {
                    self.set_col(col);
                    return;
                }
            }
        }
    }

    /// Move to the next word start (`w`), repeated `count` times.
    pub fn word_forward(&mut self, doc: &Document, count: usize) {
        let mut pos = self.pos;
        for _ in 0..count {
            match next_word_start(doc, pos) {
                Some(next) => pos = next,
                None => break,
            }
        }
        self.pos = pos;
        self.set_col(pos.col);
    }

    /// Move to the end of the current or next word (`e`), repeated
    /// `count` times. Never lands on whitespace.
    pub fn word_end(&mut self, doc: &Document, count: usize) {
        let mut pos = self.pos;
        for _ in 0..count {
            match next_word_end(doc, pos) {
                Some(next) => pos = next,
                None => break,
            }
        }
        self.pos = pos;
        self.set_col(pos.col);
    }

    /// Move to the previous word start (`b`), repeated `count` times.
    pub fn word_backward(&mut self, doc: &Document, count: usize) {
        let mut pos = self.pos;
        for _ in 0..count {
            match prev_word_start(doc, pos) {
                Some(prev) => pos = prev,
                None => break,
            }
        }
        self.pos = pos;
        self.set_col(pos.col);
    }
}

/// Find the start of the next word after `pos`. An empty line is itself
/// a word stop. Returns `None` at the end of the document.
fn next_word_start(doc: &Document, pos: Position) -> Option<Position> {
    let mut row = pos.row;
    let mut col = pos.col;

    let line = doc.line(row)?;
    if let Some(c) = line.char_at(col) {
        let class = classify(c);
        if class != CharClass::Blank {
            // Skip the rest of the current token.
            while line.char_at(col).map(classify) == Some(class) {
                col += 1;
            }
        }
    }

    loop {
        let line = doc.line(row)?;
        while let Some(c) = line.char_at(col) {
            if classify(c) != CharClass::Blank {
                return Some(Position::new(row, col));
            }
            col += 1;
        }
        if row + 1 >= doc.line_count() {
            return None;
        }
        row += 1;
        col = 0;
        if doc.line(row)?.is_empty() {
            return Some(Position::new(row, 0));
        }
    }
}

/// Find the end of the current or next word after `pos`.
fn next_word_end(doc: &Document, pos: Position) -> Option<Position> {
    let mut row = pos.row;
    let mut col = pos.col + 1;

    // Skip blanks (and line boundaries) to the next token.
    let (row, col) = loop {
        let line = doc.line(row)?;
        match line.char_at(col) {
            Some(c) if classify(c) != CharClass::Blank => break (row, col),
            Some(_) => col += 1,
            None => {
                if row + 1 >= doc.line_count() {
                    return None;
                }
                row += 1;
                col = 0;
            }
        }
    };

    // Advance to the last character of the token.
    let line = doc.line(row)?;
    let class = classify(line.char_at(col)?);
    let mut end = col;
    while line.char_at(end + 1).map(classify) == Some(class) {
        end += 1;
    }
    Some(Position::new(row, end))
}

/// Find the start of the word before `pos`. An empty line is itself a
/// word stop. Returns `None` at the start of the document.
fn prev_word_start(doc: &Document, pos: Position) -> Option<Position> {
    let mut row = pos.row;
    let mut col = pos.col;

    // Step back one position, crossing to the previous line if needed.
    loop {
        if col > 0 {
            col -= 1;
            break;
        }
        if row == 0 {
            return None;
        }
        row -= 1;
        let line = doc.line(row)?;
        if line.is_empty() {
            return Some(Position::new(row, 0));
        }
        col = line.len();
    }

    // Skip blanks backward, crossing line boundaries.
    loop {
        let line = doc.line(row)?;
        match line.char_at(col) {
            Some(c) if classify(c) != CharClass::Blank => break,
            _ => {
                if col > 0 {
                    col -= 1;
                } else {
                    if row == 0 {
                        return None;
                    }
                    row -= 1;
                    let line = doc.line(row)?;
                    if line.is_empty() {
                        return Some(Position::new(row, 0));
                    }
                    col = line.len().saturating_sub(1);
                }
            }
        }
    }

    // Walk back to the start of the token.
    let line = doc.line(row)?;
    let class = classify(line.char_at(col)?);
    while col > 0 && line.char_at(col - 1).map(classify) == Some(class) {
        col -= 1;
    }
    Some(Position::new(row, col))
}
