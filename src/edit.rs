//! Edit operations: every buffer mutation the editor performs.
//!
//! Each operation takes the document and cursor together and leaves the
//! cursor at the position the operation defines. Operations never panic
//! on boundary positions; out-of-range work degrades to a no-op.

use crate::buffer::{Document, Line, Position};
use crate::cursor::Cursor;

/// Insert a character at the cursor and advance past it.
pub fn insert_char(doc: &mut Document, cursor: &mut Cursor, c: char) {
    doc.insert_char(cursor.pos.row, cursor.pos.col, c);
    cursor.pos.col += 1;
    cursor.sticky_col = cursor.pos.col;
}

/// Split the current line at the cursor (Enter in Insert mode); the
/// cursor lands at the start of the new line.
pub fn split_line(doc: &mut Document, cursor: &mut Cursor) {
    doc.split_line(cursor.pos.row, cursor.pos.col);
    cursor.pos.row += 1;
    cursor.pos.col = 0;
    cursor.sticky_col = 0;
}

/// Backspace in Insert mode: delete the character before the cursor, or
/// join onto the previous line when at column 0. At the very start of
/// the document this is a no-op.
pub fn backspace(doc: &mut Document, cursor: &mut Cursor) {
    if cursor.pos.col > 0 {
        cursor.pos.col -= 1;
        doc.delete_char(cursor.pos.row, cursor.pos.col);
    } else if cursor.pos.row > 0 {
        let prev_len = doc.line_len(cursor.pos.row - 1);
        if let Some(line) = doc.delete_line(cursor.pos.row) {
            doc.append_text(cursor.pos.row - 1, line.raw());
        }
        cursor.pos.row -= 1;
        cursor.pos.col = prev_len;
    }
    cursor.sticky_col = cursor.pos.col;
}

/// Ctrl-U in Insert mode: delete from the start of the line to the
/// cursor, leaving the cursor at column 0.
pub fn kill_to_line_start(doc: &mut Document, cursor: &mut Cursor) {
    if let Some(line) = doc.line_mut(cursor.pos.row) {
        line.delete_range(0, cursor.pos.col);
    }
    cursor.pos.col = 0;
    cursor.sticky_col = 0;
}

/// `x`: delete `count` characters starting at the cursor, stopping at
/// the end of the line. A no-op on an empty line.
pub fn delete_chars(doc: &mut Document, cursor: &mut Cursor, count: usize) {
    if let Some(line) = doc.line_mut(cursor.pos.row) {
        line.delete_range(cursor.pos.col, cursor.pos.col + count);
    }
    cursor.clamp(doc);
    cursor.sticky_col = cursor.pos.col;
}

/// `D`: delete from the cursor to the end of the line.
pub fn delete_to_line_end(doc: &mut Document, cursor: &mut Cursor) {
    if let Some(line) = doc.line_mut(cursor.pos.row) {
        line.truncate(cursor.pos.col);
    }
    cursor.clamp(doc);
    cursor.sticky_col = cursor.pos.col;
}

/// `J`: join the next line onto the current one.
///
/// A single space separates the two halves unless the current line is
/// blank, in which case the next line's content replaces it directly.
/// The next line's leading blanks are trimmed either way, and the
/// cursor lands at the join point. A no-op on the last line.
pub fn join_lines(doc: &mut Document, cursor: &mut Cursor) {
    let row = cursor.pos.row;
    if row + 1 >= doc.line_count() {
        return;
    }
    let next = match doc.delete_line(row + 1) {
        Some(line) => line,
        None => return,
    };
    let trimmed = next.raw().trim_start_matches([' ', '\t']);
    let current_blank = doc.line(row).map(|l| l.is_blank()).unwrap_or(true);

    let join_col;
    if current_blank {
        join_col = 0;
        if let Some(line) = doc.line_mut(row) {
            line.truncate(0);
            line.push_str(trimmed);
        }
    } else {
        join_col = doc.line_len(row);
        if !trimmed.is_empty() {
            doc.append_text(row, " ");
            doc.append_text(row, trimmed);
        }
    }
    cursor.pos.col = join_col;
    cursor.clamp(doc);
    cursor.sticky_col = cursor.pos.col;
}

/// `o`: open an empty line below the current one; the cursor moves to
/// its start, ready for Insert mode.
pub fn open_below(doc: &mut Document, cursor: &mut Cursor) {
    doc.insert_line(cursor.pos.row + 1, Line::new());
    cursor.pos.row += 1;
    cursor.pos.col = 0;
    cursor.sticky_col = 0;
    cursor.line_end_anchor = false;
}

/// `O`: open an empty line above the current one.
pub fn open_above(doc: &mut Document, cursor: &mut Cursor) {
    doc.insert_line(cursor.pos.row, Line::new());
    cursor.pos.col = 0;
    cursor.sticky_col = 0;
    cursor.line_end_anchor = false;
}

/// `dd`: delete `count` whole lines starting at the cursor row. The
/// document is restored to one empty line if the deletion emptied it.
pub fn delete_lines(doc: &mut Document, cursor: &mut Cursor, count: usize) {
    let start = cursor.pos.row;
    doc.delete_line_range(start, start + count - 1);
    doc.ensure_non_empty();
    cursor.clamp(doc);
    cursor.sticky_col = cursor.pos.col;
}

/// `d` + motion: delete between the armed origin and the position the
/// motion produced.
///
/// When the two positions share a row the delete is charwise over
/// `[min.col, max.col)`, exclusive of the upper column. When the rows
/// differ it is linewise over the inclusive row range, blank end rows
/// included.
pub fn delete_range(doc: &mut Document, cursor: &mut Cursor, origin: Position) {
    let target = cursor.pos;
    let (from, to) = if origin <= target {
        (origin, target)
    } else {
        (target, origin)
    };

    if from.row == to.row {
        if let Some(line) = doc.line_mut(from.row) {
            line.delete_range(from.col, to.col);
        }
    } else {
        doc.delete_line_range(from.row, to.row);
        doc.ensure_non_empty();
    }
    cursor.pos = from;
    cursor.clamp(doc);
    cursor.sticky_col = cursor.pos.col;
}
