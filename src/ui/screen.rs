//! Frame composition: document rows, welcome banner, and status line.

use crate::buffer::Document;
use crate::cursor::Cursor;
use crate::mode::Mode;
use crate::viewport::Viewport;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Composes each frame into a single string so the terminal sees one
/// write per refresh.
#[derive(Debug, Default)]
pub struct Screen {
    frame: String,
}

/// Everything a frame needs beyond the document itself.
pub struct FrameContext<'a> {
    pub mode: Mode,
    pub message: &'a str,
    pub ex_input: &'a str,
    pub path: Option<&'a str>,
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compose a full frame: hide cursor, repaint every row and the
    /// status line, then place and show the cursor.
    pub fn compose(
        &mut self,
        doc: &Document,
        viewport: &Viewport,
        cursor: &Cursor,
        ctx: &FrameContext,
    ) -> &str {
        self.frame.clear();
        self.frame.push_str("\x1b[?25l\x1b[H");

        self.draw_rows(doc, viewport, ctx);
        self.draw_status(doc, viewport, cursor, ctx);

        let (screen_row, screen_col) = viewport.screen_position(doc, cursor);
        self.frame
            .push_str(&format!("\x1b[{};{}H", screen_row + 1, screen_col + 1));
        self.frame.push_str("\x1b[?25h");
        &self.frame
    }

    fn draw_rows(&mut self, doc: &Document, viewport: &Viewport, ctx: &FrameContext) {
        let show_welcome =
            ctx.path.is_none() && doc.line_count() == 1 && doc.line(0).is_some_and(|l| l.is_empty());

        for screen_row in 0..viewport.rows {
            let doc_row = viewport.row_offset + screen_row;
            match doc.line(doc_row) {
                Some(line) => {
                    let rendered = line.rendered();
                    let visible: String = rendered
                        .chars()
                        .skip(viewport.col_offset)
                        .take(viewport.cols)
                        .collect();
                    self.frame.push_str(&visible);
                }
                None => {
                    if show_welcome && screen_row == viewport.rows / 3 {
                        self.draw_welcome(viewport);
                    } else {
                        self.frame.push('~');
                    }
                }
            }
            self.frame.push_str("\x1b[K\r\n");
        }
    }

    fn draw_welcome(&mut self, viewport: &Viewport) {
        let mut banner = format!("mvi editor -- version {VERSION}");
        banner.truncate(viewport.cols);
        let padding = (viewport.cols - banner.chars().count()) / 2;
        if padding > 0 {
            self.frame.push('~');
            for _ in 1..padding {
                self.frame.push(' ');
            }
        }
        self.frame.push_str(&banner);
    }

    fn draw_status(
        &mut self,
        doc: &Document,
        viewport: &Viewport,
        cursor: &Cursor,
        ctx: &FrameContext,
    ) {
        let left = match ctx.mode {
            Mode::CommandLine => format!(":{}", ctx.ex_input),
            Mode::Insert if ctx.message.is_empty() => ctx.mode.to_string(),
            _ => ctx.message.to_string(),
        };

        let mut status: Vec<char> = vec![' '; viewport.cols];
        for (i, c) in left.chars().take(viewport.cols).enumerate() {
            status[i] = c;
        }

        // Right-hand side: "row,col" then the position indicator, both
        // 1-based, at fixed offsets from the right edge.
        let pos = format!("{},{}", cursor.pos.row + 1, cursor.pos.col + 1);
        let indicator = position_indicator(doc, viewport);
        if viewport.cols >= 17 {
            overlay(&mut status, viewport.cols - 17, &pos);
            overlay(&mut status, viewport.cols - 4, &indicator);
        }

        self.frame.push_str("\x1b[7m");
        self.frame.extend(status);
        self.frame.push_str("\x1b[m\x1b[K");
    }
}

fn overlay(buf: &mut [char], at: usize, text: &str) {
    for (i, c) in text.chars().enumerate() {
        if let Some(slot) = buf.get_mut(at + i) {
            *slot = c;
        }
    }
}

/// The scroll position shown at the right edge of the status line:
/// `All` when the whole document fits, `Top`/`Bot` at the extremes, and
/// a percentage in between.
fn position_indicator(doc: &Document, viewport: &Viewport) -> String {
    let lines = doc.line_count();
    if lines <= viewport.rows {
        return "All".to_string();
    }
    let max_offset = lines - viewport.rows;
    let pct = (viewport.row_offset * 100 + max_offset / 2) / max_offset;
    match pct {
        0 => "Top".to_string(),
        100.. => "Bot".to_string(),
        p => format!("{p}%"),
    }
}
