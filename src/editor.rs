//! The editor: owns all state and dispatches key events by mode.

use std::path::{Path, PathBuf};

use crate::buffer::Document;
use crate::command::{Command, EditAction, InsertAt, Motion, Pending};
use crate::cursor::Cursor;
use crate::edit;
use crate::error::Result;
use crate::ex::ExCommand;
use crate::file;
use crate::input::{Key, KeyReader};
use crate::mode::Mode;
use crate::ui::{FrameContext, Screen, Terminal};
use crate::viewport::Viewport;

/// The complete editor state plus the terminal it draws to.
///
/// Built headless (no terminal) for tests: `execute_keys` feeds the
/// same key-handling path the interactive loop uses, and the resulting
/// document, cursor, and mode are observable through accessors.
pub struct Editor {
    document: Document,
    cursor: Cursor,
    viewport: Viewport,
    mode: Mode,
    pending: Pending,
    ex_input: String,
    message: String,
    path: Option<PathBuf>,
    terminal: Option<Terminal>,
    screen: Screen,
    should_quit: bool,
}

impl Editor {
    /// Create an editor attached to the controlling terminal. The
    /// bottom row is reserved for the status line.
    pub fn new() -> Result<Self> {
        let terminal = Terminal::new()?;
        let (rows, cols) = Terminal::size()?;
        Ok(Self::build(
            Some(terminal),
            Viewport::new(rows.saturating_sub(1), cols),
        ))
    }

    /// Create an editor with no terminal, sized like a 24x80 screen.
    pub fn new_headless() -> Self {
        Self::build(None, Viewport::new(23, 80))
    }

    fn build(terminal: Option<Terminal>, viewport: Viewport) -> Self {
        let mut document = Document::new();
        document.ensure_non_empty();
        Self {
            document,
            cursor: Cursor::new(),
            viewport,
            mode: Mode::Normal,
            pending: Pending::new(),
            ex_input: String::new(),
            message: String::new(),
            path: None,
            terminal,
            screen: Screen::new(),
            should_quit: false,
        }
    }

    /// Load a file into the buffer.
    pub fn open(&mut self, path: &Path) -> Result<()> {
        self.document = file::read_file(path)?;
        self.path = Some(path.to_path_buf());
        self.cursor = Cursor::new();
        Ok(())
    }

    /// The interactive loop: draw, read a key, dispatch, repeat.
    pub fn run(&mut self) -> Result<()> {
        let mut reader = KeyReader::new();
        loop {
            self.refresh()?;
            let key = reader.read_key()?;
            self.handle_key(key);
            if self.should_quit {
                if let Some(terminal) = &mut self.terminal {
                    terminal.clear()?;
                }
                return Ok(());
            }
        }
    }

    fn refresh(&mut self) -> Result<()> {
        self.viewport.scroll_to_cursor(&self.document, &self.cursor);
        let ctx = FrameContext {
            mode: self.mode,
            message: &self.message,
            ex_input: &self.ex_input,
            path: self.path.as_ref().and_then(|p| p.to_str()),
        };
        let frame = self
            .screen
            .compose(&self.document, &self.viewport, &self.cursor, &ctx);
        if let Some(terminal) = &mut self.terminal {
            terminal.write_frame(frame)?;
        }
        Ok(())
    }

    /// Dispatch one key event according to the current mode.
    pub fn handle_key(&mut self, key: Key) {
        match self.mode {
            Mode::Normal => self.handle_normal_key(key),
            Mode::Insert => self.handle_insert_key(key),
            Mode::CommandLine => self.handle_command_line_key(key),
        }
        self.viewport.scroll_to_cursor(&self.document, &self.cursor);
    }

    fn handle_normal_key(&mut self, key: Key) {
        // The status message survives Escape; only a mode change
        // clears it.
        if key == Key::Escape {
            self.pending.clear();
            return;
        }

        // An armed `f` consumes the next key as its target.
        if self.pending.armed_find {
            self.pending.armed_find = false;
            if let Some(target) = key.as_char() {
                let count = self.pending.take_count();
                self.cursor.find_char_forward(&self.document, target, count);
                self.finish_armed_delete();
            } else {
                self.pending.clear();
            }
            return;
        }

        // Count digits. A bare `0` is the line-start motion, not a digit.
        if let Key::Char(c) = key {
            if c.is_ascii_digit() && (c != '0' || self.pending.has_count()) {
                self.pending.push_digit(c);
                return;
            }
        }

        // Second key of a `g` sequence. Any other key forgets the
        // prefix and still dispatches normally.
        if self.pending.prefix.take() == Some('g') && key == Key::Char('g') {
            let row = match self.pending.count() {
                Some(n) => n.saturating_sub(1),
                None => 0,
            };
            self.pending.take_count();
            self.cursor.to_line(&self.document, row);
            self.finish_armed_delete();
            return;
        }

        let command = match Command::decode(key) {
            Some(cmd) => cmd,
            None => {
                self.pending.clear();
                return;
            }
        };

        match command {
            Command::Motion(motion) => self.apply_motion(motion),
            Command::Edit(action) => self.apply_edit(action),
            Command::EnterInsert(at) => self.enter_insert(at),
            Command::EnterCommandLine => {
                self.pending.clear();
                self.ex_input.clear();
                self.enter_mode(Mode::CommandLine);
            }
            Command::ArmDelete => {
                if self.pending.armed_delete.is_some() {
                    // `dd`
                    let count = self.pending.take_count();
                    self.pending.clear();
                    edit::delete_lines(&mut self.document, &mut self.cursor, count);
                } else {
                    self.pending.armed_delete = Some(self.cursor.pos);
                }
            }
            Command::ArmFind => self.pending.armed_find = true,
            Command::PrefixG => self.pending.prefix = Some('g'),
            Command::Quit => self.should_quit = true,
        }
    }

    fn apply_motion(&mut self, motion: Motion) {
        let count_given = self.pending.count();
        let count = self.pending.take_count();
        let doc = &self.document;
        match motion {
            Motion::Left => self.cursor.move_left(doc, count),
            Motion::Right => self.cursor.move_right(doc, count),
            Motion::Down => self.cursor.move_down(doc, count),
            Motion::Up => self.cursor.move_up(doc, count),
            Motion::LineStart => self.cursor.line_start(),
            Motion::FirstNonBlank => self.cursor.first_non_blank(doc),
            Motion::LineEnd => self.cursor.line_end(doc),
            Motion::WordForward => self.cursor.word_forward(doc, count),
            Motion::WordEnd => self.cursor.word_end(doc, count),
            Motion::WordBackward => self.cursor.word_backward(doc, count),
            Motion::LastLine => {
                let row = match count_given {
                    Some(n) => n.saturating_sub(1),
                    None => doc.line_count().saturating_sub(1),
                };
                self.cursor.to_line(doc, row);
            }
            Motion::PageDown => self.cursor.move_down(doc, self.viewport.rows * count),
            Motion::PageUp => self.cursor.move_up(doc, self.viewport.rows * count),
        }
        self.finish_armed_delete();
    }

    /// Complete a pending `d` + motion, if one is armed.
    fn finish_armed_delete(&mut self) {
        if let Some(origin) = self.pending.armed_delete.take() {
            edit::delete_range(&mut self.document, &mut self.cursor, origin);
        }
        self.pending.clear();
    }

    fn apply_edit(&mut self, action: EditAction) {
        let count = self.pending.take_count();
        self.pending.clear();
        match action {
            EditAction::DeleteChar => {
                edit::delete_chars(&mut self.document, &mut self.cursor, count)
            }
            EditAction::DeleteToLineEnd => {
                edit::delete_to_line_end(&mut self.document, &mut self.cursor)
            }
            EditAction::JoinLines => {
                // A count of N joins N lines, so N-1 joins (minimum one).
                for _ in 0..count.saturating_sub(1).max(1) {
                    edit::join_lines(&mut self.document, &mut self.cursor);
                }
            }
            EditAction::OpenBelow => {
                for _ in 0..count {
                    edit::open_below(&mut self.document, &mut self.cursor);
                }
                self.enter_mode(Mode::Insert);
            }
            EditAction::OpenAbove => {
                for _ in 0..count {
                    edit::open_above(&mut self.document, &mut self.cursor);
                }
                self.enter_mode(Mode::Insert);
            }
        }
    }

    fn enter_insert(&mut self, at: InsertAt) {
        self.pending.clear();
        match at {
            InsertAt::Cursor => {}
            InsertAt::FirstNonBlank => self.cursor.first_non_blank(&self.document),
            InsertAt::AfterCursor => {
                // In Insert mode the cursor may sit one past the last char.
                let len = self.document.line_len(self.cursor.pos.row);
                if len > 0 {
                    self.cursor.pos.col = (self.cursor.pos.col + 1).min(len);
                }
            }
            InsertAt::LineEnd => {
                self.cursor.pos.col = self.document.line_len(self.cursor.pos.row);
            }
        }
        self.cursor.sticky_col = self.cursor.pos.col;
        self.cursor.line_end_anchor = false;
        self.enter_mode(Mode::Insert);
    }

    fn handle_insert_key(&mut self, key: Key) {
        match key {
            Key::Escape => {
                self.cursor.pos.col = self.cursor.pos.col.saturating_sub(1);
                self.cursor.clamp(&self.document);
                self.cursor.sticky_col = self.cursor.pos.col;
                self.enter_mode(Mode::Normal);
            }
            Key::Enter => edit::split_line(&mut self.document, &mut self.cursor),
            Key::Backspace => edit::backspace(&mut self.document, &mut self.cursor),
            Key::Ctrl('u') => edit::kill_to_line_start(&mut self.document, &mut self.cursor),
            Key::Char(c) => edit::insert_char(&mut self.document, &mut self.cursor, c),
            Key::Tab => edit::insert_char(&mut self.document, &mut self.cursor, '\t'),
            _ => {}
        }
    }

    fn handle_command_line_key(&mut self, key: Key) {
        match key {
            Key::Escape => {
                self.ex_input.clear();
                self.enter_mode(Mode::Normal);
            }
            Key::Enter => {
                let input = std::mem::take(&mut self.ex_input);
                self.enter_mode(Mode::Normal);
                self.execute_ex(&input);
            }
            Key::Backspace => {
                // Backspacing past the `:` abandons the command line.
                if self.ex_input.pop().is_none() {
                    self.enter_mode(Mode::Normal);
                }
            }
            Key::Ctrl('u') => self.ex_input.clear(),
            Key::Char(c) => self.ex_input.push(c),
            _ => {}
        }
    }

    fn execute_ex(&mut self, input: &str) {
        match ExCommand::parse(input) {
            Some(ExCommand::Quit) => self.should_quit = true,
            Some(ExCommand::Write) => {
                self.save();
            }
            Some(ExCommand::WriteQuit) => {
                if self.save() {
                    self.should_quit = true;
                }
            }
            // Unrecognized commands are silently ignored.
            None => {}
        }
    }

    /// Write the buffer to its file; errors land on the status line.
    fn save(&mut self) -> bool {
        let path = match &self.path {
            Some(p) => p.clone(),
            None => {
                self.message = "No file name".to_string();
                return false;
            }
        };
        match file::write_file(&self.document, &path) {
            Ok(stats) => {
                self.message = stats.message(&path.display().to_string());
                true
            }
            Err(err) => {
                self.message = err.to_string();
                false
            }
        }
    }

    fn enter_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.message.clear();
    }

    /// Feed a string of keys through the normal dispatch path. `\x1b`
    /// is Escape, `\r`/`\n` is Enter, `\x7f` is Backspace, and other
    /// control characters become their Ctrl chord.
    pub fn execute_keys(&mut self, keys: &str) {
        for c in keys.chars() {
            let key = match c {
                '\x1b' => Key::Escape,
                '\r' | '\n' => Key::Enter,
                '\x7f' => Key::Backspace,
                '\t' => Key::Tab,
                c if (c as u32) < 0x20 => Key::Ctrl((b'a' + c as u8 - 1) as char),
                c => Key::Char(c),
            };
            self.handle_key(key);
        }
    }

    /// The buffer content as text.
    pub fn text(&self) -> String {
        self.document.to_text()
    }

    /// Replace the buffer content (tests and headless drivers).
    pub fn set_text(&mut self, text: &str) {
        self.document = Document::from_text(text);
        self.document.ensure_non_empty();
        self.cursor = Cursor::new();
        self.viewport.row_offset = 0;
        self.viewport.col_offset = 0;
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn set_path(&mut self, path: PathBuf) {
        self.path = Some(path);
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }
}
