//! Key events decoded from terminal input.

/// A single key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character.
    Char(char),
    /// A control chord (`Ctrl('f')` for Ctrl-F).
    Ctrl(char),
    /// The escape key.
    Escape,
    /// Backspace (DEL, 0x7f).
    Backspace,
    /// Carriage return.
    Enter,
    /// Horizontal tab.
    Tab,
    /// Anything we do not interpret (arrow keys, function keys).
    Unknown,
}

impl Key {
    /// Decode a single input byte into a key event. Multi-byte escape
    /// sequences and UTF-8 continuation are handled by the reader.
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            b'\t' => Key::Tab,
            b'\r' | b'\n' => Key::Enter,
            0x1b => Key::Escape,
            0x7f => Key::Backspace,
            0x01..=0x1a => Key::Ctrl((b'a' + byte - 1) as char),
            _ => Key::Char(byte as char),
        }
    }

    /// The printable character, if this key carries one.
    pub fn as_char(&self) -> Option<char> {
        match self {
            Key::Char(c) => Some(*c),
            Key::Tab => Some('\t'),
            _ => None,
        }
    }
}
