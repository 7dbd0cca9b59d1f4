//! Blocking key reader over raw-mode stdin.

use std::io::{self, Read};

use crate::error::Result;

use super::key::Key;

/// Reads key events from stdin one byte at a time.
///
/// The terminal is configured with a short read timeout (VTIME), so a
/// `read` may legitimately return zero bytes; the reader loops until a
/// byte arrives. The timeout is what lets a bare escape key be told
/// apart from the start of an escape sequence.
pub struct KeyReader {
    stdin: io::Stdin,
}

impl KeyReader {
    pub fn new() -> Self {
        Self { stdin: io::stdin() }
    }

    /// Block until the next key event.
    pub fn read_key(&mut self) -> Result<Key> {
        let byte = loop {
            if let Some(b) = self.read_byte()? {
                break b;
            }
        };

        match byte {
            0x1b => self.read_escape(),
            b if b < 0x80 => Ok(Key::from_byte(b)),
            b => self.read_utf8(b),
        }
    }

    /// One read with the terminal's timeout; `None` when it expired.
    fn read_byte(&mut self) -> Result<Option<u8>> {
        let mut buf = [0u8; 1];
        let n = self.stdin.read(&mut buf)?;
        Ok(if n == 1 { Some(buf[0]) } else { None })
    }

    /// Disambiguate a bare escape from an escape sequence. If no byte
    /// follows within the timeout it was the escape key; otherwise the
    /// sequence (arrow keys and the like) is consumed as `Unknown`.
    fn read_escape(&mut self) -> Result<Key> {
        let next = match self.read_byte()? {
            None => return Ok(Key::Escape),
            Some(b) => b,
        };
        if next == b'[' || next == b'O' {
            // Drain the CSI/SS3 body: parameter bytes then a final byte.
            while let Some(b) = self.read_byte()? {
                if (0x40..=0x7e).contains(&b) {
                    break;
                }
            }
            Ok(Key::Unknown)
        } else {
            Ok(Key::Unknown)
        }
    }

    /// Finish a multi-byte UTF-8 character started by `first`.
    fn read_utf8(&mut self, first: u8) -> Result<Key> {
        let len = match first {
            b if b >> 5 == 0b110 => 2,
            b if b >> 4 == 0b1110 => 3,
            b if b >> 3 == 0b11110 => 4,
            _ => return Ok(Key::Unknown),
        };
        let mut bytes = vec![first];
        while bytes.len() < len {
            match self.read_byte()? {
                Some(b) => bytes.push(b),
                None => return Ok(Key::Unknown),
            }
        }
        match std::str::from_utf8(&bytes) {
            Ok(s) => Ok(s.chars().next().map(Key::Char).unwrap_or(Key::Unknown)),
            Err(_) => Ok(Key::Unknown),
        }
    }
}

impl Default for KeyReader {
    fn default() -> Self {
        Self::new()
    }
}
