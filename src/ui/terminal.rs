//! Raw-mode terminal setup and size detection.

use std::io::{self, Write};
use std::os::unix::io::AsRawFd;

use termios::{
    tcsetattr, Termios, BRKINT, CS8, ECHO, ICANON, ICRNL, IEXTEN, INPCK, ISIG, ISTRIP, IXON,
    OPOST, TCSAFLUSH, VMIN, VTIME,
};

use crate::error::{EditorError, Result};

/// The controlling terminal in raw mode.
///
/// Construction switches the terminal to raw mode; the saved settings
/// are restored on drop, so the shell is sane again even when the
/// editor exits through an error path.
pub struct Terminal {
    original: Termios,
    fd: i32,
}

impl Terminal {
    /// Put the terminal into raw mode.
    ///
    /// Reads are configured with VMIN=0 and VTIME=1: a read returns
    /// after at most a tenth of a second even with no input, which the
    /// key reader relies on to disambiguate escape sequences.
    pub fn new() -> Result<Self> {
        let fd = io::stdin().as_raw_fd();
        let original = Termios::from_fd(fd).map_err(EditorError::RawMode)?;

        let mut raw = original;
        raw.c_iflag &= !(BRKINT | ICRNL | INPCK | ISTRIP | IXON);
        raw.c_oflag &= !OPOST;
        raw.c_lflag &= !(ECHO | ICANON | IEXTEN | ISIG);
        raw.c_cflag |= CS8;
        raw.c_cc[VMIN] = 0;
        raw.c_cc[VTIME] = 1;
        tcsetattr(fd, TCSAFLUSH, &raw).map_err(EditorError::RawMode)?;

        Ok(Self { original, fd })
    }

    /// Query the terminal size in `(rows, cols)`.
    pub fn size() -> Result<(usize, usize)> {
        let mut ws: libc::winsize = unsafe { std::mem::zeroed() };
        let ret = unsafe { libc::ioctl(io::stdout().as_raw_fd(), libc::TIOCGWINSZ, &mut ws) };
        if ret == -1 || ws.ws_row == 0 || ws.ws_col == 0 {
            return Err(EditorError::TerminalSize);
        }
        Ok((ws.ws_row as usize, ws.ws_col as usize))
    }

    /// Write a fully composed frame to the terminal.
    pub fn write_frame(&mut self, frame: &str) -> Result<()> {
        let mut stdout = io::stdout();
        stdout.write_all(frame.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }

    /// Clear the screen and home the cursor (used on exit).
    pub fn clear(&mut self) -> Result<()> {
        self.write_frame("\x1b[2J\x1b[H")
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = tcsetattr(self.fd, TCSAFLUSH, &self.original);
        let mut stdout = io::stdout();
        let _ = stdout.write_all(b"\x1b[2J\x1b[H");
        let _ = stdout.flush();
    }
}
