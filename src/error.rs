//! Error types for the editor.

use std::io;
use thiserror::Error;

/// Result type alias for editor operations.
pub type Result<T> = std::result::Result<T, EditorError>;

/// All fatal errors in the editor.
///
/// Out-of-bounds motion is never an error: every motion clamps silently.
/// The failures modeled here are the ones the editor cannot recover from
/// (terminal setup, loading the initial file) plus I/O failures surfaced
/// as status-line messages during a save.
#[derive(Debug, Error)]
pub enum EditorError {
    /// I/O error (file operations, terminal output).
    #[error("{0}")]
    Io(#[from] io::Error),

    /// The initial file could not be opened.
    #[error("cannot open \"{path}\": {source}")]
    FileOpen {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The terminal size could not be determined at startup.
    #[error("cannot determine terminal size")]
    TerminalSize,

    /// Raw-mode configuration failed.
    #[error("cannot configure terminal: {0}")]
    RawMode(io::Error),
}
