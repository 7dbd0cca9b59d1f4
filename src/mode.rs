//! Editor modes.

use std::fmt;

/// The editor's current mode, deciding how keys are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Keys are commands and motions.
    #[default]
    Normal,
    /// Printable keys insert text at the cursor.
    Insert,
    /// Keys accumulate into an ex-style `:` command line.
    CommandLine,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Normal => write!(f, ""),
            Mode::Insert => write!(f, "-- INSERT --"),
            Mode::CommandLine => write!(f, ""),
        }
    }
}
