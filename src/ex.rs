//! Ex-style `:` command parsing.

/// A parsed `:` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExCommand {
    /// `:q` — quit.
    Quit,
    /// `:w` — write the buffer.
    Write,
    /// `:wq` or `:x` — write then quit.
    WriteQuit,
}

impl ExCommand {
    /// Parse a command-line string (with or without the leading `:`).
    /// Surrounding whitespace is ignored; anything unrecognized is
    /// `None`.
    pub fn parse(input: &str) -> Option<ExCommand> {
        let cmd = input.trim().trim_start_matches(':').trim();
        match cmd {
            "q" => Some(ExCommand::Quit),
            "w" => Some(ExCommand::Write),
            "wq" | "x" => Some(ExCommand::WriteQuit),
            _ => None,
        }
    }
}
