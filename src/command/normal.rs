//! Normal-mode command decoding.

use crate::input::Key;

/// A cursor motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Left,
    Right,
    Down,
    Up,
    LineStart,
    FirstNonBlank,
    LineEnd,
    WordForward,
    WordEnd,
    WordBackward,
    /// `G`: last line, or line N with a count.
    LastLine,
    PageDown,
    PageUp,
}

/// Where an insert-entry command places the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertAt {
    /// `i`: before the cursor.
    Cursor,
    /// `I`: before the first non-blank of the line.
    FirstNonBlank,
    /// `a`: after the cursor.
    AfterCursor,
    /// `A`: after the last character of the line.
    LineEnd,
}

/// An editing action that modifies the buffer directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    /// `x`: delete characters under and after the cursor.
    DeleteChar,
    /// `D`: delete from the cursor to the end of the line.
    DeleteToLineEnd,
    /// `J`: join the next line onto the current one.
    JoinLines,
    /// `o`: open a line below and enter Insert.
    OpenBelow,
    /// `O`: open a line above and enter Insert.
    OpenAbove,
}

/// A fully decoded Normal-mode command. Counts and prefixes are
/// resolved before decoding; this is the final dispatch tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Motion(Motion),
    Edit(EditAction),
    EnterInsert(InsertAt),
    EnterCommandLine,
    /// `d`: wait for a motion (or another `d`) to delete over.
    ArmDelete,
    /// `f`: wait for the target character.
    ArmFind,
    /// `g`: first half of a two-key sequence.
    PrefixG,
    Quit,
}

impl Command {
    /// Decode a key into a Normal-mode command. Returns `None` for keys
    /// with no binding.
    pub fn decode(key: Key) -> Option<Command> {
        let cmd = match key {
            Key::Char('h') => Command::Motion(Motion::Left),
            Key::Char('l') => Command::Motion(Motion::Right),
            Key::Char('j') | Key::Char('+') | Key::Enter => Command::Motion(Motion::Down),
            Key::Char('k') | Key::Char('-') => Command::Motion(Motion::Up),
            Key::Char('0') => Command::Motion(Motion::LineStart),
            Key::Char('^') => Command::Motion(Motion::FirstNonBlank),
            Key::Char('$') => Command::Motion(Motion::LineEnd),
            Key::Char('w') => Command::Motion(Motion::WordForward),
            Key::Char('e') => Command::Motion(Motion::WordEnd),
            Key::Char('b') => Command::Motion(Motion::WordBackward),
            Key::Char('G') => Command::Motion(Motion::LastLine),
            Key::Ctrl('f') => Command::Motion(Motion::PageDown),
            Key::Ctrl('b') => Command::Motion(Motion::PageUp),
            Key::Char('i') => Command::EnterInsert(InsertAt::Cursor),
            Key::Char('I') => Command::EnterInsert(InsertAt::FirstNonBlank),
            Key::Char('a') => Command::EnterInsert(InsertAt::AfterCursor),
            Key::Char('A') => Command::EnterInsert(InsertAt::LineEnd),
            Key::Char('o') => Command::Edit(EditAction::OpenBelow),
            Key::Char('O') => Command::Edit(EditAction::OpenAbove),
            Key::Char('x') => Command::Edit(EditAction::DeleteChar),
            Key::Char('D') => Command::Edit(EditAction::DeleteToLineEnd),
            Key::Char('J') => Command::Edit(EditAction::JoinLines),
            Key::Char('d') => Command::ArmDelete,
            Key::Char('f') => Command::ArmFind,
            Key::Char('g') => Command::PrefixG,
            Key::Char(':') => Command::EnterCommandLine,
            Key::Ctrl('q') => Command::Quit,
            _ => return None,
        };
        Some(cmd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_motion_keys() {
        assert_eq!(
            Command::decode(Key::Char('h')),
            Some(Command::Motion(Motion::Left))
        );
        assert_eq!(
            Command::decode(Key::Char('$')),
            Some(Command::Motion(Motion::LineEnd))
        );
        assert_eq!(
            Command::decode(Key::Char('G')),
            Some(Command::Motion(Motion::LastLine))
        );
    }

    #[test]
    fn test_down_aliases() {
        for key in [Key::Char('j'), Key::Char('+'), Key::Enter] {
            assert_eq!(Command::decode(key), Some(Command::Motion(Motion::Down)));
        }
        for key in [Key::Char('k'), Key::Char('-')] {
            assert_eq!(Command::decode(key), Some(Command::Motion(Motion::Up)));
        }
    }

    #[test]
    fn test_arming_keys() {
        assert_eq!(Command::decode(Key::Char('d')), Some(Command::ArmDelete));
        assert_eq!(Command::decode(Key::Char('f')), Some(Command::ArmFind));
        assert_eq!(Command::decode(Key::Char('g')), Some(Command::PrefixG));
    }

    #[test]
    fn test_unbound_key() {
        assert_eq!(Command::decode(Key::Char('z')), None);
        assert_eq!(Command::decode(Key::Unknown), None);
    }

    #[test]
    fn test_page_motions() {
        assert_eq!(
            Command::decode(Key::Ctrl('f')),
            Some(Command::Motion(Motion::PageDown))
        );
        assert_eq!(
            Command::decode(Key::Ctrl('b')),
            Some(Command::Motion(Motion::PageUp))
        );
    }
}
