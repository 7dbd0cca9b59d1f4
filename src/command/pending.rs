//! Pending Normal-mode input: count digits and armed prefixes.

use crate::buffer::Position;

/// State accumulated between keys in Normal mode.
///
/// A count is collected digit by digit; arming keys (`d`, `f`, `g`)
/// record what the next key should complete. The count survives arming
/// so that sequences like `2dd` and `5gg` see their full count. Escape
/// clears everything.
#[derive(Debug, Clone, Default)]
pub struct Pending {
    /// Count digits typed so far.
    count: String,
    /// First key of a two-key sequence (`g`).
    pub prefix: Option<char>,
    /// A `d` is waiting for its motion; holds the cursor origin.
    pub armed_delete: Option<Position>,
    /// An `f` is waiting for its target character.
    pub armed_find: bool,
}

impl Pending {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a count digit. A leading `0` is not a digit (it is the
    /// line-start motion), so the caller must only pass `0` when a
    /// count is already underway.
    pub fn push_digit(&mut self, digit: char) {
        debug_assert!(digit.is_ascii_digit());
        self.count.push(digit);
    }

    /// True when count digits have been typed.
    pub fn has_count(&self) -> bool {
        !self.count.is_empty()
    }

    /// The accumulated count, or `None` when no digits were typed.
    pub fn count(&self) -> Option<usize> {
        self.count.parse().ok()
    }

    /// Take the count (defaulting to 1) and reset the digits.
    pub fn take_count(&mut self) -> usize {
        let count = self.count();
        self.count.clear();
        count.unwrap_or(1)
    }

    /// Discard all pending state.
    pub fn clear(&mut self) {
        self.count.clear();
        self.prefix = None;
        self.armed_delete = None;
        self.armed_find = false;
    }
}
