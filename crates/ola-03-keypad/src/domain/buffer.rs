//! Incremental keypad entry.

use crate::domain::command::KeypadCommand;
use crate::domain::grammar::{self, AT, FULL, THRU};
use crate::error::KeypadError;

/// One keypad button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypadKey {
    /// An ASCII digit.
    Digit(char),
    Thru,
    At,
    Full,
    Backspace,
}

impl KeypadKey {
    /// Keyboard shortcut for a key: digits, `t`/`>` for THRU, `a`/`@` for
    /// the level marker and `f` for FULL.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Some(KeypadKey::Digit(c)),
            't' | '>' => Some(KeypadKey::Thru),
            'a' | '@' => Some(KeypadKey::At),
            'f' => Some(KeypadKey::Full),
            _ => None,
        }
    }

    fn append_to(self, field: &mut String) {
        match self {
            KeypadKey::Digit(c) => field.push(c),
            KeypadKey::Thru => {
                field.push(' ');
                field.push_str(THRU);
                field.push(' ');
            }
            KeypadKey::At => {
                field.push(' ');
                field.push_str(AT);
                field.push(' ');
            }
            KeypadKey::Full => field.push_str(FULL),
            KeypadKey::Backspace => {
                field.pop();
            }
        }
    }
}

/// What a key press did to the field.
#[derive(Debug)]
pub enum Edit {
    /// The field now holds the longest grammatical prefix of the new text.
    Accepted,
    /// The new text did not start with a channel; the field was emptied.
    Cleared,
    /// The new text parsed but a number was out of range; the field is
    /// unchanged.
    Rejected(KeypadError),
}

/// The entry field of the keypad.
///
/// The field always holds either nothing or a grammatical prefix whose
/// numbers are in range.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeypadBuffer {
    field: String,
}

impl KeypadBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.field
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.field.is_empty()
    }

    pub fn clear(&mut self) {
        self.field.clear();
    }

    /// Apply one key press.
    pub fn push(&mut self, key: KeypadKey) -> Edit {
        if let KeypadKey::Digit(c) = key {
            if !c.is_ascii_digit() {
                return Edit::Rejected(KeypadError::Syntax(c.to_string()));
            }
        }

        let mut candidate = self.field.clone();
        key.append_to(&mut candidate);

        let Some(found) = grammar::match_prefix(&candidate) else {
            self.field.clear();
            return Edit::Cleared;
        };
        if let Err(err) = found.check() {
            return Edit::Rejected(err);
        }

        candidate.truncate(found.len);
        self.field = candidate;
        Edit::Accepted
    }

    /// Parse the field as a complete command.
    pub fn command(&self) -> Result<KeypadCommand, KeypadError> {
        KeypadCommand::parse(&self.field)
    }
}
