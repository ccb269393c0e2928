//! A complete keypad command.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use shared_types::{ChannelArray, MAX_CHANNEL_NUMBER, MAX_CHANNEL_VALUE, MIN_CHANNEL_NUMBER};

use crate::domain::grammar::{self, FULL};
use crate::error::KeypadError;

/// Set channels `begin..=end` (1-based) to `level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeypadCommand {
    pub begin: u16,
    pub end: u16,
    pub level: u8,
}

impl KeypadCommand {
    /// Build a validated command.
    pub fn new(begin: u16, end: u16, level: u8) -> Result<Self, KeypadError> {
        let command = Self { begin, end, level };
        command.validate()?;
        Ok(command)
    }

    /// Parse a whole command such as `"1 THRU 5 @ FULL"` or `"7 @ 128"`.
    ///
    /// Without `THRU <ch>` the command covers a single channel. A level is
    /// required.
    pub fn parse(input: &str) -> Result<Self, KeypadError> {
        let found = grammar::match_prefix(input)
            .filter(|found| found.len == input.len())
            .ok_or_else(|| KeypadError::Syntax(input.to_string()))?;
        found.check()?;

        let begin = channel_number(found.begin)?;
        let end = match found.end {
            Some(end) => channel_number(end)?,
            None => begin,
        };
        let level = match found.level {
            None => return Err(KeypadError::MissingLevel),
            Some(FULL) => MAX_CHANNEL_VALUE,
            Some(digits) => u8::try_from(grammar::number(digits)?)
                .map_err(|_| KeypadError::Syntax(input.to_string()))?,
        };

        Self::new(begin, end, level)
    }

    /// Check channel bounds and that the range is not empty.
    pub fn validate(&self) -> Result<(), KeypadError> {
        for channel in [self.begin, self.end] {
            if !(MIN_CHANNEL_NUMBER..=MAX_CHANNEL_NUMBER).contains(&channel) {
                return Err(KeypadError::ChannelOutOfRange {
                    channel: u32::from(channel),
                });
            }
        }
        if self.begin > self.end {
            return Err(KeypadError::EmptyRange {
                begin: self.begin,
                end: self.end,
            });
        }
        Ok(())
    }

    /// 1-based channels the command touches.
    #[must_use]
    pub fn channels(&self) -> RangeInclusive<u16> {
        self.begin..=self.end
    }

    /// Set every channel in range to the level. Other channels are kept.
    pub fn apply(&self, channels: &mut ChannelArray) -> Result<(), KeypadError> {
        self.validate()?;
        for channel in self.channels() {
            channels
                .set(usize::from(channel - 1), self.level)
                .map_err(|_| KeypadError::ChannelOutOfRange {
                    channel: u32::from(channel),
                })?;
        }
        Ok(())
    }
}

impl FromStr for KeypadCommand {
    type Err = KeypadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for KeypadCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.begin)?;
        if self.end != self.begin {
            write!(f, " THRU {}", self.end)?;
        }
        if self.level == MAX_CHANNEL_VALUE {
            write!(f, " @ {FULL}")
        } else {
            write!(f, " @ {}", self.level)
        }
    }
}

fn channel_number(digits: &str) -> Result<u16, KeypadError> {
    let value = grammar::number(digits)?;
    u16::try_from(value).map_err(|_| KeypadError::ChannelOutOfRange { channel: value })
}
