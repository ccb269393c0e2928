//! Keypad grammar.
//!
//! ```text
//! <ch> [THRU [<ch>]] [@ [<value>|FULL]]
//! ```
//!
//! Numbers are 1 to 3 digits; keywords are case-sensitive and surrounded by
//! single whitespace characters. Matching is by longest prefix: anything
//! after the last complete group is ignored, which is what lets the
//! buffer drop keystrokes that would not fit the grammar.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::KeypadError;
use shared_types::{MAX_CHANNEL_NUMBER, MAX_CHANNEL_VALUE, MIN_CHANNEL_NUMBER};

pub const THRU: &str = "THRU";
pub const AT: &str = "@";
pub const FULL: &str = "FULL";

/// Groups captured from the longest grammatical prefix of an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixMatch<'a> {
    /// Bytes of input covered by the match.
    pub len: usize,
    pub begin: &'a str,
    pub thru: bool,
    pub end: Option<&'a str>,
    pub at: bool,
    /// Digits or `FULL`.
    pub level: Option<&'a str>,
}

impl PrefixMatch<'_> {
    /// Range-check every number present.
    pub fn check(&self) -> Result<(), KeypadError> {
        check_channel(self.begin)?;
        if let Some(end) = self.end {
            check_channel(end)?;
        }
        match self.level {
            Some(FULL) | None => Ok(()),
            Some(level) => {
                let value = number(level)?;
                if value > u32::from(MAX_CHANNEL_VALUE) {
                    return Err(KeypadError::ValueOutOfRange { value });
                }
                Ok(())
            }
        }
    }
}

/// Anchored at the start, every group after the first channel optional.
const PATTERN: &str =
    r"^(?:([0-9]{1,3})(?:\s(THRU)\s(?:([0-9]{1,3}))?)?(?:\s(@)\s(?:([0-9]{1,3}|FULL))?)?)";

static GRAMMAR: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| Regex::new(PATTERN));

/// Match the longest prefix of `input` that fits the grammar.
///
/// `None` when the input does not start with a channel number.
pub fn match_prefix(input: &str) -> Option<PrefixMatch<'_>> {
    let grammar = GRAMMAR.as_ref().ok()?;
    let caps = grammar.captures(input)?;
    let begin = caps.get(1)?.as_str();

    Some(PrefixMatch {
        len: caps.get(0)?.end(),
        begin,
        thru: caps.get(2).is_some(),
        end: caps.get(3).map(|m| m.as_str()),
        at: caps.get(4).is_some(),
        level: caps.get(5).map(|m| m.as_str()),
    })
}

pub(crate) fn number(digits: &str) -> Result<u32, KeypadError> {
    digits
        .parse()
        .map_err(|_| KeypadError::Syntax(digits.to_string()))
}

fn check_channel(digits: &str) -> Result<u32, KeypadError> {
    let channel = number(digits)?;
    if !(u32::from(MIN_CHANNEL_NUMBER)..=u32::from(MAX_CHANNEL_NUMBER)).contains(&channel) {
        return Err(KeypadError::ChannelOutOfRange { channel });
    }
    Ok(channel)
}
