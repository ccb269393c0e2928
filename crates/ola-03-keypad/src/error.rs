//! Error types for the keypad.

use ola_01_server_api::ApiError;
use thiserror::Error;

/// Errors from parsing, applying or submitting a keypad command.
#[derive(Debug, Error)]
pub enum KeypadError {
    #[error("Cannot parse keypad input: {0:?}")]
    Syntax(String),

    #[error("Channel {channel} out of range (1..=512)")]
    ChannelOutOfRange { channel: u32 },

    #[error("Level {value} out of range (0..=255)")]
    ValueOutOfRange { value: u32 },

    #[error("No level given (expected '@ <value>' or '@ FULL')")]
    MissingLevel,

    #[error("Empty channel range: {begin} THRU {end}")]
    EmptyRange { begin: u16, end: u16 },

    #[error("Server request failed: {0}")]
    Api(#[from] ApiError),
}
