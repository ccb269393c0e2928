//! Error types for the channel poller.

use thiserror::Error;

/// Errors returned to callers of [`crate::ChannelPoller`].
///
/// Per-tick fetch failures are not here: they never reach the caller (see
/// [`crate::FetchError`]).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PollerError {
    #[error("Channel index {index} out of range (0..{len})")]
    ChannelOutOfRange { index: usize, len: usize },

    #[error("Invalid poller configuration: {0}")]
    InvalidConfig(String),

    #[error("Poller started outside a tokio runtime")]
    NoRuntime,
}

impl From<shared_types::ChannelError> for PollerError {
    fn from(err: shared_types::ChannelError) -> Self {
        match err {
            shared_types::ChannelError::OutOfRange { index, len } => {
                PollerError::ChannelOutOfRange { index, len }
            }
        }
    }
}
