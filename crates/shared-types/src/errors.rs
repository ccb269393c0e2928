//! # Error Types
//!
//! Defines error types used across crates.

use thiserror::Error;

/// Errors from indexing into a `ChannelArray`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChannelError {
    /// Index outside the 0-based channel range.
    #[error("Channel index {index} out of range (0..{len})")]
    OutOfRange { index: usize, len: usize },
}
