//! Domain layer: configuration, statistics and the poller state machine.

pub mod config;
pub mod state;
pub mod stats;

pub use config::{PollerConfig, ResponseOrdering, DEFAULT_DISPLAY_THRESHOLD, DEFAULT_POLL_PERIOD};
pub use state::{Completion, DiscardReason, PollerState, RequestTag};
pub use stats::PollStats;
