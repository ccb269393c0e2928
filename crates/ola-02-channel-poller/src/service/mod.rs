//! Service layer: the poller that drives the state machine from tokio tasks.

pub mod poller;

pub use poller::ChannelPoller;
