//! Ports layer: trait seams of the poller.

pub mod inbound;
pub mod outbound;

pub use inbound::ChannelMonitor;
pub use outbound::{DmxSource, FetchError};
