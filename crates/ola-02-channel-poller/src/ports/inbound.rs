//! Inbound Ports (Driving Ports)
//!
//! The API a view uses to observe a universe.

use shared_types::{ChannelArray, DisplayClass, UniverseId};

use crate::domain::PollStats;
use crate::error::PollerError;

/// Keeps one universe's channel array current (Driving Port).
pub trait ChannelMonitor: Send + Sync {
    /// Start polling `universe`, re-targeting the monitor if it is already
    /// running.
    fn start(&self, universe: UniverseId) -> Result<(), PollerError>;

    /// Stop polling. Idempotent. No channel changes after this returns.
    fn stop(&self);

    /// Current level of 0-based channel `index`.
    fn channel_value(&self, index: usize) -> Result<u8, PollerError>;

    /// Rendering class of 0-based channel `index`.
    fn display_class(&self, index: usize) -> Result<DisplayClass, PollerError>;

    /// Copy of the whole channel array.
    fn channels(&self) -> ChannelArray;

    /// Universe currently (or last) observed.
    fn universe(&self) -> Option<UniverseId>;

    fn is_running(&self) -> bool;

    fn stats(&self) -> PollStats;
}
