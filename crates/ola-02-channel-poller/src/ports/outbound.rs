//! Outbound Ports (Driven Ports)
//!
//! What the poller needs from the outside world: a way to fetch the current
//! levels of a universe.

use async_trait::async_trait;
use shared_types::{Snapshot, UniverseId};
use thiserror::Error;

/// The only failure the poll loop distinguishes.
///
/// Network errors, non-2xx responses and malformed bodies all collapse
/// into this; the loop skips the merge for that tick and carries on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Fetch failed: {0}")]
    FetchFailed(String),
}

/// Source of channel snapshots (Driven Port).
#[async_trait]
pub trait DmxSource: Send + Sync + 'static {
    /// Fetch the current snapshot of `universe`.
    ///
    /// The universe is passed through unvalidated; an unknown one is
    /// expected to come back as an error.
    async fn fetch_snapshot(&self, universe: &UniverseId) -> Result<Snapshot, FetchError>;
}

#[async_trait]
impl<T: DmxSource + ?Sized> DmxSource for std::sync::Arc<T> {
    async fn fetch_snapshot(&self, universe: &UniverseId) -> Result<Snapshot, FetchError> {
        (**self).fetch_snapshot(universe).await
    }
}
