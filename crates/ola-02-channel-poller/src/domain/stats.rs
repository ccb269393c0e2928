//! Poll statistics.

use serde::{Deserialize, Serialize};

/// Counters over the lifetime of a poller, across restarts.
///
/// This is the only place a failed fetch is visible: the poll loop never
/// raises it to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollStats {
    /// Fetches issued.
    pub ticks: u64,
    /// Snapshots merged into the channel array.
    pub applied: u64,
    /// Fetches that failed; the array was left as it was.
    pub failed: u64,
    /// Responses thrown away (stale generation or out of order).
    pub discarded: u64,
    /// Reason of the most recent failure. Cleared by the next merge.
    pub last_error: Option<String>,
}

impl PollStats {
    /// Fetches still waiting for a response.
    #[must_use]
    pub fn in_flight(&self) -> u64 {
        self.ticks
            .saturating_sub(self.applied + self.failed + self.discarded)
    }
}
