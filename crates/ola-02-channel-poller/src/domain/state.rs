//! Poller state machine.
//!
//! Pure bookkeeping: which universe is observed, the current generation,
//! the channel array and the decision whether a landed response may be
//! merged. The service wraps one `PollerState` in a mutex and drives it from
//! timer and fetch tasks.

use shared_types::{ChannelArray, Snapshot, UniverseId};

use crate::domain::{PollStats, ResponseOrdering};
use crate::ports::FetchError;

/// Identifies one issued fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTag {
    /// Generation current when the request was issued.
    pub generation: u64,
    /// Issue order within the generation, starting at 0.
    pub sequence: u64,
}

/// Why a landed response was not merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardReason {
    /// Issued before the latest `start`/`stop`.
    StaleGeneration,
    /// Older than the last merged response (request ordering only).
    OutOfOrder,
}

/// What happened to a landed response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Applied { non_zero: usize },
    Failed { reason: String },
    Discarded(DiscardReason),
}

/// State of one poller.
#[derive(Debug, Default)]
pub struct PollerState {
    universe: Option<UniverseId>,
    channels: ChannelArray,
    generation: u64,
    running: bool,
    next_sequence: u64,
    last_applied: Option<u64>,
    stats: PollStats,
}

impl PollerState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin observing `universe` with a fresh zeroed array.
    ///
    /// Returns the new generation.
    pub fn begin(&mut self, universe: UniverseId) -> u64 {
        self.generation += 1;
        self.universe = Some(universe);
        self.channels = ChannelArray::new();
        self.running = true;
        self.next_sequence = 0;
        self.last_applied = None;
        self.generation
    }

    /// Stop observing. Returns `false` if the poller was already stopped.
    ///
    /// The generation is bumped so any response still in flight is
    /// discarded when it lands.
    pub fn end(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        self.generation += 1;
        true
    }

    /// Tag a new fetch for `generation`.
    ///
    /// `None` when that generation is no longer current, which tells a
    /// leftover timer to quit.
    pub fn issue(&mut self, generation: u64) -> Option<RequestTag> {
        if !self.running || generation != self.generation {
            return None;
        }
        let tag = RequestTag {
            generation,
            sequence: self.next_sequence,
        };
        self.next_sequence += 1;
        self.stats.ticks += 1;
        Some(tag)
    }

    /// Settle a landed response.
    ///
    /// On success every channel is overwritten (missing ones become 0). On
    /// failure the array is untouched.
    pub fn complete(
        &mut self,
        tag: RequestTag,
        outcome: Result<Snapshot, FetchError>,
        ordering: ResponseOrdering,
    ) -> Completion {
        if !self.running || tag.generation != self.generation {
            self.stats.discarded += 1;
            return Completion::Discarded(DiscardReason::StaleGeneration);
        }

        let snapshot = match outcome {
            Ok(snapshot) => snapshot,
            Err(err) => {
                let reason = err.to_string();
                self.stats.failed += 1;
                self.stats.last_error = Some(reason.clone());
                return Completion::Failed { reason };
            }
        };

        if ordering == ResponseOrdering::RequestOrder
            && self.last_applied.is_some_and(|last| tag.sequence < last)
        {
            self.stats.discarded += 1;
            return Completion::Discarded(DiscardReason::OutOfOrder);
        }

        self.channels.apply_snapshot(&snapshot);
        self.last_applied = Some(tag.sequence);
        self.stats.applied += 1;
        self.stats.last_error = None;
        Completion::Applied {
            non_zero: self.channels.non_zero_count(),
        }
    }

    #[must_use]
    pub fn channels(&self) -> &ChannelArray {
        &self.channels
    }

    #[must_use]
    pub fn universe(&self) -> Option<&UniverseId> {
        self.universe.as_ref()
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn stats(&self) -> &PollStats {
        &self.stats
    }
}
