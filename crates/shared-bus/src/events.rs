//! # Poller Events
//!
//! Events published by channel pollers, and the filters views use to pick
//! the ones they care about.

use serde::{Deserialize, Serialize};
use shared_types::UniverseId;

/// Events emitted over the bus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PollerEvent {
    /// A poller began observing a universe.
    Started {
        universe: UniverseId,
        generation: u64,
    },

    /// A snapshot was merged into the channel array.
    SnapshotApplied {
        universe: UniverseId,
        generation: u64,
        /// Channels above zero after the merge.
        non_zero: usize,
    },

    /// A tick's fetch failed; the channel array was left untouched.
    FetchFailed {
        universe: UniverseId,
        generation: u64,
        reason: String,
    },

    /// A poller stopped observing a universe.
    Stopped { universe: UniverseId },
}

impl PollerEvent {
    /// Get the topic for this event.
    #[must_use]
    pub fn topic(&self) -> EventTopic {
        match self {
            PollerEvent::Started { .. } | PollerEvent::Stopped { .. } => EventTopic::Lifecycle,
            PollerEvent::SnapshotApplied { .. } => EventTopic::Channels,
            PollerEvent::FetchFailed { .. } => EventTopic::Errors,
        }
    }

    /// The universe this event concerns.
    #[must_use]
    pub fn universe(&self) -> &UniverseId {
        match self {
            PollerEvent::Started { universe, .. }
            | PollerEvent::SnapshotApplied { universe, .. }
            | PollerEvent::FetchFailed { universe, .. }
            | PollerEvent::Stopped { universe } => universe,
        }
    }
}

/// Event topics for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventTopic {
    /// Start/stop notifications.
    Lifecycle,
    /// Channel data updates.
    Channels,
    /// Per-tick fetch failures.
    Errors,
    /// All events (no filtering).
    All,
}

/// Filter for subscribing to specific events.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Topics to include. Empty means all topics.
    pub topics: Vec<EventTopic>,
    /// Universes to include. Empty means all universes.
    pub universes: Vec<UniverseId>,
}

impl EventFilter {
    /// Create a filter that accepts all events.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Create a filter for specific topics.
    #[must_use]
    pub fn topics(topics: Vec<EventTopic>) -> Self {
        Self {
            topics,
            universes: Vec::new(),
        }
    }

    /// Create a filter for events about one universe.
    #[must_use]
    pub fn universe(universe: UniverseId) -> Self {
        Self {
            topics: Vec::new(),
            universes: vec![universe],
        }
    }

    /// Check if an event matches this filter.
    #[must_use]
    pub fn matches(&self, event: &PollerEvent) -> bool {
        let topic_match = self.topics.is_empty()
            || self.topics.contains(&EventTopic::All)
            || self.topics.contains(&event.topic());

        let universe_match =
            self.universes.is_empty() || self.universes.contains(event.universe());

        topic_match && universe_match
    }
}
