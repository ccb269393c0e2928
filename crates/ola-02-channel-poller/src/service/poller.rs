//! Channel poller service.
//!
//! One timer task per generation issues a fetch every period; each fetch
//! runs in its own task so a slow server never delays the next tick. All
//! merges, and `stop()`, go through one mutex: once `stop()` has released
//! it, no continuation can touch the channel array again.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use shared_bus::{EventPublisher, PollerEvent};
use shared_types::{ChannelArray, DisplayClass, UniverseId};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info, trace};

use crate::domain::{Completion, PollStats, PollerConfig, PollerState, RequestTag, ResponseOrdering};
use crate::error::PollerError;
use crate::ports::{ChannelMonitor, DmxSource};

type SharedPublisher = Option<Arc<dyn EventPublisher>>;

struct Shared {
    state: PollerState,
    timer: Option<JoinHandle<()>>,
}

/// Polls one universe and keeps its 512 channels current.
///
/// Dropping the poller stops it.
pub struct ChannelPoller<S: DmxSource> {
    source: Arc<S>,
    config: PollerConfig,
    publisher: SharedPublisher,
    shared: Arc<Mutex<Shared>>,
}

impl<S: DmxSource> ChannelPoller<S> {
    /// Create a stopped poller.
    pub fn new(source: S, config: PollerConfig) -> Result<Self, PollerError> {
        config.validate()?;
        Ok(Self {
            source: Arc::new(source),
            config,
            publisher: None,
            shared: Arc::new(Mutex::new(Shared {
                state: PollerState::new(),
                timer: None,
            })),
        })
    }

    /// Publish lifecycle and per-tick events to `publisher`.
    #[must_use]
    pub fn with_publisher(mut self, publisher: Arc<dyn EventPublisher>) -> Self {
        self.publisher = Some(publisher);
        self
    }

    #[must_use]
    pub fn config(&self) -> &PollerConfig {
        &self.config
    }

    /// Current generation; bumped by every `start` and effective `stop`.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.shared.lock().state.generation()
    }
}

impl<S: DmxSource> ChannelMonitor for ChannelPoller<S> {
    fn start(&self, universe: UniverseId) -> Result<(), PollerError> {
        let runtime = Handle::try_current().map_err(|_| PollerError::NoRuntime)?;

        let mut shared = self.shared.lock();
        if let Some(timer) = shared.timer.take() {
            timer.abort();
        }
        // Retargeting ends the previous universe for its subscribers.
        if shared.state.is_running() {
            if let Some(previous) = shared.state.universe().cloned() {
                info!(universe = %previous, "Channel poller leaving universe");
                publish(&self.publisher, PollerEvent::Stopped { universe: previous });
            }
        }
        let generation = shared.state.begin(universe.clone());

        info!(
            universe = %universe,
            generation,
            period_ms = self.config.period.as_millis() as u64,
            "Channel poller started"
        );
        publish(
            &self.publisher,
            PollerEvent::Started {
                universe: universe.clone(),
                generation,
            },
        );

        let task = PollTask {
            source: Arc::clone(&self.source),
            shared: Arc::clone(&self.shared),
            publisher: self.publisher.clone(),
            universe,
            generation,
            period: self.config.period,
            ordering: self.config.ordering,
        };
        shared.timer = Some(runtime.spawn(task.run()));
        Ok(())
    }

    fn stop(&self) {
        let mut shared = self.shared.lock();
        if let Some(timer) = shared.timer.take() {
            timer.abort();
        }
        if !shared.state.end() {
            return;
        }
        if let Some(universe) = shared.state.universe().cloned() {
            info!(universe = %universe, stats = ?shared.state.stats(), "Channel poller stopped");
            publish(&self.publisher, PollerEvent::Stopped { universe });
        }
    }

    fn channel_value(&self, index: usize) -> Result<u8, PollerError> {
        Ok(self.shared.lock().state.channels().get(index)?)
    }

    fn display_class(&self, index: usize) -> Result<DisplayClass, PollerError> {
        let value = self.channel_value(index)?;
        Ok(DisplayClass::classify(value, self.config.display_threshold))
    }

    fn channels(&self) -> ChannelArray {
        self.shared.lock().state.channels().clone()
    }

    fn universe(&self) -> Option<UniverseId> {
        self.shared.lock().state.universe().cloned()
    }

    fn is_running(&self) -> bool {
        self.shared.lock().state.is_running()
    }

    fn stats(&self) -> PollStats {
        self.shared.lock().state.stats().clone()
    }
}

impl<S: DmxSource> Drop for ChannelPoller<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Timer of one generation.
struct PollTask<S: DmxSource> {
    source: Arc<S>,
    shared: Arc<Mutex<Shared>>,
    publisher: SharedPublisher,
    universe: UniverseId,
    generation: u64,
    period: Duration,
    ordering: ResponseOrdering,
}

impl<S: DmxSource> PollTask<S> {
    async fn run(self) {
        // First fetch one period after start, like a plain repeating timer.
        let mut interval = time::interval_at(Instant::now() + self.period, self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let task = Arc::new(self);

        loop {
            interval.tick().await;

            let tag = task.shared.lock().state.issue(task.generation);
            let Some(tag) = tag else {
                trace!(generation = task.generation, "Timer outlived its generation");
                break;
            };

            trace!(universe = %task.universe, sequence = tag.sequence, "Fetch issued");
            tokio::spawn(Arc::clone(&task).fetch(tag));
        }
    }

    async fn fetch(self: Arc<Self>, tag: RequestTag) {
        let outcome = self.source.fetch_snapshot(&self.universe).await;

        let mut shared = self.shared.lock();
        match shared.state.complete(tag, outcome, self.ordering) {
            Completion::Applied { non_zero } => {
                debug!(universe = %self.universe, sequence = tag.sequence, non_zero, "Snapshot applied");
                publish(
                    &self.publisher,
                    PollerEvent::SnapshotApplied {
                        universe: self.universe.clone(),
                        generation: tag.generation,
                        non_zero,
                    },
                );
            }
            Completion::Failed { reason } => {
                debug!(universe = %self.universe, sequence = tag.sequence, %reason, "Fetch failed");
                publish(
                    &self.publisher,
                    PollerEvent::FetchFailed {
                        universe: self.universe.clone(),
                        generation: tag.generation,
                        reason,
                    },
                );
            }
            Completion::Discarded(why) => {
                debug!(
                    universe = %self.universe,
                    generation = tag.generation,
                    sequence = tag.sequence,
                    reason = ?why,
                    "Response discarded"
                );
            }
        }
    }
}

fn publish(publisher: &SharedPublisher, event: PollerEvent) {
    if let Some(publisher) = publisher {
        publisher.publish(event);
    }
}
