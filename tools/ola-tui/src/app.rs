//! Application state management.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::KeyCode;
use ola_01_server_api::{PluginSummary, ServerContext, ServerStats, UniverseSummary};
use ola_02_channel_poller::{
    ChannelMonitor, ChannelPoller, HttpDmxSource, PollStats, PollerConfig, PollerError,
};
use ola_03_keypad::{Edit, KeypadBuffer, KeypadKey, KeypadService};
use shared_bus::{EventFilter, InMemoryEventBus, PollerEvent, Subscription, SubscriptionError};
use shared_types::{ChannelArray, DisplayClass, UniverseId};
use tracing::{debug, warn};

/// Maximum number of events to keep in history.
const MAX_EVENTS: usize = 50;

/// Active view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Server stats, universes and plugins.
    Overview,
    /// Live channel grid of one universe, with keypad.
    Channels,
}

/// A poller event as shown in the channel view.
#[derive(Debug, Clone)]
pub struct LiveEvent {
    /// Timestamp when event was received.
    pub timestamp: Instant,
    /// Event type string.
    pub event_type: &'static str,
    /// Event description.
    pub description: String,
}

/// Application state.
pub struct App {
    context: ServerContext,
    poller: ChannelPoller<HttpDmxSource>,
    keypad: KeypadService<ServerContext>,
    bus: Arc<InMemoryEventBus>,
    subscription: Option<Subscription>,

    /// Current view.
    pub view: View,

    // === Overview Data ===
    pub server_stats: Option<ServerStats>,
    pub universes: Vec<UniverseSummary>,
    pub plugins: Vec<PluginSummary>,
    /// Selected row of the universe list.
    pub selected: usize,
    /// Whether the last overview refresh reached the server.
    pub connected: bool,
    pub last_error: Option<String>,
    pub last_refresh: Instant,

    // === Channel View Data ===
    pub keypad_buffer: KeypadBuffer,
    /// Outcome of the last keypad action.
    pub keypad_status: Option<String>,
    pub live_events: VecDeque<LiveEvent>,

    /// Whether the app should quit.
    pub should_quit: bool,
    pub start_time: Instant,
}

impl App {
    /// Create a new application instance.
    pub fn new(context: ServerContext, poller_config: PollerConfig) -> Result<Self, PollerError> {
        let bus = Arc::new(InMemoryEventBus::new());
        let poller = ChannelPoller::new(HttpDmxSource::new(context.clone()), poller_config)?
            .with_publisher(bus.clone());

        Ok(Self {
            keypad: KeypadService::new(context.clone()),
            context,
            poller,
            bus,
            subscription: None,
            view: View::Overview,
            server_stats: None,
            universes: Vec::new(),
            plugins: Vec::new(),
            selected: 0,
            connected: false,
            last_error: None,
            last_refresh: Instant::now(),
            keypad_buffer: KeypadBuffer::new(),
            keypad_status: None,
            live_events: VecDeque::with_capacity(MAX_EVENTS),
            should_quit: false,
            start_time: Instant::now(),
        })
    }

    pub fn server_url(&self) -> &str {
        &self.context.config().base_url
    }

    /// Refresh the overview from the server.
    pub async fn refresh(&mut self) {
        let client = self.context.client();
        let (stats_result, list_result) =
            tokio::join!(client.server_stats(), client.universe_plugin_list());

        match stats_result {
            Ok(stats) => {
                self.server_stats = Some(stats);
                self.connected = true;
                self.last_error = None;
            }
            Err(e) => {
                debug!(error = %e, "Server stats unavailable");
                self.connected = false;
                self.last_error = Some(format!("Connection: {}", e));
            }
        }

        match list_result {
            Ok(list) => {
                self.universes = list.universes;
                self.plugins = list.plugins;
            }
            Err(e) => {
                if self.last_error.is_none() {
                    self.last_error = Some(format!("Universe list: {}", e));
                }
            }
        }
        self.selected = self.selected.min(self.universes.len().saturating_sub(1));

        self.last_refresh = Instant::now();
    }

    /// Start polling `universe` and switch to the channel view.
    pub fn open_channels(&mut self, universe: UniverseId) -> Result<()> {
        if let Some(previous) = self.subscription.take() {
            previous.unsubscribe();
        }
        // Subscribe first so the Started event is seen.
        self.subscription = Some(self.bus.subscribe(EventFilter::universe(universe.clone())));
        self.poller.start(universe)?;

        self.view = View::Channels;
        self.keypad_buffer.clear();
        self.keypad_status = None;
        self.live_events.clear();
        Ok(())
    }

    /// Stop polling and go back to the overview.
    pub fn close_channels(&mut self) {
        self.poller.stop();
        self.drain_events();
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
        self.view = View::Overview;
    }

    /// Move pending poller events into the event log.
    pub fn drain_events(&mut self) {
        let Some(subscription) = self.subscription.as_mut() else {
            return;
        };

        let mut received = Vec::new();
        loop {
            match subscription.try_recv() {
                Ok(Some(event)) => received.push(event),
                Ok(None) => break,
                Err(SubscriptionError::Closed) => {
                    warn!("Event bus closed");
                    self.subscription = None;
                    break;
                }
            }
        }

        for event in received {
            self.record_event(event);
        }
    }

    fn record_event(&mut self, event: PollerEvent) {
        let (event_type, description) = match event {
            PollerEvent::Started {
                universe,
                generation,
            } => (
                "start",
                format!("Polling universe {} (generation {})", universe, generation),
            ),
            // Arrives every tick; the grid already shows it.
            PollerEvent::SnapshotApplied { .. } => return,
            PollerEvent::FetchFailed { reason, .. } => ("error", reason),
            PollerEvent::Stopped { universe } => ("stop", format!("Stopped universe {}", universe)),
        };

        // Collapse repeats (a dead server fails every tick).
        if let Some(last) = self.live_events.front() {
            if last.event_type == event_type && last.description == description {
                return;
            }
        }

        self.live_events.push_front(LiveEvent {
            timestamp: Instant::now(),
            event_type,
            description,
        });
        if self.live_events.len() > MAX_EVENTS {
            self.live_events.pop_back();
        }
    }

    /// Send the keypad command to the observed universe.
    pub async fn submit_keypad(&mut self) {
        let command = match self.keypad_buffer.command() {
            Ok(command) => command,
            Err(e) => {
                self.keypad_status = Some(e.to_string());
                return;
            }
        };
        let Some(universe) = self.poller.universe() else {
            self.keypad_status = Some("No universe selected".to_string());
            return;
        };

        match self.keypad.submit(&universe, &command).await {
            Ok(_) => {
                self.keypad_status = Some(format!("Sent {}", command));
                self.keypad_buffer.clear();
            }
            Err(e) => {
                self.keypad_status = Some(e.to_string());
            }
        }
    }

    /// Handle key press events.
    pub fn on_key(&mut self, key: KeyCode) -> Result<()> {
        match self.view {
            View::Overview => match key {
                KeyCode::Up | KeyCode::Char('k') => {
                    self.selected = self.selected.saturating_sub(1);
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    let max = self.universes.len().saturating_sub(1);
                    if self.selected < max {
                        self.selected += 1;
                    }
                }
                KeyCode::Enter => {
                    if let Some(universe) = self.selected_universe() {
                        let id = UniverseId::from(universe.id);
                        self.open_channels(id)?;
                    }
                }
                _ => {}
            },
            View::Channels => match key {
                KeyCode::Esc => self.close_channels(),
                KeyCode::Backspace => self.press(KeypadKey::Backspace),
                KeyCode::Char(c) => {
                    if let Some(key) = KeypadKey::from_char(c) {
                        self.press(key);
                    }
                }
                _ => {}
            },
        }
        Ok(())
    }

    fn press(&mut self, key: KeypadKey) {
        self.keypad_status = match self.keypad_buffer.push(key) {
            Edit::Accepted | Edit::Cleared => None,
            Edit::Rejected(e) => Some(e.to_string()),
        };
    }

    pub fn selected_universe(&self) -> Option<&UniverseSummary> {
        self.universes.get(self.selected)
    }

    /// Universe shown in the channel view.
    pub fn universe(&self) -> Option<UniverseId> {
        self.poller.universe()
    }

    /// Level and class of every channel, in channel order.
    ///
    /// Both come from one copy of the array, so a merge landing mid-frame
    /// cannot pair one snapshot's level with another's style.
    pub fn channel_cells(&self) -> Vec<(u8, DisplayClass)> {
        classify_cells(&self.poller.channels(), self.poller.config().display_threshold)
    }

    pub fn poll_stats(&self) -> PollStats {
        self.poller.stats()
    }

    pub fn is_polling(&self) -> bool {
        self.poller.is_running()
    }

    pub fn poll_period(&self) -> Duration {
        self.poller.config().period
    }

    /// Format uptime as human-readable string.
    pub fn uptime_str(&self) -> String {
        let secs = self.start_time.elapsed().as_secs();

        let hours = secs / 3600;
        let mins = (secs % 3600) / 60;

        if hours > 0 {
            format!("{}h {}m", hours, mins)
        } else {
            format!("{}m {}s", mins, secs % 60)
        }
    }

    #[cfg(test)]
    pub(crate) fn subscriber_count(&self) -> usize {
        self.bus.subscriber_count()
    }
}

fn classify_cells(channels: &ChannelArray, threshold: u8) -> Vec<(u8, DisplayClass)> {
    channels
        .iter()
        .map(|value| (value, DisplayClass::classify(value, threshold)))
        .collect()
}
