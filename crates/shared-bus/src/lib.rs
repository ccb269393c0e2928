//! # Shared Bus - Poller Event Bus
//!
//! Replaces a global UI event bus with explicit subscription handles.
//!
//! ## Contract
//!
//! - `subscribe()` returns a `Subscription` that only sees events published
//!   after it was created.
//! - `Subscription::unsubscribe()` (or dropping the handle) releases the
//!   receiver. No event published afterwards is ever delivered to it.
//! - Publishing never blocks. A slow subscriber lags and skips events rather
//!   than holding up the poller.
//!
//! ```text
//! ┌──────────────┐                    ┌──────────────┐
//! │ Poller       │                    │ View         │
//! │              │    publish()       │              │
//! │              │ ──────┐            │              │
//! └──────────────┘       │            └──────────────┘
//!                        ▼                    ↑
//!                  ┌──────────────┐          │
//!                  │  Event Bus   │          │
//!                  │              │ ─────────┘
//!                  └──────────────┘  subscribe()
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod events;
pub mod publisher;
pub mod subscriber;

// Re-export main types
pub use events::{EventFilter, EventTopic, PollerEvent};
pub use publisher::{EventPublisher, InMemoryEventBus};
pub use subscriber::{EventStream, Subscription, SubscriptionError};

/// Maximum events to buffer per subscriber before it starts lagging.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;
