//! # OLA-02 Channel Poller
//!
//! Keeps a 512-entry channel array current for one universe by polling the
//! server on a fixed period, and classifies each channel for rendering.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): `PollerConfig`, `PollStats` and the
//!   `PollerState` machine that decides whether a response may be merged
//! - **Ports Layer** (`ports/`)
//!   - `ChannelMonitor`: Driving port used by views
//!   - `DmxSource`: Driven port that fetches snapshots
//! - **Service Layer** (`service/`): `ChannelPoller`, the tokio-driven
//!   implementation of `ChannelMonitor`
//! - **Adapters Layer** (`adapters/`): `HttpDmxSource` over `ola-01-server-api`
//!
//! ## Invariants
//!
//! - A successful fetch overwrites every channel; channels missing from the
//!   snapshot become 0.
//! - A failed fetch leaves the array exactly as it was. The next tick is the
//!   only retry.
//! - Every request is tagged with the generation it was issued in. `start`
//!   and `stop` bump the generation, so nothing issued earlier can land
//!   after them.
//!
//! ## Usage
//!
//! ```ignore
//! use ola_01_server_api::{ServerConfig, ServerContext};
//! use ola_02_channel_poller::{ChannelMonitor, ChannelPoller, HttpDmxSource, PollerConfig};
//!
//! let context = ServerContext::new(ServerConfig::from_env())?;
//! let poller = ChannelPoller::new(HttpDmxSource::new(context), PollerConfig::default())?;
//! poller.start("1".into())?;
//! let class = poller.display_class(0)?;
//! poller.stop();
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use adapters::HttpDmxSource;
pub use domain::{
    PollStats, PollerConfig, ResponseOrdering, DEFAULT_DISPLAY_THRESHOLD, DEFAULT_POLL_PERIOD,
};
pub use error::PollerError;
pub use ports::{ChannelMonitor, DmxSource, FetchError};
pub use service::ChannelPoller;
