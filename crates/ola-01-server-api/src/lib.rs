//! # OLA-01 Server API
//!
//! Typed async client for the web server embedded in the OLA daemon.
//!
//! ## Endpoints
//!
//! | Call | Request |
//! |------|---------|
//! | [`OlaClient::get_dmx`] | `GET /get_dmx?u={id}` |
//! | [`OlaClient::set_dmx`] | `POST /set_dmx` (`u`, `d`) |
//! | [`OlaClient::server_stats`] | `GET /json/server_stats` |
//! | [`OlaClient::universe_plugin_list`] | `GET /json/universe_plugin_list` |
//! | [`OlaClient::universe_info`] | `GET /json/universe_info?id={id}` |
//! | [`OlaClient::plugin_info`] | `GET /json/plugin_info?id={id}` |
//! | [`OlaClient::set_plugin_state`] | `POST /set_plugin_state` |
//! | [`OlaClient::reload`] | `GET /reload` |
//! | [`OlaClient::shutdown`] | `GET /quit` |
//!
//! ## Usage
//!
//! ```ignore
//! use ola_01_server_api::{ServerConfig, ServerContext};
//! use shared_types::UniverseId;
//!
//! let context = ServerContext::new(ServerConfig::from_env())?;
//! let snapshot = context.client().get_dmx(&UniverseId::from(1)).await?;
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod client;
pub mod codec;
pub mod config;
pub mod context;
pub mod error;
pub mod types;

pub use client::OlaClient;
pub use codec::{decode_snapshot, encode_dmx};
pub use config::{ServerConfig, DEFAULT_HTTP_TIMEOUT, DEFAULT_SERVER_URL};
pub use context::ServerContext;
pub use error::ApiError;
pub use types::*;
