//! # OLA-03 Keypad
//!
//! Console-style channel entry: `1 THRU 5 @ FULL`, `42 @ 128`.
//!
//! - `KeypadBuffer` models the entry field key by key and never holds text
//!   that could not become a command.
//! - `KeypadCommand` is a parsed, validated command that can be applied to
//!   a `ChannelArray`.
//! - `KeypadService` fetches the universe's current frame, applies a
//!   command and sends the frame back through a `UniverseGateway`
//!   (implemented for `ola_01_server_api::ServerContext`).

#![cfg_attr(test, allow(clippy::unwrap_used))]

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use domain::{Edit, KeypadBuffer, KeypadCommand, KeypadKey};
pub use error::KeypadError;
pub use ports::UniverseGateway;
pub use service::KeypadService;
