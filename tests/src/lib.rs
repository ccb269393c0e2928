//! # OLA Channel Monitor Test Suite
//!
//! Unified test crate for behavior that spans crates.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fake_server.rs    # In-process stand-in for olad's HTTP API
//! └── integration/
//!     ├── server_api.rs   # OlaClient against every endpoint
//!     ├── poller_flow.rs  # ChannelPoller + HttpDmxSource + shared-bus
//!     └── keypad_flow.rs  # Keypad entry to set_dmx
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p ola-tests
//! cargo test -p ola-tests integration::poller_flow
//! ```

pub mod fake_server;
pub mod integration;
