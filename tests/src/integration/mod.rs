//! Cross-crate integration tests.

mod keypad_flow;
mod poller_flow;
mod server_api;
