//! Adapters layer.

mod server;
