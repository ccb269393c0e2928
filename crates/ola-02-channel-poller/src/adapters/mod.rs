//! Adapters layer: concrete implementations of the outbound ports.

pub mod http_source;

pub use http_source::HttpDmxSource;
