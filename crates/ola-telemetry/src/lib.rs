//! # OLA Telemetry
//!
//! Structured logging for the channel monitor, built on `tracing`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ola_telemetry::{init_telemetry, TelemetryConfig};
//!
//! let config = TelemetryConfig::from_env();
//! let _guard = init_telemetry(config).expect("Failed to init telemetry");
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `OLA_LOG_LEVEL` | `info` | Log level filter (falls back to `RUST_LOG`) |
//! | `OLA_JSON_LOGS` | `false` | JSON formatted output |
//! | `OLA_CONSOLE_OUTPUT` | `true` | Write to stderr |
//! | `OLA_LOG_FILE` | unset | Append to this file |

mod config;
mod tracing_setup;

pub use config::TelemetryConfig;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to install tracing subscriber: {0}")]
    SubscriberInit(String),

    #[error("Failed to open log file {path}: {source}")]
    LogFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Initialize logging.
///
/// Returns a guard that should be held for the lifetime of the application.
/// With no sink configured this is a no-op that still returns a guard.
pub fn init_telemetry(config: TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    if config.has_output() {
        tracing_setup::init_tracing(&config)?;
    }

    Ok(TelemetryGuard {
        service_name: config.service_name,
    })
}

/// Guard that keeps telemetry active. Drop to log shutdown.
pub struct TelemetryGuard {
    service_name: String,
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        tracing::info!(service = %self.service_name, "Shutting down telemetry");
    }
}
