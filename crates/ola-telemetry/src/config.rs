//! Telemetry configuration from environment variables.

use std::env;
use std::path::PathBuf;

/// Configuration for logging.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Service name attached to the startup log line
    pub service_name: String,

    /// Log level filter (trace, debug, info, warn, error) or a full
    /// `EnvFilter` directive such as `ola_02_channel_poller=debug`
    pub log_level: String,

    /// Whether to write logs to stderr
    pub console_output: bool,

    /// Whether to enable JSON formatted logs
    pub json_logs: bool,

    /// Append logs to this file as well
    pub log_file: Option<PathBuf>,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "ola-channel-monitor".to_string(),
            log_level: "info".to_string(),
            console_output: true,
            json_logs: false,
            log_file: None,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `OLA_SERVICE_NAME`: Service name (default: ola-channel-monitor)
    /// - `OLA_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `OLA_CONSOLE_OUTPUT`: Enable stderr output (default: true)
    /// - `OLA_JSON_LOGS`: Enable JSON logs (default: false)
    /// - `OLA_LOG_FILE`: Also append logs to this path (default: unset)
    pub fn from_env() -> Self {
        Self {
            service_name: env::var("OLA_SERVICE_NAME")
                .unwrap_or_else(|_| "ola-channel-monitor".to_string()),

            log_level: env::var("OLA_LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or_else(|_| "info".to_string()),

            console_output: env::var("OLA_CONSOLE_OUTPUT")
                .map(|v| parse_flag(&v))
                .unwrap_or(true),

            json_logs: env::var("OLA_JSON_LOGS")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),

            log_file: env::var("OLA_LOG_FILE")
                .ok()
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        }
    }

    /// Builder-style method to send logs to a file instead of the console.
    ///
    /// Terminal front-ends use this so log lines never land on the screen
    /// they are drawing.
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self.console_output = false;
        self
    }

    /// Builder-style method to set the service name.
    pub fn with_service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = name.into();
        self
    }

    /// Builder-style method to set the level filter.
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Whether any sink is configured at all.
    pub fn has_output(&self) -> bool {
        self.console_output || self.log_file.is_some()
    }
}

fn parse_flag(value: &str) -> bool {
    let value = value.trim().to_lowercase();
    value == "true" || value == "1" || value == "yes"
}
