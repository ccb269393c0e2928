//! Server connection configuration.

use std::time::Duration;

use tracing::warn;
use url::Url;

use crate::error::ApiError;

/// Address the daemon's web server listens on out of the box.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:9090";

/// Request timeout applied to every call.
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_millis(5000);

/// Where the server lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Base URL every endpoint path is joined onto.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SERVER_URL.to_string(),
            timeout: DEFAULT_HTTP_TIMEOUT,
        }
    }
}

impl ServerConfig {
    /// Build a configuration for `base_url` with the default timeout.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let config = Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: DEFAULT_HTTP_TIMEOUT,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load from environment variables.
    ///
    /// - `OLA_SERVER_URL`: base URL (default `http://localhost:9090`)
    /// - `OLA_HTTP_TIMEOUT_MS`: request timeout in milliseconds (default 5000)
    ///
    /// Unusable values fall back to the defaults with a warning.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var("OLA_SERVER_URL") {
            match Self::new(&raw) {
                Ok(parsed) => config.base_url = parsed.base_url,
                Err(err) => warn!(value = %raw, error = %err, "Ignoring OLA_SERVER_URL"),
            }
        }

        if let Ok(raw) = std::env::var("OLA_HTTP_TIMEOUT_MS") {
            match raw.parse::<u64>() {
                Ok(ms) if ms > 0 => config.timeout = Duration::from_millis(ms),
                _ => warn!(value = %raw, "Ignoring OLA_HTTP_TIMEOUT_MS"),
            }
        }

        config
    }

    /// Check the base URL can carry HTTP requests and the timeout is set.
    pub fn validate(&self) -> Result<(), ApiError> {
        let url = self.parsed_base_url()?;
        match url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(ApiError::InvalidUrl(format!(
                    "unsupported scheme '{other}'"
                )))
            }
        }
        if url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(self.base_url.clone()));
        }
        if self.timeout.is_zero() {
            return Err(ApiError::InvalidConfig("timeout must be non-zero".to_string()));
        }
        Ok(())
    }

    /// Builder-style method to set the request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Parsed base URL.
    pub fn parsed_base_url(&self) -> Result<Url, ApiError> {
        Ok(Url::parse(&self.base_url)?)
    }

    /// Resolve an endpoint path against the base URL.
    pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.parsed_base_url()?.join(path)?)
    }
}
