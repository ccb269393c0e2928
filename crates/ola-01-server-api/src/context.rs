//! Shared server access for views.

use crate::client::OlaClient;
use crate::config::ServerConfig;
use crate::error::ApiError;

/// Handle to one server, built once at startup and cloned into every view
/// that talks to it.
///
/// Clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ServerContext {
    client: OlaClient,
}

impl ServerContext {
    /// Connect a context to the server described by `config`.
    ///
    /// No request is made; an unreachable server shows up on first use.
    pub fn new(config: ServerConfig) -> Result<Self, ApiError> {
        Ok(Self {
            client: OlaClient::new(config)?,
        })
    }

    /// Build a context from `OLA_SERVER_URL` / `OLA_HTTP_TIMEOUT_MS`.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::new(ServerConfig::from_env())
    }

    #[must_use]
    pub fn client(&self) -> &OlaClient {
        &self.client
    }

    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        self.client.config()
    }
}
