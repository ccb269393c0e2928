//! HTTP client for the daemon's web endpoints.

use serde::de::DeserializeOwned;
use shared_types::{ChannelArray, Snapshot, UniverseId};
use tracing::{debug, trace};

use crate::codec::{decode_snapshot, encode_dmx};
use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::types::{PluginInfo, ServerStats, UniverseInfo, UniversePluginList};

/// Client for one OLA server.
///
/// Plain request/response calls: no retries, no caching. Every request
/// carries the configured timeout.
#[derive(Debug, Clone)]
pub struct OlaClient {
    http_client: reqwest::Client,
    config: ServerConfig,
}

impl OlaClient {
    /// Create a client for the server described by `config`.
    pub fn new(config: ServerConfig) -> Result<Self, ApiError> {
        config.validate()?;
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// The configuration this client was built from.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// `GET /get_dmx?u={id}`: current levels of a universe.
    pub async fn get_dmx(&self, universe: &UniverseId) -> Result<Snapshot, ApiError> {
        let body = self.get_text("/get_dmx", &[("u", universe.as_str())]).await?;
        decode_snapshot(&body)
    }

    /// `POST /set_dmx`: send a full frame for a universe.
    pub async fn set_dmx(&self, universe: &UniverseId, channels: &ChannelArray) -> Result<(), ApiError> {
        let data = encode_dmx(channels);
        debug!(universe = %universe, non_zero = channels.non_zero_count(), "Sending DMX frame");
        self.post_form("/set_dmx", &[("u", universe.as_str()), ("d", data.as_str())])
            .await
    }

    /// `GET /json/server_stats`
    pub async fn server_stats(&self) -> Result<ServerStats, ApiError> {
        self.get_json("/json/server_stats", &[]).await
    }

    /// `GET /json/universe_plugin_list`
    pub async fn universe_plugin_list(&self) -> Result<UniversePluginList, ApiError> {
        self.get_json("/json/universe_plugin_list", &[]).await
    }

    /// `GET /json/universe_info?id={id}`
    pub async fn universe_info(&self, universe: &UniverseId) -> Result<UniverseInfo, ApiError> {
        self.get_json("/json/universe_info", &[("id", universe.as_str())])
            .await
    }

    /// `GET /json/plugin_info?id={id}`
    pub async fn plugin_info(&self, plugin_id: u32) -> Result<PluginInfo, ApiError> {
        let id = plugin_id.to_string();
        self.get_json("/json/plugin_info", &[("id", id.as_str())]).await
    }

    /// `POST /set_plugin_state`: enable or disable a plugin.
    pub async fn set_plugin_state(&self, plugin_id: u32, enabled: bool) -> Result<(), ApiError> {
        let id = plugin_id.to_string();
        let state = if enabled { "true" } else { "false" };
        self.post_form("/set_plugin_state", &[("plugin_id", id.as_str()), ("state", state)])
            .await
    }

    /// `GET /reload`: ask the server to reload its plugins.
    pub async fn reload(&self) -> Result<(), ApiError> {
        self.get_text("/reload", &[]).await.map(drop)
    }

    /// `GET /quit`: ask the server to shut down.
    ///
    /// Servers started without quit support answer with an error status.
    pub async fn shutdown(&self) -> Result<(), ApiError> {
        self.get_text("/quit", &[]).await.map(drop)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let body = self.get_text(path, query).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn get_text(&self, path: &str, query: &[(&str, &str)]) -> Result<String, ApiError> {
        let url = self.config.endpoint(path)?;
        trace!(%url, ?query, "GET");

        let response = self.http_client.get(url).query(query).send().await?;
        Self::read_body(response).await
    }

    async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> Result<(), ApiError> {
        let url = self.config.endpoint(path)?;
        trace!(%url, "POST");

        let response = self.http_client.post(url).form(form).send().await?;
        Self::read_body(response).await.map(drop)
    }

    async fn read_body(response: reqwest::Response) -> Result<String, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                code: status.as_u16(),
                url: response.url().to_string(),
            });
        }
        Ok(response.text().await?)
    }
}
