//! HTTP snapshot source backed by the server API client.

use async_trait::async_trait;
use ola_01_server_api::{ApiError, ServerContext};
use shared_types::{Snapshot, UniverseId};

use crate::ports::{DmxSource, FetchError};

/// Fetches snapshots with `GET /get_dmx`.
#[derive(Debug, Clone)]
pub struct HttpDmxSource {
    context: ServerContext,
}

impl HttpDmxSource {
    pub fn new(context: ServerContext) -> Self {
        Self { context }
    }
}

#[async_trait]
impl DmxSource for HttpDmxSource {
    async fn fetch_snapshot(&self, universe: &UniverseId) -> Result<Snapshot, FetchError> {
        self.context
            .client()
            .get_dmx(universe)
            .await
            .map_err(FetchError::from)
    }
}

impl From<ApiError> for FetchError {
    fn from(err: ApiError) -> Self {
        FetchError::FetchFailed(err.to_string())
    }
}
