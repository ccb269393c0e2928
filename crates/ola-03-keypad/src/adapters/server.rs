//! Gateway over the server API client.

use async_trait::async_trait;
use ola_01_server_api::{ApiError, ServerContext};
use shared_types::{ChannelArray, Snapshot, UniverseId};

use crate::ports::UniverseGateway;

#[async_trait]
impl UniverseGateway for ServerContext {
    async fn fetch(&self, universe: &UniverseId) -> Result<Snapshot, ApiError> {
        self.client().get_dmx(universe).await
    }

    async fn send(&self, universe: &UniverseId, channels: &ChannelArray) -> Result<(), ApiError> {
        self.client().set_dmx(universe, channels).await
    }
}
