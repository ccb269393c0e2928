//! Outbound Ports (Driven Ports)

use async_trait::async_trait;
use ola_01_server_api::ApiError;
use shared_types::{ChannelArray, Snapshot, UniverseId};

/// Read and write access to a universe's levels (Driven Port).
#[async_trait]
pub trait UniverseGateway: Send + Sync {
    /// Current levels of `universe`.
    async fn fetch(&self, universe: &UniverseId) -> Result<Snapshot, ApiError>;

    /// Replace the levels of `universe`.
    async fn send(&self, universe: &UniverseId, channels: &ChannelArray) -> Result<(), ApiError>;
}
