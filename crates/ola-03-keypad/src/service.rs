//! Keypad service: turns a command into a DMX frame on the server.

use shared_types::{ChannelArray, UniverseId};
use tracing::info;

use crate::domain::KeypadCommand;
use crate::error::KeypadError;
use crate::ports::UniverseGateway;

/// Submits keypad commands for a universe.
pub struct KeypadService<G: UniverseGateway> {
    gateway: G,
}

impl<G: UniverseGateway> KeypadService<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Fetch the universe's current levels, apply `command` and send the
    /// whole frame back.
    ///
    /// Channels the server did not report are sent as 0. Returns the frame
    /// that was sent.
    pub async fn submit(
        &self,
        universe: &UniverseId,
        command: &KeypadCommand,
    ) -> Result<ChannelArray, KeypadError> {
        command.validate()?;

        let snapshot = self.gateway.fetch(universe).await?;
        let mut channels = ChannelArray::from_snapshot(&snapshot);
        command.apply(&mut channels)?;

        self.gateway.send(universe, &channels).await?;
        info!(universe = %universe, command = %command, "Keypad command sent");
        Ok(channels)
    }
}
