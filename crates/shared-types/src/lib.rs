//! # Shared Types Crate
//!
//! DMX domain types shared by every crate in the workspace.
//!
//! ## Design Principles
//!
//! - **Fixed Geometry**: A `ChannelArray` always holds exactly
//!   [`DMX_UNIVERSE_SIZE`] channels. There is no way to shrink or grow it.
//! - **Total Merge**: Applying a `Snapshot` overwrites every channel; a channel
//!   missing from the snapshot drops to [`MIN_CHANNEL_VALUE`] instead of
//!   keeping a stale level.
//! - **Opaque Universes**: `UniverseId` is never validated locally. The server
//!   is the only authority on which universes exist.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
