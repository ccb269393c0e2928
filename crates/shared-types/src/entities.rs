//! # Core Domain Entities
//!
//! ## Clusters
//!
//! - **Addressing**: `UniverseId`, channel number and value bounds
//! - **Channel Data**: `ChannelArray`, `Snapshot`
//! - **Rendering**: `DisplayClass`

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ChannelError;

// =============================================================================
// CLUSTER A: ADDRESSING
// =============================================================================

/// Number of channels in one DMX universe.
pub const DMX_UNIVERSE_SIZE: usize = 512;

/// Lowest user-facing channel number (channels are 1-based on screen).
pub const MIN_CHANNEL_NUMBER: u16 = 1;

/// Highest user-facing channel number.
pub const MAX_CHANNEL_NUMBER: u16 = DMX_UNIVERSE_SIZE as u16;

/// Lowest channel level.
pub const MIN_CHANNEL_VALUE: u8 = 0;

/// Highest channel level.
pub const MAX_CHANNEL_VALUE: u8 = 255;

/// Identifier of a universe on the server.
///
/// Kept as the string the server (or the user) gave us. `"3"` and `3` name
/// the same universe.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UniverseId(String);

impl UniverseId {
    /// Create an identifier from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as sent on the wire.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UniverseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u32> for UniverseId {
    fn from(id: u32) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for UniverseId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for UniverseId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Clamp an arbitrary integer into the channel level range.
#[must_use]
pub fn clamp_channel_value(value: i64) -> u8 {
    value.clamp(i64::from(MIN_CHANNEL_VALUE), i64::from(MAX_CHANNEL_VALUE)) as u8
}

// =============================================================================
// CLUSTER B: CHANNEL DATA
// =============================================================================

/// A sparse, point-in-time set of channel levels returned by the server.
///
/// Indices are 0-based. Only channels the server reported with a numeric
/// level are present; indices at or beyond [`DMX_UNIVERSE_SIZE`] are never
/// stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    values: BTreeMap<usize, u8>,
}

impl Snapshot {
    /// Create an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a channel level.
    ///
    /// Returns `false` (and stores nothing) when `index` is outside the
    /// universe.
    pub fn insert(&mut self, index: usize, value: u8) -> bool {
        if index >= DMX_UNIVERSE_SIZE {
            return false;
        }
        self.values.insert(index, value);
        true
    }

    /// Level reported for `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<u8> {
        self.values.get(&index).copied()
    }

    /// Number of channels present in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the snapshot carries no channel at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate present channels in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.values.iter().map(|(i, v)| (*i, *v))
    }
}

impl FromIterator<(usize, u8)> for Snapshot {
    fn from_iter<I: IntoIterator<Item = (usize, u8)>>(iter: I) -> Self {
        let mut snapshot = Snapshot::new();
        for (index, value) in iter {
            snapshot.insert(index, value);
        }
        snapshot
    }
}

/// The full set of 512 channel levels for one universe.
///
/// INVARIANT: length is always exactly [`DMX_UNIVERSE_SIZE`].
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ChannelArray([u8; DMX_UNIVERSE_SIZE]);

impl ChannelArray {
    /// All channels at [`MIN_CHANNEL_VALUE`].
    #[must_use]
    pub fn new() -> Self {
        Self([MIN_CHANNEL_VALUE; DMX_UNIVERSE_SIZE])
    }

    /// Build an array from a snapshot, zero-filling missing channels.
    #[must_use]
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let mut channels = Self::new();
        channels.apply_snapshot(snapshot);
        channels
    }

    /// Level at 0-based `index`.
    pub fn get(&self, index: usize) -> Result<u8, ChannelError> {
        self.0.get(index).copied().ok_or(ChannelError::OutOfRange {
            index,
            len: DMX_UNIVERSE_SIZE,
        })
    }

    /// Set the level at 0-based `index`.
    pub fn set(&mut self, index: usize, value: u8) -> Result<(), ChannelError> {
        let slot = self.0.get_mut(index).ok_or(ChannelError::OutOfRange {
            index,
            len: DMX_UNIVERSE_SIZE,
        })?;
        *slot = value;
        Ok(())
    }

    /// Overwrite every channel from `snapshot`.
    ///
    /// Channels the snapshot does not carry are reset to
    /// [`MIN_CHANNEL_VALUE`].
    pub fn apply_snapshot(&mut self, snapshot: &Snapshot) {
        for (index, slot) in self.0.iter_mut().enumerate() {
            *slot = snapshot.get(index).unwrap_or(MIN_CHANNEL_VALUE);
        }
    }

    /// Number of channels above zero.
    #[must_use]
    pub fn non_zero_count(&self) -> usize {
        self.0.iter().filter(|v| **v > MIN_CHANNEL_VALUE).count()
    }

    /// Borrow the raw levels.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Always [`DMX_UNIVERSE_SIZE`].
    #[must_use]
    pub fn len(&self) -> usize {
        DMX_UNIVERSE_SIZE
    }

    /// Never true; present for API symmetry with slices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate levels in channel order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().copied()
    }
}

impl Default for ChannelArray {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ChannelArray {
    // 512 numbers are unreadable in test output; show the lit channels only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.0
                    .iter()
                    .enumerate()
                    .filter(|(_, v)| **v > MIN_CHANNEL_VALUE),
            )
            .finish()
    }
}

// =============================================================================
// CLUSTER C: RENDERING
// =============================================================================

/// Two-tone classification used to pick a readable cell style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayClass {
    /// Level above the threshold (bright cell background, dark text).
    Dark,
    /// Level at or below the threshold.
    Light,
}

impl DisplayClass {
    /// `Dark` iff `value > threshold`.
    #[must_use]
    pub fn classify(value: u8, threshold: u8) -> Self {
        if value > threshold {
            DisplayClass::Dark
        } else {
            DisplayClass::Light
        }
    }

    /// Stable tag for the class.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayClass::Dark => "dark",
            DisplayClass::Light => "light",
        }
    }
}

impl fmt::Display for DisplayClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
