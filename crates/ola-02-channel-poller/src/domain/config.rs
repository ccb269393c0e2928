//! Poller configuration and validation.
//!
//! # Example
//!
//! ```ignore
//! use ola_02_channel_poller::{PollerConfig, ResponseOrdering};
//! use std::time::Duration;
//!
//! let config = PollerConfig::default()
//!     .with_period(Duration::from_millis(250))
//!     .with_ordering(ResponseOrdering::RequestOrder);
//! config.validate()?;
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::PollerError;

/// Time between two fetches.
pub const DEFAULT_POLL_PERIOD: Duration = Duration::from_millis(100);

/// Levels above this render as [`shared_types::DisplayClass::Dark`].
pub const DEFAULT_DISPLAY_THRESHOLD: u8 = 90;

/// Which of several overlapping responses wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseOrdering {
    /// Every response is merged as it lands; the last one to arrive wins
    /// even if its request was issued earlier.
    #[default]
    ArrivalOrder,
    /// A response whose request is older than the last merged one is
    /// discarded.
    RequestOrder,
}

/// Channel poller configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollerConfig {
    /// Fixed period of the fetch timer. Must be non-zero.
    pub period: Duration,
    /// Threshold for the display classification.
    pub display_threshold: u8,
    /// Policy for responses that land out of order.
    pub ordering: ResponseOrdering,
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            period: DEFAULT_POLL_PERIOD,
            display_threshold: DEFAULT_DISPLAY_THRESHOLD,
            ordering: ResponseOrdering::default(),
        }
    }
}

impl PollerConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), PollerError> {
        if self.period.is_zero() {
            return Err(PollerError::InvalidConfig(
                "period cannot be 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Builder-style method to set the poll period
    #[must_use]
    pub fn with_period(mut self, period: Duration) -> Self {
        self.period = period;
        self
    }

    /// Builder-style method to set the display threshold
    #[must_use]
    pub fn with_display_threshold(mut self, threshold: u8) -> Self {
        self.display_threshold = threshold;
        self
    }

    /// Builder-style method to set the response ordering
    #[must_use]
    pub fn with_ordering(mut self, ordering: ResponseOrdering) -> Self {
        self.ordering = ordering;
        self
    }
}
