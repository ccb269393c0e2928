//! Error types for the server API client.

use thiserror::Error;

/// Errors returned by [`crate::OlaClient`] and the wire codec.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connect refused, timeout, ...).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("Server returned HTTP {code} for {url}")]
    Status { code: u16, url: String },

    /// The body could not be decoded into the expected shape.
    #[error("Malformed response: {0}")]
    Decode(String),

    /// The server reported an error string in an otherwise valid body.
    #[error("Server error: {0}")]
    Server(String),

    /// The configured base URL cannot be used to build request URLs.
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// A client setting other than the URL is unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ApiError {
    /// True for failures that happened before any response arrived.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

impl From<url::ParseError> for ApiError {
    fn from(err: url::ParseError) -> Self {
        ApiError::InvalidUrl(err.to_string())
    }
}
