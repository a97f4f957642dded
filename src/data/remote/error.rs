//! Error types for the quote fetch client.
//!
//! All variants mean the same thing to the UI ("the fetch failed"); they are
//! kept apart so logs can tell a dead network from a bad payload.

use thiserror::Error;

/// Errors that can occur while fetching a quote.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Request never produced a response (DNS, connect, timeout, TLS).
    #[error("request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status.
    #[error("server returned {status} for '{url}'")]
    Status { status: u16, url: String },

    /// Response body could not be read or is not a quote.
    #[error("invalid response body from '{url}': {message}")]
    Decode { url: String, message: String },
}

impl FetchError {
    /// Short machine-readable label used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Transport { .. } => "transport",
            FetchError::Status { .. } => "status",
            FetchError::Decode { .. } => "decode",
        }
    }
}
