//! Fetch error definitions.

use std::time::Duration;
use thiserror::Error;

/// Errors that end a single catalog fetch. None of them are retried.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be sent or the response could not be read.
    #[error("Network failure: {0}")]
    Network(#[source] reqwest::Error),

    /// No complete response within the request timeout.
    #[error("Request timed out after {} ms", .0.as_millis())]
    Timeout(Duration),

    /// The backend answered outside the 2xx range.
    #[error("HTTP error {status} - {reason}")]
    Status { status: u16, reason: String },

    /// A 2xx body that is not valid JSON.
    #[error("Failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The request could not be built.
    #[error("Invalid request: {0}")]
    Request(String),
}

impl FetchError {
    /// Classify an error returned by `send()`.
    pub(crate) fn from_send(err: reqwest::Error) -> Self {
        if err.is_builder() {
            FetchError::Request(err.to_string())
        } else {
            FetchError::Network(err)
        }
    }

    /// Short label used for metrics and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Network(_) => "network",
            FetchError::Timeout(_) => "timeout",
            FetchError::Status { .. } => "status",
            FetchError::Parse(_) => "parse",
            FetchError::Request(_) => "request",
        }
    }
}

pub type FetchResult<T> = Result<T, FetchError>;
