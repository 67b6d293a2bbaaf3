//! Catalog API error types.

use thiserror::Error;

/// Errors surfaced by the catalog API client.
///
/// Errors flow to the UI as values, never as panics: the query layer stores
/// them per cache key and components render them as an error state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("API request failed: {status} {status_text}")]
    Request {
        /// HTTP status code.
        status: u16,
        /// Status text reported by the server.
        status_text: String,
    },

    /// The transport itself failed (DNS, connection reset, CORS, offline).
    #[error("network error: {0}")]
    Network(String),

    /// The response body could not be decoded.
    #[error("failed to parse response: {0}")]
    Parse(String),
}

impl ApiError {
    /// HTTP status code, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Request { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether a retry policy may re-issue the request.
    ///
    /// Transport failures and 5xx responses are transient; 4xx responses and
    /// decode failures are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Network(_) => true,
            ApiError::Request { status, .. } => (500..600).contains(status),
            ApiError::Parse(_) => false,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Parse(e.to_string())
    }
}
