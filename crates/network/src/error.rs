// crates/network/src/error.rs
//! Error types for network operations

use thiserror::Error;

/// Result type for network operations
pub type NetworkResult<T> = Result<T, NetworkError>;

/// Errors that can occur during network operations
#[derive(Debug, Error)]
pub enum NetworkError {
    /// HTTP transport error (connectivity, timeout, TLS)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response from the search service
    #[error("HTTP {code}: {reason}")]
    Status { code: u16, reason: String },

    /// Response body was not parseable JSON
    #[error("Malformed response body: {0}")]
    MalformedResponse(String),

    /// Retry budget exhausted
    #[error("Resilience error: {0}")]
    Resilience(#[from] tunescout_resilience::ResilienceError),
}

impl NetworkError {
    /// Returns true if the error is worth retrying
    pub fn is_retryable(&self) -> bool {
        match self {
            NetworkError::Http(_) => true,
            NetworkError::Status { code, .. } => *code >= 500,
            _ => false,
        }
    }

    /// Returns true if the error is a client error (4xx)
    pub fn is_client_error(&self) -> bool {
        matches!(self, NetworkError::Status { code, .. } if (400..500).contains(code))
    }
}
