//! Error types for the sync client crate.

use thiserror::Error;

/// Result type alias for sync client operations.
pub type Result<T> = std::result::Result<T, SyncClientError>;

/// Errors that can occur while talking to the bookmark API.
#[derive(Debug, Error)]
pub enum SyncClientError {
    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error response from the bookmark API
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

impl SyncClientError {
    /// Create an API error from status and message
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }
}
