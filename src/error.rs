//! Client error types
//!
//! Shared by the native `reqwest` client and the browser front-end, so the
//! transport error is carried as text.

use thiserror::Error;

/// Errors that can occur when calling the activities API
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// Request could not be sent or the connection failed
    #[error("Network error: {0}")]
    Network(String),

    /// Request exceeded the configured timeout
    #[error("Request timeout")]
    Timeout,

    /// Response body was not the expected JSON
    #[error("Parse error: {0}")]
    Parse(String),

    /// Server answered with a non-success status
    #[error("API error {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Api { status: u16, detail: Option<String> },
}

impl ClientError {
    /// Server-provided detail, if the server explained the failure
    pub fn detail(&self) -> Option<&str> {
        match self {
            ClientError::Api { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Parse(err.to_string())
    }
}

#[cfg(feature = "native")]
impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout
        } else if err.is_decode() {
            ClientError::Parse(err.to_string())
        } else {
            ClientError::Network(err.to_string())
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
