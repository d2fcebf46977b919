//! Error types for transport operations

use thiserror::Error;

/// Errors raised by a [`crate::transport::PublicCloudApi`] implementation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// API answered with a non-success status
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// Connection could not be established or was dropped
    #[error("Network error: {0}")]
    Network(String),

    /// Request timed out
    #[error("Operation timed out: {0}")]
    Timeout(String),

    /// Caller cancelled the request
    #[error("Request cancelled")]
    Cancelled,

    /// Response body did not match the expected shape
    #[error("Deserialization error: {0}")]
    Decode(String),
}

/// Result type for transport operations
pub type TransportResult<T> = Result<T, TransportError>;

impl TransportError {
    /// HTTP status, when the API answered
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Whether repeating the request could succeed
    ///
    /// Server errors, throttling, network failures and timeouts are
    /// retryable. Client errors, decode failures and cancellation are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http { status, .. } => *status >= 500 || *status == 429,
            Self::Network(_) | Self::Timeout(_) => true,
            Self::Cancelled | Self::Decode(_) => false,
        }
    }
}

impl From<serde_json::Error> for TransportError {
    fn from(err: serde_json::Error) -> Self {
        TransportError::Decode(err.to_string())
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TransportError::Timeout(err.to_string())
        } else if err.is_decode() {
            TransportError::Decode(err.to_string())
        } else {
            TransportError::Network(err.to_string())
        }
    }
}
