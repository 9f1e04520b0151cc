//! Client error types

use thiserror::Error;

/// Client error type
///
/// The variants keep the panel's three failure presentations apart:
/// [`ClientError::Http`] is a transport failure (the request never
/// completed), [`ClientError::Api`] is a completed request the server
/// answered with `success: false`, and the rest are local problems.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a false success flag
    #[error("{message}")]
    Api { message: String },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// The server-supplied reason, when this is an API failure.
    pub fn api_reason(&self) -> Option<&str> {
        match self {
            Self::Api { message } => Some(message),
            _ => None,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
