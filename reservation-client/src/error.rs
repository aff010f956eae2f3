//! Client error types

use shared::ErrorBody;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with an error body
    #[error("{message}")]
    Api {
        status: u16,
        code: u16,
        message: String,
    },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The cancellation token fired before the response arrived
    #[error("Request aborted")]
    Aborted,

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    pub fn is_aborted(&self) -> bool {
        matches!(self, ClientError::Aborted)
    }

    /// HTTP status of an API error
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl From<ErrorBody> for ClientError {
    fn from(body: ErrorBody) -> Self {
        ClientError::Api {
            status: body.status,
            code: body.code,
            message: body.message,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
