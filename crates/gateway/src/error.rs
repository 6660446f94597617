//! Error types for the request gateway and credential storage

use std::time::Duration;
use thiserror::Error;

use crate::envelope::{codes, ApiError};

/// Result alias for gateway internals
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Every way an outbound call can fail before it is folded into an envelope
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Request failed with status {status}")]
    Status { status: u16, body: String },

    /// Structured error declared by the backend, passed through verbatim
    #[error("{message}")]
    Api { code: String, message: String },

    #[error("Invalid response payload: {0}")]
    InvalidResponse(#[source] serde_json::Error),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
}

impl GatewayError {
    /// Create a backend-declared error
    pub fn api<C: Into<String>, M: Into<String>>(code: C, message: M) -> Self {
        GatewayError::Api {
            code: code.into(),
            message: message.into(),
        }
    }

    /// The envelope error code this failure is reported under
    pub fn code(&self) -> String {
        match self {
            GatewayError::Timeout(_) => codes::TIMEOUT.to_string(),
            GatewayError::Network(err) if err.is_timeout() => codes::TIMEOUT.to_string(),
            GatewayError::Network(_) => codes::NETWORK_ERROR.to_string(),
            GatewayError::Status { status, .. } => codes::http(*status),
            GatewayError::Api { code, .. } => code.clone(),
            GatewayError::InvalidResponse(_) => codes::INVALID_RESPONSE.to_string(),
            GatewayError::InvalidRequest(_) | GatewayError::Url(_) => {
                codes::INVALID_REQUEST.to_string()
            }
        }
    }
}

impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        let code = err.code();
        let message = match err {
            GatewayError::Api { message, .. } => message,
            GatewayError::Network(ref inner) if inner.is_timeout() => {
                "Request timed out".to_string()
            }
            other => other.to_string(),
        };
        ApiError { code, message }
    }
}

/// Errors raised by a credential store backend
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Credential store lock poisoned")]
    Poisoned,
}
