//! Error taxonomy for board API calls.
//!
//! Every store operation reports failures through `ApiError`; the board
//! controller decides whether to surface them to the caller or turn them
//! into a user notice.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while talking to the board API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure: connection refused, timeout, TLS, ...
    #[error("Network error on {method} {path}: {source}")]
    Network {
        method: &'static str,
        path: String,
        #[source]
        source: reqwest::Error,
    },

    /// Request rejected for missing or insufficient credentials (401/403).
    #[error("Not authorized: {status} - {message}")]
    Auth { status: u16, message: String },

    /// Request rejected as malformed or invalid (other 4xx).
    #[error("Rejected request: {status} - {message}")]
    Validation { status: u16, message: String },

    /// The API failed while handling the request (5xx).
    #[error("Server error: {status} - {message}")]
    Server { status: u16, message: String },

    /// A success response whose body did not have the expected shape.
    #[error("Unexpected response body from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// Classify a non-success HTTP status.
    pub fn from_status(status: StatusCode, message: String) -> Self {
        let code = status.as_u16();
        match code {
            401 | 403 => ApiError::Auth {
                status: code,
                message,
            },
            400..=499 => ApiError::Validation {
                status: code,
                message,
            },
            _ => ApiError::Server {
                status: code,
                message,
            },
        }
    }

    /// HTTP status, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Auth { status, .. }
            | ApiError::Validation { status, .. }
            | ApiError::Server { status, .. } => Some(*status),
            ApiError::Network { source, .. } => source.status().map(|s| s.as_u16()),
            ApiError::Decode { .. } => None,
        }
    }

    /// Short machine-readable kind, used as a tracing field.
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::Network { .. } => "network_error",
            ApiError::Auth { .. } => "auth_error",
            ApiError::Validation { .. } => "validation_error",
            ApiError::Server { .. } => "server_error",
            ApiError::Decode { .. } => "decode_error",
        }
    }
}
