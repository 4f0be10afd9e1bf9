//! Application error type and its HTTP representation.
//!
//! | Variant | Code | Status |
//! |---------|------|--------|
//! | [`AppError::InvalidInput`] | `INVALID_NIP` | 400 |
//! | [`AppError::NoMatch`] | `NOT_FOUND` | 404 |
//! | [`AppError::UpstreamUnavailable`] | `UPSTREAM_ERROR` | 502 |
//! | [`AppError::Internal`] | `INTERNAL_ERROR` | 500 |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorInfo,
}

#[derive(Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The identifier failed the format or checksum check.
    #[error("{message}")]
    InvalidInput { message: String, details: Value },

    /// The registry holds no beneficial owners for the identifier.
    #[error("{message}")]
    NoMatch { message: String, details: Value },

    /// The registry could not be reached or answered with something unusable.
    #[error("{message}")]
    UpstreamUnavailable { message: String, details: Value },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn invalid_input(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidInput {
            message: message.into(),
            details,
        }
    }
    pub fn no_match(message: impl Into<String>, details: Value) -> Self {
        Self::NoMatch {
            message: message.into(),
            details,
        }
    }
    pub fn upstream(message: impl Into<String>, details: Value) -> Self {
        Self::UpstreamUnavailable {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Machine-readable error code exposed to clients.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidInput { .. } => "INVALID_NIP",
            AppError::NoMatch { .. } => "NOT_FOUND",
            AppError::UpstreamUnavailable { .. } => "UPSTREAM_ERROR",
            AppError::Internal { .. } => "INTERNAL_ERROR",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            AppError::NoMatch { .. } => StatusCode::NOT_FOUND,
            AppError::UpstreamUnavailable { .. } => StatusCode::BAD_GATEWAY,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        let (message, details) = match self {
            AppError::InvalidInput { message, details }
            | AppError::NoMatch { message, details }
            | AppError::UpstreamUnavailable { message, details }
            | AppError::Internal { message, details } => (message, details),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}
