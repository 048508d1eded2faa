//! API error types and handling.

use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rollcall::{ErrorKind, RollcallError};
use serde::Serialize;
use tracing::error;

/// API error type.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed request.
    BadRequest(String),
    /// The check did not finish within the request timeout.
    Timeout(Duration),
    /// Internal server error.
    Internal(String),
    /// Error from the rollcall library.
    Rollcall(RollcallError),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    kind: &'static str,
}

impl ApiError {
    /// Status code and stable kind label for this error.
    pub fn classify(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "validation"),
            ApiError::Timeout(_) => (StatusCode::GATEWAY_TIMEOUT, "timeout"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
            ApiError::Rollcall(e) => match e.kind() {
                ErrorKind::Validation => (StatusCode::BAD_REQUEST, "validation"),
                ErrorKind::Ingest => (StatusCode::BAD_REQUEST, "ingest"),
                ErrorKind::Schema => (StatusCode::UNPROCESSABLE_ENTITY, "schema"),
                ErrorKind::Config => (StatusCode::INTERNAL_SERVER_ERROR, "internal"),
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind) = self.classify();
        if status.is_server_error() {
            error!(kind, "{}", self);
        }

        let message = match self {
            ApiError::BadRequest(msg) | ApiError::Internal(msg) => msg,
            ApiError::Timeout(limit) => {
                format!("Check did not finish within {} seconds", limit.as_secs())
            }
            ApiError::Rollcall(e) => e.to_string(),
        };

        (
            status,
            Json(ErrorResponse {
                error: message,
                kind,
            }),
        )
            .into_response()
    }
}

impl From<RollcallError> for ApiError {
    fn from(err: RollcallError) -> Self {
        ApiError::Rollcall(err)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::Timeout(limit) => write!(f, "Timed out after {:?}", limit),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
            ApiError::Rollcall(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ApiError {}
