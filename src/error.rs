// HTTP API Error Types
use axum::{response::IntoResponse, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::backend::BackendError;

/// HTTP API error with appropriate status codes and client-friendly messages
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    BadRequest(String),

    // 401 Unauthorized
    Unauthorized(String),

    // 403 Forbidden
    Forbidden(String),

    // 404 Not Found
    NotFound(String),

    // 500 Internal Server Error
    InternalServerError(String),

    // 502 Bad Gateway (hosted backend issues)
    BadGateway(String),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::BadRequest(_) => 400,
            ApiError::Unauthorized(_) => 401,
            ApiError::Forbidden(_) => 403,
            ApiError::NotFound(_) => 404,
            ApiError::InternalServerError(_) => 500,
            ApiError::BadGateway(_) => 502,
        }
    }

    /// Get client-friendly error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) => msg,
            ApiError::Unauthorized(msg) => msg,
            ApiError::Forbidden(msg) => msg,
            ApiError::NotFound(msg) => msg,
            ApiError::InternalServerError(msg) => msg,
            ApiError::BadGateway(msg) => msg,
        }
    }

    /// Get error code for client identification
    pub fn error_code(&self) -> &str {
        match self {
            ApiError::BadRequest(_) => "BAD_REQUEST",
            ApiError::Unauthorized(_) => "UNAUTHORIZED",
            ApiError::Forbidden(_) => "FORBIDDEN",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::InternalServerError(_) => "INTERNAL_ERROR",
            ApiError::BadGateway(_) => "BAD_GATEWAY",
        }
    }

    /// Convert to JSON error response
    pub fn to_json(&self) -> Value {
        json!({
            "success": false,
            "error": self.message(),
            "error_code": self.error_code()
        })
    }
}

// Convenience constructors
impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        ApiError::BadRequest(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        ApiError::Unauthorized(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        ApiError::Forbidden(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        ApiError::NotFound(msg.into())
    }

    pub fn internal_error(msg: impl Into<String>) -> Self {
        ApiError::InternalServerError(msg.into())
    }

    pub fn bad_gateway(msg: impl Into<String>) -> Self {
        ApiError::BadGateway(msg.into())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error_code(), self.message())
    }
}

impl std::error::Error for ApiError {}

/// Convert backend client errors to API errors without leaking backend detail
impl From<BackendError> for ApiError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Rejected(401) => {
                ApiError::unauthorized("Invalid email or password")
            }
            BackendError::Rejected(status) => {
                tracing::error!("Backend rejected request with status {}", status);
                ApiError::bad_gateway("Authentication backend rejected the request")
            }
            BackendError::Transport(e) => {
                tracing::error!("Backend transport error: {}", e);
                ApiError::bad_gateway("Authentication backend is unreachable")
            }
            BackendError::Malformed(detail) => {
                tracing::error!("Backend returned malformed response: {}", detail);
                ApiError::bad_gateway("Authentication backend returned an unusable response")
            }
            err @ (BackendError::ConfigMissing(_) | BackendError::InvalidBaseUrl(_)) => {
                tracing::error!("Backend client misconfigured: {}", err);
                ApiError::internal_error("Authentication backend is misconfigured")
            }
        }
    }
}

/// Implement IntoResponse for proper HTTP error responses
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = StatusCode::from_u16(self.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(self.to_json())).into_response()
    }
}
