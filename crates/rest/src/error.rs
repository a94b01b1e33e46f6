//! Error types for the HTTP layer.
//!
//! Three outcomes cover the whole surface:
//!
//! | Variant | HTTP status | Body |
//! |---------|-------------|------|
//! | `BadRequest` | 400 | `{"error": message}` |
//! | `NotFound` | 404 | `{"error": message}` |
//! | `Internal` | 500 | `{"error": context, "details": raw error text}` |
//!
//! Validation errors are raised before any I/O; not-found is a normal
//! outcome of single-entity lookups, not a failure. The 500 body exposes
//! the underlying error text because integration callers rely on it for
//! diagnostics; swap the `details` field for an opaque correlation id here
//! if that contract is ever hardened.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::fmt;

/// The error type for REST handlers.
#[derive(Debug)]
pub enum RestError {
    /// Invalid or missing request parameters (HTTP 400).
    BadRequest {
        /// Human-readable description of the validation failure.
        message: String,
    },

    /// A single-entity lookup found nothing (HTTP 404).
    NotFound {
        /// Human-readable description of what was absent.
        message: String,
    },

    /// An unexpected failure (HTTP 500).
    Internal {
        /// What the request was doing.
        context: String,
        /// Raw underlying error text, exposed in the response body.
        details: String,
    },
}

impl RestError {
    /// Convenience constructor for 400 responses.
    pub fn bad_request(message: impl Into<String>) -> Self {
        RestError::BadRequest {
            message: message.into(),
        }
    }

    /// Convenience constructor for 404 responses.
    pub fn not_found(message: impl Into<String>) -> Self {
        RestError::NotFound {
            message: message.into(),
        }
    }

    /// Convenience constructor for 500 responses.
    pub fn internal(context: impl Into<String>, err: impl fmt::Display) -> Self {
        RestError::Internal {
            context: context.into(),
            details: err.to_string(),
        }
    }
}

impl fmt::Display for RestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestError::BadRequest { message } => write!(f, "bad request: {}", message),
            RestError::NotFound { message } => write!(f, "not found: {}", message),
            RestError::Internal { context, details } => {
                write!(f, "{}: {}", context, details)
            }
        }
    }
}

impl std::error::Error for RestError {}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        match self {
            RestError::BadRequest { message } => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": message })),
            )
                .into_response(),
            RestError::NotFound { message } => (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({ "error": message })),
            )
                .into_response(),
            RestError::Internal { context, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": context, "details": details })),
            )
                .into_response(),
        }
    }
}

/// Result type alias for REST handlers.
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_forms() {
        let err = RestError::bad_request("Patient ID is required");
        assert_eq!(err.to_string(), "bad request: Patient ID is required");

        let err = RestError::not_found("Patient with ID 9 not found");
        assert!(err.to_string().contains("not found"));

        let err = RestError::internal("retrieving document data", "timeout");
        assert_eq!(err.to_string(), "retrieving document data: timeout");
    }
}
