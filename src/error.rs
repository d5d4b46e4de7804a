//! Application error type and its HTTP mapping.
//!
//! Every handler returns `Result<_, AppError>`. [`AppError`] is converted to a
//! response exactly once, in its [`IntoResponse`] impl, using a single JSON
//! envelope:
//!
//! ```json
//! { "error": { "code": "not_found", "message": "Short link not found", "details": { "code": "ab12XY" } } }
//! ```

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::repositories::StoreError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Failed to generate a unique code after {attempts} attempts")]
    ExhaustedRetries { attempts: usize },

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
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

    /// HTTP status this error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::ExhaustedRetries { .. } | Self::Store(_) | Self::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Builds the serializable payload without consuming the error.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, details) = match self {
            Self::Validation { details, .. } => ("validation_error", details.clone()),
            Self::NotFound { details, .. } => ("not_found", details.clone()),
            Self::MethodNotAllowed => ("method_not_allowed", json!({})),
            Self::ExhaustedRetries { attempts } => {
                ("exhausted_retries", json!({ "attempts": attempts }))
            }
            Self::Store(e) => ("store_error", json!({ "kind": e.kind() })),
            Self::Internal { details, .. } => ("internal_error", details.clone()),
        };

        ErrorInfo {
            code,
            message: self.to_string(),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or_else(|_| json!({}));

        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Request validation failed".to_string());

        Self::bad_request(message, details)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(
            "Invalid JSON request body",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::bad_request(
            "Invalid code in request path",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::bad_request("x", json!({})).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::not_found("x", json!({})).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::MethodNotAllowed.status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            AppError::ExhaustedRetries { attempts: 5 }.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::from(StoreError::Unavailable("down".into())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_info_codes() {
        let info = AppError::ExhaustedRetries { attempts: 5 }.to_error_info();
        assert_eq!(info.code, "exhausted_retries");
        assert_eq!(info.details["attempts"], 5);
        assert!(info.message.contains("5 attempts"));

        let info = AppError::from(StoreError::Timeout("pool".into())).to_error_info();
        assert_eq!(info.code, "store_error");
        assert_eq!(info.details["kind"], "timeout");
    }

    #[test]
    fn test_validation_message_preserved() {
        let err = AppError::bad_request("Missing URL in request body", json!({}));
        assert_eq!(err.to_string(), "Missing URL in request body");
    }
}
