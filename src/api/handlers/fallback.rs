//! Fallback handlers for unmatched routes and methods.

use axum::http::Uri;
use serde_json::json;

use crate::error::AppError;

/// Any path no route matches.
pub async fn not_found_handler(uri: Uri) -> AppError {
    AppError::not_found("Route not found", json!({ "path": uri.path() }))
}

/// A known path requested with a method it does not serve.
pub async fn method_not_allowed_handler() -> AppError {
    AppError::MethodNotAllowed
}
