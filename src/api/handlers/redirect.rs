//! Handler for short URL redirect.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}` and `GET /redirect/{code}`
///
/// The code is matched exactly as it arrives in the path segment; no
/// trimming or case folding is applied.
///
/// # Response
///
/// `302 Found` with `Location` set to the stored URL.
///
/// # Errors
///
/// - 400 if the code is empty or the path segment is not valid UTF-8
/// - 404 if the code is unknown
/// - 500 on store errors, or if the stored URL is not a valid header value
pub async fn redirect_handler(
    path: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let Path(code) = path?;
    let mapping = state.redirect_service.resolve(&code).await?;

    let location = HeaderValue::try_from(mapping.original_url.as_str()).map_err(|_| {
        AppError::internal(
            "Stored URL is not a valid redirect target",
            json!({ "code": code }),
        )
    })?;

    debug!(%code, "Redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// Answers redirect paths that carry no code at all.
///
/// # Endpoint
///
/// `GET /` and `GET /redirect`
pub async fn missing_code_handler() -> AppError {
    AppError::bad_request("Missing code", json!({ "field": "code" }))
}
