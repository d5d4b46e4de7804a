//! Handler for link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for one URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/page" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "shortUrl": "https://host/api/ab12XY", "code": "ab12XY" }
/// ```
///
/// # Errors
///
/// - 400 if the body is not JSON or `url` is missing/empty
/// - 500 if no free code was found or the store failed
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let url = payload.url.unwrap_or_default();
    let shortened = state.shorten_service.shorten(&url).await?;

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            short_url: shortened.short_url,
            code: shortened.code,
        }),
    ))
}
