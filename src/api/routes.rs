//! API route configuration.

use crate::api::handlers::{missing_code_handler, redirect_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Shortening and redirect routes.
///
/// # Endpoints
///
/// - `POST /shorten`          - Create a short link
/// - `GET  /redirect/{code}`  - Redirect to the original URL
/// - `GET  /redirect`         - 400, no code given
/// - `GET  /{code}`           - Redirect to the original URL
/// - `GET  /`                 - 400, no code given
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/redirect", get(missing_code_handler))
        .route("/redirect/{code}", get(redirect_handler))
        .route("/", get(missing_code_handler))
        .route("/{code}", get(redirect_handler))
}
