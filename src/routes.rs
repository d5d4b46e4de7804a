//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorten`                      - Create a short link
//! - `GET  /{code}`, `/redirect/{code}`   - Short link redirect
//! - `GET  /health`                       - Health check
//! - `OPTIONS *`                          - CORS preflight
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Preflight answers and `Access-Control-Allow-Origin`
//! - **Path normalization** - Trailing slash handling
//!
//! Unknown paths answer 404 and known paths with the wrong method answer
//! 405, both with the JSON error envelope.

use crate::api;
use crate::api::handlers::{health_handler, method_not_allowed_handler, not_found_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `cors` - CORS policy, see [`crate::api::middleware::cors::layer`]
pub fn app_router(state: AppState, cors: CorsLayer) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(service_router(state, cors))
}

/// Same routes and layers as [`app_router`] without path normalization.
pub fn service_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(api::routes::public_routes())
        .fallback(not_found_handler)
        .method_not_allowed_fallback(method_not_allowed_handler)
        .with_state(state)
        .layer(cors)
        .layer(tracing::layer())
}
