//! CORS middleware.

use axum::http::{HeaderValue, Method, header};
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Creates the CORS layer for all public endpoints.
///
/// `OPTIONS` requests are answered by the layer itself with `200 OK`, an
/// empty body and the `Access-Control-Allow-*` headers; they never reach a
/// handler.
///
/// # Arguments
///
/// - `allow_origin` - `*` for any origin, otherwise one exact origin such as
///   `http://localhost:4200`
/// - `max_age_seconds` - value of `Access-Control-Max-Age`
pub fn layer(allow_origin: &str, max_age_seconds: u64) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(parse_origin(allow_origin))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .max_age(Duration::from_secs(max_age_seconds))
}

fn parse_origin(allow_origin: &str) -> AllowOrigin {
    if allow_origin == "*" {
        return AllowOrigin::any();
    }

    match HeaderValue::from_str(allow_origin) {
        Ok(origin) => AllowOrigin::exact(origin),
        Err(_) => {
            tracing::warn!(allow_origin, "Invalid CORS origin, cross-origin requests disabled");
            AllowOrigin::list(Vec::<HeaderValue>::new())
        }
    }
}
