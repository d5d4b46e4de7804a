//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: store reachable
/// - **503 Service Unavailable**: store unreachable
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "store": { "status": "ok", "message": "Connected" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let store_check = check_store(&state).await;
    let healthy = store_check.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks { store: store_check },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_store(state: &AppState) -> CheckStatus {
    match state.redirect_service.check_store().await {
        Ok(()) => CheckStatus {
            status: "ok".to_string(),
            message: Some("Connected".to_string()),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(e.to_string()),
        },
    }
}
