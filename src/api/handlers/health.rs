//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::HealthResponse;
use crate::state::AppState;

/// Reports liveness and the configured sources.
///
/// # Endpoint
///
/// `GET /health`
///
/// Does not contact any upstream site.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        sources: state
            .scrape_service
            .sources()
            .into_iter()
            .map(|s| s.as_str().to_string())
            .collect(),
    })
}
