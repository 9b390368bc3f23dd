//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /scrape?city=<name>` - Merged listings (public)
//! - `GET /health`             - Health check (public)
//! - anything else             - `404 {"error": "Not Found"}`
//!
//! # Middleware
//!
//! - **CORS** - Any origin may read every response, errors included
//! - **Tracing** - Structured request/response logging

use crate::api;
use crate::api::handlers::not_found_handler;
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .merge(api::routes::public_routes())
        .fallback(not_found_handler)
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer())
}
