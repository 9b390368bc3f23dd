//! API route configuration.

use crate::api::handlers::{health_handler, scrape_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Public routes; none require authentication.
///
/// # Endpoints
///
/// - `GET /scrape?city=<name>` - Merged Booking.com and Airbnb listings
/// - `GET /health`             - Liveness and configured sources
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/scrape", get(scrape_handler))
        .route("/health", get(health_handler))
}
