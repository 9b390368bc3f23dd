//! HTTP request handlers for API endpoints.

pub mod health;
pub mod scrape;

use crate::error::AppError;

pub use health::health_handler;
pub use scrape::scrape_handler;

/// Fallback for unknown routes.
pub async fn not_found_handler() -> AppError {
    AppError::NotFound
}
