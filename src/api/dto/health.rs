//! DTOs for health check endpoint.

use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Source tags in the order their records appear in `/scrape` responses.
    pub sources: Vec<String>,
}
