use std::sync::Arc;

use crate::application::services::ScrapeService;

/// Shared handler state; cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub scrape_service: Arc<ScrapeService>,
}

impl AppState {
    pub fn new(scrape_service: Arc<ScrapeService>) -> Self {
        Self { scrape_service }
    }
}
