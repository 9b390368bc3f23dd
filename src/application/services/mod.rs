//! Business logic services for the application layer.

pub mod scrape_service;

pub use scrape_service::ScrapeService;
