//! Application layer services.
//!
//! Services consume the domain traits and give HTTP handlers a single call
//! per use case.
//!
//! # Available Services
//!
//! - [`services::scrape_service::ScrapeService`] - Multi-source city search

pub mod services;
