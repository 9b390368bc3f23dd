//! # Stay Scraper
//!
//! A small Axum service that, given a city, scrapes the Booking.com and
//! Airbnb search results pages and returns the listing cards as one JSON array.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The [`domain::entities::Listing`] record and the scraper traits
//! - **Application Layer** ([`application`]) - Merging results across sources
//! - **Infrastructure Layer** ([`infrastructure`]) - `reqwest` fetcher and the per-site HTML adapters
//! - **API Layer** ([`api`]) - Handlers, DTOs and middleware
//!
//! ## Endpoints
//!
//! - `GET /scrape?city=Paris` - Booking.com records first, then Airbnb records
//! - `GET /health` - Liveness
//!
//! ## Failure Model
//!
//! Each source fails on its own: an unreachable site contributes no records,
//! and a card missing a required element is skipped. Only a missing `city`
//! produces an error response.
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ScrapeService;
    pub use crate::domain::entities::{Listing, ListingSource};
    pub use crate::domain::scrapers::{ListingScraper, PageFetcher};
    pub use crate::error::AppError;
    pub use crate::infrastructure::http::HttpPageFetcher;
    pub use crate::infrastructure::sources::{AirbnbScraper, BookingScraper};
    pub use crate::state::AppState;
}
