//! Domain layer: the listing model and the traits adapters implement.
//!
//! - [`entities`] - [`entities::Listing`] and its source tag
//! - [`scrapers`] - [`scrapers::ListingScraper`] and [`scrapers::PageFetcher`]
//!
//! The domain layer has no dependency on HTTP clients, HTML parsers or the
//! web framework.

pub mod entities;
pub mod scrapers;
