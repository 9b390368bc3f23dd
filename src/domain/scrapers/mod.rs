//! Trait definitions for the scraping seams.
//!
//! - [`ListingScraper`] - One source adapter (Booking, Airbnb)
//! - [`PageFetcher`] - The outbound HTTP GET used by adapters
//!
//! Concrete implementations live in `crate::infrastructure`; mocks are
//! generated via `mockall` for unit tests.

pub mod listing_scraper;
pub mod page_fetcher;

pub use listing_scraper::ListingScraper;
pub use page_fetcher::{FetchError, PageFetcher};

#[cfg(test)]
pub use listing_scraper::MockListingScraper;
#[cfg(test)]
pub use page_fetcher::MockPageFetcher;
