//! Source adapter contract.

use crate::domain::entities::{Listing, ListingSource};
use async_trait::async_trait;

/// Scrapes one travel site for listings in a city.
///
/// Implementations recover from every failure locally: an unreachable site
/// yields an empty list and a malformed card is skipped, so one source can
/// never fail the request or its sibling sources.
///
/// # Implementations
///
/// - [`crate::infrastructure::sources::BookingScraper`]
/// - [`crate::infrastructure::sources::AirbnbScraper`]
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListingScraper: Send + Sync {
    /// The tag attached to every record this scraper produces.
    fn source(&self) -> ListingSource;

    /// Returns the listings found for `city`, in page order.
    async fn scrape(&self, city: &str) -> Vec<Listing>;
}
