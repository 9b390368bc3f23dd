//! Listing entity produced by every source adapter.

use std::fmt;

/// Placeholder used when a source exposes no rating for a card.
pub const RATING_NOT_AVAILABLE: &str = "N/A";

/// The site a listing was scraped from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListingSource {
    Booking,
    Airbnb,
}

impl ListingSource {
    /// Fixed tag emitted in the `source` field of every record.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Booking => "Booking.com",
            Self::Airbnb => "Airbnb",
        }
    }
}

impl fmt::Display for ListingSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single property card extracted from a search results page.
///
/// All text fields are kept exactly as scraped (trimmed); prices and ratings
/// are not normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub name: String,
    pub price: String,
    pub rating: String,
    pub source: ListingSource,
}

impl Listing {
    pub fn new(
        name: impl Into<String>,
        price: impl Into<String>,
        rating: impl Into<String>,
        source: ListingSource,
    ) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            rating: rating.into(),
            source,
        }
    }

    /// Returns true when the source had no rating for this card.
    pub fn is_unrated(&self) -> bool {
        self.rating == RATING_NOT_AVAILABLE
    }
}
