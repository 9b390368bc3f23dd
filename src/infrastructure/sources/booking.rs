//! Booking.com search results adapter.

use std::sync::{Arc, LazyLock};

use async_trait::async_trait;
use scraper::{ElementRef, Selector};

use super::extract::{CardError, compile, find, parse_cards, scrape_page, text_of};
use crate::domain::entities::{Listing, ListingSource, RATING_NOT_AVAILABLE};
use crate::domain::scrapers::{ListingScraper, PageFetcher};

/// Default origin for Booking.com searches.
pub const BOOKING_BASE_URL: &str = "https://www.booking.com";

static CARD: LazyLock<Selector> =
    LazyLock::new(|| compile(r#"div[data-testid="property-card"]"#));
static TITLE: LazyLock<Selector> = LazyLock::new(|| compile(r#"div[data-testid="title"]"#));
static PRICE: LazyLock<Selector> =
    LazyLock::new(|| compile(r#"span[data-testid="price-and-discounted-price"]"#));
static REVIEW_SCORE: LazyLock<Selector> =
    LazyLock::new(|| compile(r#"div[data-testid="review-score"]"#));
static REVIEW_VALUE: LazyLock<Selector> = LazyLock::new(|| compile("div"));

/// Scrapes hotel cards from a Booking.com search results page.
pub struct BookingScraper<F: PageFetcher> {
    fetcher: Arc<F>,
    base_url: String,
}

impl<F: PageFetcher> BookingScraper<F> {
    /// Creates an adapter searching under `base_url` (trailing `/` ignored).
    pub fn new(fetcher: Arc<F>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { fetcher, base_url }
    }

    /// Search URL for `city`; spaces become `+`.
    pub fn search_url(&self, city: &str) -> String {
        format!(
            "{}/searchresults.html?ss={}",
            self.base_url,
            city.replace(' ', "+")
        )
    }
}

/// Extracts every well-formed property card from a results page.
pub fn parse_listings(html: &str) -> Vec<Listing> {
    parse_cards(html, &CARD, extract_card)
}

/// Reads one property card.
///
/// A card without a review block is rated [`RATING_NOT_AVAILABLE`]; a review
/// block without its inner value makes the card malformed.
fn extract_card(card: ElementRef<'_>) -> Result<Listing, CardError> {
    let name = text_of(find(card, &TITLE, "title")?);
    let price = text_of(find(card, &PRICE, "price")?);

    let rating = match card.select(&REVIEW_SCORE).next() {
        Some(score) => text_of(find(score, &REVIEW_VALUE, "review score value")?),
        None => RATING_NOT_AVAILABLE.to_string(),
    };

    Ok(Listing::new(name, price, rating, ListingSource::Booking))
}

#[async_trait]
impl<F: PageFetcher + 'static> ListingScraper for BookingScraper<F> {
    fn source(&self) -> ListingSource {
        ListingSource::Booking
    }

    async fn scrape(&self, city: &str) -> Vec<Listing> {
        let url = self.search_url(city);
        scrape_page(
            self.fetcher.as_ref(),
            self.source(),
            city,
            &url,
            parse_listings,
        )
        .await
    }
}
