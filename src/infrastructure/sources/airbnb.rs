//! Airbnb search results adapter.
//!
//! Airbnb ships hashed class names that change between deployments, so the
//! card, price and rating selectors below break whenever the site does.

use std::sync::{Arc, LazyLock};

use async_trait::async_trait;
use scraper::{ElementRef, Selector};

use super::extract::{CardError, compile, find, parse_cards, scrape_page, text_of};
use crate::domain::entities::{Listing, ListingSource};
use crate::domain::scrapers::{ListingScraper, PageFetcher};

/// Default origin for Airbnb searches.
pub const AIRBNB_BASE_URL: &str = "https://www.airbnb.com";

static CARD: LazyLock<Selector> = LazyLock::new(|| compile("div.c4mnd7m"));
static TITLE: LazyLock<Selector> =
    LazyLock::new(|| compile(r#"div[data-testid="listing-card-title"]"#));
static PRICE: LazyLock<Selector> = LazyLock::new(|| compile("span._14y1gc"));
static RATING: LazyLock<Selector> = LazyLock::new(|| compile("span.r1v211wb"));

/// Scrapes home cards from an Airbnb search results page.
pub struct AirbnbScraper<F: PageFetcher> {
    fetcher: Arc<F>,
    base_url: String,
}

impl<F: PageFetcher> AirbnbScraper<F> {
    pub fn new(fetcher: Arc<F>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { fetcher, base_url }
    }

    /// Search URL for `city`; spaces become `-`.
    pub fn search_url(&self, city: &str) -> String {
        format!("{}/s/{}/homes", self.base_url, city.replace(' ', "-"))
    }
}

/// Extracts every well-formed listing card from a results page.
pub fn parse_listings(html: &str) -> Vec<Listing> {
    parse_cards(html, &CARD, extract_card)
}

// Rating text reads like "4.92 (318)"; only the score is kept.
fn extract_card(card: ElementRef<'_>) -> Result<Listing, CardError> {
    let name = text_of(find(card, &TITLE, "title")?);
    let price = text_of(find(card, &PRICE, "price")?);
    let rating = text_of(find(card, &RATING, "rating")?);
    let rating = rating.split(' ').next().unwrap_or_default().to_string();

    Ok(Listing::new(name, price, rating, ListingSource::Airbnb))
}

#[async_trait]
impl<F: PageFetcher + 'static> ListingScraper for AirbnbScraper<F> {
    fn source(&self) -> ListingSource {
        ListingSource::Airbnb
    }

    async fn scrape(&self, city: &str) -> Vec<Listing> {
        let url = self.search_url(city);
        scrape_page(self.fetcher.as_ref(), self.source(), city, &url, parse_listings).await
    }
}
