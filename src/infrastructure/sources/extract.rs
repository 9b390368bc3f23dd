//! Card extraction helpers shared by the HTML source adapters.

use crate::domain::entities::{Listing, ListingSource};
use crate::domain::scrapers::PageFetcher;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info, trace, warn};

/// Reasons a single card is dropped from the results.
#[derive(Debug, thiserror::Error)]
pub enum CardError {
    #[error("card has no {0} element")]
    MissingElement(&'static str),
}

/// Compiles one of the adapters' fixed selectors.
pub(crate) fn compile(css: &'static str) -> Selector {
    Selector::parse(css).expect("static selector is valid")
}

/// Returns the first descendant of `scope` matching `selector`, in document order.
pub(crate) fn find<'a>(
    scope: ElementRef<'a>,
    selector: &Selector,
    field: &'static str,
) -> Result<ElementRef<'a>, CardError> {
    scope
        .select(selector)
        .next()
        .ok_or(CardError::MissingElement(field))
}

/// All descendant text of `element`, concatenated and trimmed.
pub(crate) fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Parses `html` and runs `extract` on every node matching `card`.
///
/// Cards that fail extraction are skipped; the rest are returned in
/// document order.
pub(crate) fn parse_cards<F>(html: &str, card: &Selector, extract: F) -> Vec<Listing>
where
    F: Fn(ElementRef<'_>) -> Result<Listing, CardError>,
{
    let document = Html::parse_document(html);

    document
        .select(card)
        .filter_map(|node| match extract(node) {
            Ok(listing) => Some(listing),
            Err(e) => {
                trace!(error = %e, "skipping card");
                None
            }
        })
        .collect()
}

/// Downloads `url` and parses it with `parse`.
///
/// Any fetch failure is logged and turned into an empty result so the
/// calling adapter never fails.
pub(crate) async fn scrape_page<F>(
    fetcher: &F,
    source: ListingSource,
    city: &str,
    url: &str,
    parse: fn(&str) -> Vec<Listing>,
) -> Vec<Listing>
where
    F: PageFetcher + ?Sized,
{
    info!(%source, %city, "Scraping {source} for {city}");

    let html = match fetcher.fetch(url).await {
        Ok(html) => html,
        Err(e) => {
            warn!(%source, error = %e, "Error making request to {source}");
            return Vec::new();
        }
    };

    let listings = parse(&html);
    let unrated = listings.iter().filter(|l| l.is_unrated()).count();
    debug!(%source, count = listings.len(), unrated, "extracted listings");

    listings
}
