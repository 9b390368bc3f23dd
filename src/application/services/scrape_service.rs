//! City search orchestration across all registered sources.

use std::sync::Arc;

use futures::future::join_all;
use tracing::info;

use crate::domain::entities::{Listing, ListingSource};
use crate::domain::scrapers::ListingScraper;

/// Runs every registered [`ListingScraper`] for a city and merges the results.
///
/// The merged list always follows registration order: all records of the
/// first scraper, then all records of the second, and so on. This holds in
/// both sequential and concurrent mode.
pub struct ScrapeService {
    scrapers: Vec<Arc<dyn ListingScraper>>,
    concurrent: bool,
}

impl ScrapeService {
    /// Creates a sequential service over `scrapers`, in merge order.
    pub fn new(scrapers: Vec<Arc<dyn ListingScraper>>) -> Self {
        Self {
            scrapers,
            concurrent: false,
        }
    }

    /// Runs scrapers concurrently instead of one after another.
    pub fn with_concurrency(mut self, concurrent: bool) -> Self {
        self.concurrent = concurrent;
        self
    }

    /// Sources served by this service, in merge order.
    pub fn sources(&self) -> Vec<ListingSource> {
        self.scrapers.iter().map(|s| s.source()).collect()
    }

    /// Scrapes `city` on every source and concatenates the results.
    ///
    /// Never fails: a source that cannot be reached contributes no records.
    pub async fn scrape_city(&self, city: &str) -> Vec<Listing> {
        let per_source = if self.concurrent {
            join_all(self.scrapers.iter().map(|s| s.scrape(city))).await
        } else {
            let mut results = Vec::with_capacity(self.scrapers.len());
            for scraper in &self.scrapers {
                results.push(scraper.scrape(city).await);
            }
            results
        };

        let listings: Vec<Listing> = per_source.into_iter().flatten().collect();
        info!(%city, total = listings.len(), "scrape finished");

        listings
    }
}
