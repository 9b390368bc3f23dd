//! Outbound HTTP.
//!
//! - [`HttpPageFetcher`] - Production [`crate::domain::scrapers::PageFetcher`]

mod http_page_fetcher;

pub use http_page_fetcher::{HttpPageFetcher, USER_AGENT};
