//! Core domain entities.
//!
//! - [`Listing`] - A normalized property card from one source
//! - [`ListingSource`] - The site a listing came from

pub mod listing;

pub use listing::{Listing, ListingSource, RATING_NOT_AVAILABLE};
