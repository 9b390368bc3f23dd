//! Infrastructure layer for external integrations.
//!
//! Implements the traits defined in [`crate::domain::scrapers`].
//!
//! # Modules
//!
//! - [`http`] - `reqwest` page fetcher
//! - [`sources`] - Booking.com and Airbnb HTML adapters

pub mod http;
pub mod sources;
