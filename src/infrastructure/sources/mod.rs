//! HTML source adapters.
//!
//! Each adapter implements [`crate::domain::scrapers::ListingScraper`] for one
//! site. Selectors are private to their adapter so a markup change on one site
//! cannot affect the other.
//!
//! - [`BookingScraper`] - Booking.com search results
//! - [`AirbnbScraper`] - Airbnb search results

pub mod airbnb;
pub mod booking;
mod extract;

pub use airbnb::{AIRBNB_BASE_URL, AirbnbScraper};
pub use booking::{BOOKING_BASE_URL, BookingScraper};
pub use extract::CardError;
