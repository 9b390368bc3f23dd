//! DTOs for the scrape endpoint.

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::domain::entities::Listing;

/// Query string of `GET /scrape`.
///
/// `city` stays optional here so that a missing parameter reaches the handler
/// and is reported with the API's own error body.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ScrapeQuery {
    pub city: Option<String>,
}

impl ScrapeQuery {
    /// Reads the raw query string. Unknown keys are ignored and a repeated
    /// `city` keeps its first value.
    pub fn from_raw(raw: Option<&str>) -> Self {
        let city = raw.and_then(|raw| {
            form_urlencoded::parse(raw.as_bytes())
                .find(|(key, _)| key == "city")
                .map(|(_, value)| value.into_owned())
        });

        Self { city }
    }
}

/// One listing as serialized in the response array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingResponse {
    pub name: String,
    pub price: String,
    pub rating: String,
    pub source: String,
}

impl From<Listing> for ListingResponse {
    fn from(listing: Listing) -> Self {
        Self {
            name: listing.name,
            price: listing.price,
            rating: listing.rating,
            source: listing.source.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ListingSource;
    use serde_json::json;

    #[test]
    fn test_query_keeps_first_city() {
        let query = ScrapeQuery::from_raw(Some("city=Paris&city=London"));

        assert_eq!(query.city.as_deref(), Some("Paris"));
    }

    #[test]
    fn test_query_decodes_city() {
        assert_eq!(
            ScrapeQuery::from_raw(Some("foo=1&city=New+York")).city.as_deref(),
            Some("New York")
        );
        assert_eq!(
            ScrapeQuery::from_raw(Some("city=S%C3%A3o%20Paulo")).city.as_deref(),
            Some("São Paulo")
        );
    }

    #[test]
    fn test_query_without_city() {
        assert_eq!(ScrapeQuery::from_raw(None), ScrapeQuery::default());
        assert_eq!(ScrapeQuery::from_raw(Some("town=Paris")).city, None);
        assert_eq!(ScrapeQuery::from_raw(Some("city=")).city.as_deref(), Some(""));
    }

    #[test]
    fn test_listing_serializes_with_source_tag() {
        let listing = Listing::new("Hotel Test", "$100", "8.5", ListingSource::Booking);

        let value = serde_json::to_value(ListingResponse::from(listing)).unwrap();

        assert_eq!(
            value,
            json!({
                "name": "Hotel Test",
                "price": "$100",
                "rating": "8.5",
                "source": "Booking.com"
            })
        );
    }

    #[test]
    fn test_field_order_is_stable() {
        let listing = Listing::new("Loft", "$90", "4.9", ListingSource::Airbnb);

        let text = serde_json::to_string(&ListingResponse::from(listing)).unwrap();

        assert_eq!(
            text,
            r#"{"name":"Loft","price":"$90","rating":"4.9","source":"Airbnb"}"#
        );
    }
}
