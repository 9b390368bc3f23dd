//! Handler for the city scrape endpoint.

use axum::{
    Json,
    extract::{RawQuery, State},
};

use crate::api::dto::scrape::{ListingResponse, ScrapeQuery};
use crate::error::AppError;
use crate::state::AppState;

/// Scrapes every source for a city and returns the merged listings.
///
/// # Endpoint
///
/// `GET /scrape?city=<name>`
///
/// # Response
///
/// `200 OK` with Booking.com records first, then Airbnb records. An empty
/// array is still a success; an unreachable source simply contributes nothing.
///
/// ```json
/// [
///   { "name": "Hotel Test", "price": "$100", "rating": "8.5", "source": "Booking.com" },
///   { "name": "Loft", "price": "$90", "rating": "4.9", "source": "Airbnb" }
/// ]
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request with `{"error": "A 'city' parameter is required."}`
/// when `city` is missing or empty. If `city` is repeated, the first value is used.
pub async fn scrape_handler(
    State(state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Result<Json<Vec<ListingResponse>>, AppError> {
    let query = ScrapeQuery::from_raw(raw.as_deref());

    let city = query
        .city
        .filter(|city| !city.is_empty())
        .ok_or(AppError::MissingParameter("city"))?;

    let listings = state.scrape_service.scrape_city(&city).await;

    Ok(Json(listings.into_iter().map(ListingResponse::from).collect()))
}
