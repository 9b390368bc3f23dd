#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use axum_test::TestServer;
use stay_scraper::application::services::ScrapeService;
use stay_scraper::config::Config;
use stay_scraper::routes::app_router;
use stay_scraper::server::build_scrape_service;
use stay_scraper::state::AppState;

/// Pages served by the fake upstream. `None` answers 503.
///
/// Occurrences of `{city}` in the Airbnb page are replaced with the city path
/// segment of the request, and `{user_agent}` with the request's `User-Agent`
/// header, so tests can observe what the fetcher actually sent.
#[derive(Clone, Default)]
pub struct FixturePages {
    pub booking: Option<String>,
    pub airbnb: Option<String>,
}

async fn booking_page(State(pages): State<Arc<FixturePages>>) -> Response {
    match &pages.booking {
        Some(html) => Html(html.clone()).into_response(),
        None => StatusCode::SERVICE_UNAVAILABLE.into_response(),
    }
}

async fn airbnb_page(
    State(pages): State<Arc<FixturePages>>,
    Path(city): Path<String>,
    headers: HeaderMap,
) -> Response {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    match &pages.airbnb {
        Some(html) => Html(
            html.replace("{city}", &city)
                .replace("{user_agent}", user_agent),
        )
        .into_response(),
        None => StatusCode::SERVICE_UNAVAILABLE.into_response(),
    }
}

/// Starts a fake Booking.com + Airbnb origin on an ephemeral port and returns
/// its base URL.
pub async fn spawn_upstream(pages: FixturePages) -> String {
    let app = Router::new()
        .route("/searchresults.html", get(booking_page))
        .route("/s/{city}/homes", get(airbnb_page))
        .with_state(Arc::new(pages));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

/// A base URL nothing listens on; connecting fails with "connection refused".
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    format!("http://{addr}")
}

pub fn create_test_config(booking_base_url: &str, airbnb_base_url: &str) -> Config {
    Config {
        booking_base_url: booking_base_url.to_string(),
        airbnb_base_url: airbnb_base_url.to_string(),
        upstream_timeout_secs: Some(10),
        ..Config::default()
    }
}

pub fn create_test_server(config: &Config) -> TestServer {
    let service = build_scrape_service(config).unwrap();
    let state = AppState::new(Arc::new(service));

    TestServer::new(app_router(state)).unwrap()
}

pub fn create_empty_server() -> TestServer {
    let state = AppState::new(Arc::new(ScrapeService::new(Vec::new())));

    TestServer::new(app_router(state)).unwrap()
}

pub fn booking_card(name: &str, price: Option<&str>, rating: Option<&str>) -> String {
    let price = price
        .map(|p| format!(r#"<span data-testid="price-and-discounted-price">{p}</span>"#))
        .unwrap_or_default();
    let rating = rating
        .map(|r| format!(r#"<div data-testid="review-score"><div>{r}</div></div>"#))
        .unwrap_or_default();

    format!(
        r#"<div data-testid="property-card"><div data-testid="title">{name}</div>{price}{rating}</div>"#
    )
}

pub fn airbnb_card(name: &str, price: Option<&str>, rating: Option<&str>) -> String {
    let price = price
        .map(|p| format!(r#"<span class="_14y1gc">{p}</span>"#))
        .unwrap_or_default();
    let rating = rating
        .map(|r| format!(r#"<span class="r1v211wb">{r}</span>"#))
        .unwrap_or_default();

    format!(
        r#"<div class="c4mnd7m"><div data-testid="listing-card-title">{name}</div>{price}{rating}</div>"#
    )
}

pub fn results_page(cards: &[String]) -> String {
    format!(
        "<!DOCTYPE html><html><head><title>Results</title></head><body>{}</body></html>",
        cards.concat()
    )
}
