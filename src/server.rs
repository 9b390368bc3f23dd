//! HTTP server initialization and runtime setup.
//!
//! Builds the shared HTTP client, wires the source adapters into the scrape
//! service, and runs the Axum server until Ctrl-C or SIGTERM.

use crate::application::services::ScrapeService;
use crate::config::Config;
use crate::domain::scrapers::ListingScraper;
use crate::infrastructure::http::HttpPageFetcher;
use crate::infrastructure::sources::{AirbnbScraper, BookingScraper};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the scrape service for `config`.
///
/// Booking.com is registered first, so its records always precede Airbnb's.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be constructed.
pub fn build_scrape_service(config: &Config) -> Result<ScrapeService> {
    let fetcher = Arc::new(HttpPageFetcher::new(config.upstream_timeout())?);

    let scrapers: Vec<Arc<dyn ListingScraper>> = vec![
        Arc::new(BookingScraper::new(
            fetcher.clone(),
            config.booking_base_url.as_str(),
        )),
        Arc::new(AirbnbScraper::new(fetcher, config.airbnb_base_url.as_str())),
    ];

    Ok(ScrapeService::new(scrapers).with_concurrency(config.scrape_concurrently))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client cannot be built
/// - The listen address is invalid or cannot be bound
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let scrape_service = build_scrape_service(&config)?;
    tracing::info!(
        sources = ?scrape_service.sources(),
        "Scrape service ready"
    );

    let state = AppState::new(Arc::new(scrape_service));
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down cleanly");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
