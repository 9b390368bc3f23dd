//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! A `.env` file in the working directory is honoured (loaded by `main.rs`).
//!
//! ## Variables
//!
//! All variables are optional:
//!
//! - `LISTEN` - Bind address (default: `127.0.0.1:5001`)
//! - `RUST_LOG` - Log filter (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `BOOKING_BASE_URL` - Booking.com origin (default: `https://www.booking.com`)
//! - `AIRBNB_BASE_URL` - Airbnb origin (default: `https://www.airbnb.com`)
//! - `UPSTREAM_TIMEOUT_SECS` - Per-request timeout for outbound fetches (default: none)
//! - `SCRAPE_CONCURRENTLY` - Scrape both sites at once (default: `false`)
//!
//! ```bash
//! export LISTEN="0.0.0.0:8080"
//! export UPSTREAM_TIMEOUT_SECS=20
//! export SCRAPE_CONCURRENTLY=true
//! ```

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;
use url::Url;

use crate::infrastructure::sources::{AIRBNB_BASE_URL, BOOKING_BASE_URL};

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Origin the Booking.com adapter searches under.
    pub booking_base_url: String,
    /// Origin the Airbnb adapter searches under.
    pub airbnb_base_url: String,
    /// Timeout applied to each outbound request. `None` waits for the
    /// connection to resolve or fail on its own.
    pub upstream_timeout_secs: Option<u64>,
    /// When true, both sources are scraped concurrently. The response order
    /// (Booking.com first, then Airbnb) is the same either way.
    pub scrape_concurrently: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:5001".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            booking_base_url: BOOKING_BASE_URL.to_string(),
            airbnb_base_url: AIRBNB_BASE_URL.to_string(),
            upstream_timeout_secs: None,
            scrape_concurrently: false,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables, falling back to
    /// [`Config::default`] for anything unset.
    ///
    /// # Errors
    ///
    /// Returns an error if `UPSTREAM_TIMEOUT_SECS` is set but not a number.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let booking_base_url = env::var("BOOKING_BASE_URL").unwrap_or(defaults.booking_base_url);
        let airbnb_base_url = env::var("AIRBNB_BASE_URL").unwrap_or(defaults.airbnb_base_url);

        let upstream_timeout_secs = match env::var("UPSTREAM_TIMEOUT_SECS") {
            Ok(v) if !v.trim().is_empty() => Some(
                v.trim()
                    .parse::<u64>()
                    .with_context(|| format!("UPSTREAM_TIMEOUT_SECS must be a number, got '{v}'"))?,
            ),
            _ => None,
        };

        let scrape_concurrently = env::var("SCRAPE_CONCURRENTLY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            booking_base_url,
            airbnb_base_url,
            upstream_timeout_secs,
            scrape_concurrently,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - a base URL is not an absolute `http`/`https` URL
    /// - `upstream_timeout_secs` is zero
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        validate_base_url("BOOKING_BASE_URL", &self.booking_base_url)?;
        validate_base_url("AIRBNB_BASE_URL", &self.airbnb_base_url)?;

        if self.upstream_timeout_secs == Some(0) {
            anyhow::bail!("UPSTREAM_TIMEOUT_SECS must be greater than 0");
        }

        Ok(())
    }

    /// Outbound request timeout, if configured.
    pub fn upstream_timeout(&self) -> Option<Duration> {
        self.upstream_timeout_secs.map(Duration::from_secs)
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Booking.com: {}", self.booking_base_url);
        tracing::info!("  Airbnb: {}", self.airbnb_base_url);

        match self.upstream_timeout_secs {
            Some(secs) => tracing::info!("  Upstream timeout: {secs}s"),
            None => tracing::info!("  Upstream timeout: none"),
        }

        tracing::info!(
            "  Scrape mode: {}",
            if self.scrape_concurrently {
                "concurrent"
            } else {
                "sequential"
            }
        );
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn validate_base_url(name: &str, value: &str) -> Result<()> {
    let url = Url::parse(value).with_context(|| format!("{name} is not a valid URL: '{value}'"))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        anyhow::bail!("{name} must use http or https, got '{value}'");
    }

    Ok(())
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
