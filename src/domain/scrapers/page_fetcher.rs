//! Outbound page download abstraction.

use async_trait::async_trait;

/// Errors raised while downloading a search results page.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("{url} responded with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("failed to read response body from {url}: {message}")]
    Body { url: String, message: String },
}

/// Downloads an HTML document with a single GET request.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpPageFetcher`] - `reqwest` client with a desktop user agent
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches `url` and returns the response body.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Transport`] on network/DNS failures,
    /// [`FetchError::Status`] when the final response is 4xx or 5xx.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}
