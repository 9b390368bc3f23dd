//! Cross-origin policy.

use tower_http::cors::{Any, CorsLayer};

/// Allows any origin, method and header.
///
/// The consumer is a browser UI served from a different origin, and no
/// endpoint uses credentials.
pub fn layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
