//! REST API layer for HTTP request/response handling.
//!
//! # Modules
//!
//! - [`dto`] - Response and query shapes
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - CORS and tracing layers
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
