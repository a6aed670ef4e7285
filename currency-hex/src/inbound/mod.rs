//! HTTP Inbound Adapter
//!
//! Axum-based HTTP server that drives the application layer.

mod handlers;
pub mod negotiation;
mod server;

pub use handlers::{ApiError, AppState, MAX_BODY_BYTES};
pub use server::HttpServer;
