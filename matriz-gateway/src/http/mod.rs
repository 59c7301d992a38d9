//! HTTP server layer
//!
//! Axum server with request tracing, graceful shutdown, and one central
//! error-to-response translation for every route.

pub mod error;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{run_server, AppState};
