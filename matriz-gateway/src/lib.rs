//! matriz-gateway: aggregation middleware
//!
//! Fronts three independently-owned backends behind one REST surface:
//! the library schema on read/write MySQL replicas, the purchasing
//! list store over HTTP, and the hospital PostgreSQL store. Also serves
//! the dashboard's combined liveness probe.

pub mod config;
pub mod db;
pub mod http;
pub mod outbound;

pub use config::Config;
pub use http::error::ApiError;
