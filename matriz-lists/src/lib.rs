//! matriz-lists: shopping list service
//!
//! Standalone CRUD over two record types (lists and their items),
//! backed by MariaDB. Consumed directly by the purchasing frontend and
//! proxied by matriz-gateway under `/api/externo/app1/*`.

pub mod config;
pub mod db;
pub mod http;

pub use config::Config;
pub use http::error::ApiError;
