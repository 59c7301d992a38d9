//! Outbound HTTP clients

pub mod purchasing;

pub use purchasing::{PurchasingClient, UpstreamError};
