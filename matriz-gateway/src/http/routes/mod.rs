//! Route handlers organized by resource

pub mod external;
pub mod health;
pub mod library;
pub mod status;
