//! Database layer - pool, first-run schema, repositories

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::create_pool;
pub use repos::DbError;
