//! Repositories - parameterized statements over the store tables

pub mod items;
pub mod lists;

pub use items::{ItemRepo, ItemRow, ItemUpdate};
pub use lists::{ListRepo, ListRow};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("{0}")]
    Sqlx(#[from] sqlx::Error),
}
