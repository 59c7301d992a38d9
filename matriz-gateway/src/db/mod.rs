//! Data access for the gateway's two direct backends
//!
//! The library schema lives on a MySQL primary/replica pair (reads on the
//! replica, writes on the primary); the hospital store is PostgreSQL behind
//! HAProxy. Pools are created lazily so a dead backend degrades the status
//! endpoint instead of aborting boot.

pub mod hospital;
pub mod library;

pub use hospital::HospitalDb;
pub use library::LibraryDb;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("{0}")]
    Sqlx(#[from] sqlx::Error),
}
