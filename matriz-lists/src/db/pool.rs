//! Database connection pool management
//!
//! Uses sqlx MySqlPool with explicit connection limits.

use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;

/// Default maximum connections for the pool.
/// Matches the deployed store's limit.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Create a MariaDB/MySQL connection pool.
///
/// # Errors
///
/// Returns an error if the connection fails.
pub async fn create_pool(database_url: &str) -> Result<MySqlPool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a connection pool with a custom connection limit.
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<MySqlPool, sqlx::Error> {
    MySqlPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests require a real database
    // Run with: DATABASE_URL=mysql://... cargo test -p matriz-lists -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn pool_acquires_connection() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");

        sqlx::query("SELECT 1")
            .execute(&pool)
            .await
            .expect("query failed");
    }
}
