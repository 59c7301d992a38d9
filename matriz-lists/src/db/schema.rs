//! First-run table creation for the list store
//!
//! The service owns its schema: `lista` and `item`, with item rows
//! cascading on list deletion. Idempotent, runs at every startup.

use sqlx::MySqlPool;

use super::DbError;

/// Create the `lista` and `item` tables if they do not exist.
pub async fn init(pool: &MySqlPool) -> Result<(), DbError> {
    tracing::info!("Initializing list store tables...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS lista (
            id INT AUTO_INCREMENT PRIMARY KEY,
            name VARCHAR(255) NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS item (
            id INT AUTO_INCREMENT PRIMARY KEY,
            description VARCHAR(255) NOT NULL,
            list_id INT,
            completed BOOLEAN DEFAULT FALSE,
            FOREIGN KEY (list_id) REFERENCES lista(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("List store tables ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_pool;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn init_is_idempotent() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");

        init(&pool).await.expect("first init failed");
        init(&pool).await.expect("second init failed");
    }
}
