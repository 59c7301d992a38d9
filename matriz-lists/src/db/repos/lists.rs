//! List repository - CRUD over the `lista` table

use serde::Serialize;
use sqlx::{FromRow, MySqlPool};

use super::DbError;

/// List record from the database
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ListRow {
    pub id: i32,
    pub name: String,
}

/// List repository
pub struct ListRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> ListRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// All lists, store-default order.
    pub async fn list(&self) -> Result<Vec<ListRow>, DbError> {
        let rows = sqlx::query_as::<_, ListRow>("SELECT * FROM lista")
            .fetch_all(self.pool)
            .await?;
        Ok(rows)
    }

    /// Insert a list, returning the generated id.
    pub async fn create(&self, name: &str) -> Result<ListRow, DbError> {
        let result = sqlx::query("INSERT INTO lista (name) VALUES (?)")
            .bind(name)
            .execute(self.pool)
            .await?;

        Ok(ListRow {
            id: result.last_insert_id() as i32,
            name: name.to_owned(),
        })
    }

    /// Rename a list. Succeeds even when no row matched.
    pub async fn update(&self, id: i32, name: &str) -> Result<(), DbError> {
        sqlx::query("UPDATE lista SET name = ? WHERE id = ?")
            .bind(name)
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(())
    }

    /// Delete a list. Items referencing it cascade at the store level.
    pub async fn delete(&self, id: i32) -> Result<(), DbError> {
        sqlx::query("DELETE FROM lista WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, schema};

    // Integration tests - run with DATABASE_URL set
    // cargo test -p matriz-lists -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_then_list_includes_name() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        schema::init(&pool).await.expect("schema init failed");

        let repo = ListRepo::new(&pool);
        let created = repo.create("groceries").await.expect("create failed");
        assert!(created.id > 0);

        let all = repo.list().await.expect("list failed");
        assert!(all.iter().any(|l| l.id == created.id && l.name == "groceries"));

        repo.delete(created.id).await.expect("cleanup failed");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_missing_row_is_ok() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        schema::init(&pool).await.expect("schema init failed");

        // No row with this id; the store reports success regardless.
        ListRepo::new(&pool)
            .update(i32::MAX, "renamed")
            .await
            .expect("update failed");
    }
}
