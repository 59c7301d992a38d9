//! Item repository - CRUD over the `item` table
//!
//! Partial updates go through [`ItemUpdate`], a validated field set that
//! feeds a parameterized statement. An empty set is rejected before any
//! SQL is built.

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, MySql, MySqlPool, QueryBuilder};

use super::DbError;

/// Item record from the database
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ItemRow {
    pub id: i32,
    pub description: String,
    pub list_id: Option<i32>,
    pub completed: bool,
}

/// Field set for a partial item update. Only present fields are written.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemUpdate {
    pub description: Option<String>,
    pub completed: Option<bool>,
}

impl ItemUpdate {
    /// True when no recognized field is present.
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.completed.is_none()
    }

    /// Build the parameterized UPDATE for this field set.
    ///
    /// Callers must check [`is_empty`](Self::is_empty) first; an empty set
    /// would produce an invalid statement.
    fn build_query(&self, id: i32) -> QueryBuilder<'_, MySql> {
        let mut qb = QueryBuilder::new("UPDATE item SET ");

        {
            let mut fields = qb.separated(", ");
            if let Some(description) = &self.description {
                fields.push("description = ");
                fields.push_bind_unseparated(description.as_str());
            }
            if let Some(completed) = self.completed {
                fields.push("completed = ");
                fields.push_bind_unseparated(completed);
            }
        }

        qb.push(" WHERE id = ");
        qb.push_bind(id);
        qb
    }
}

/// Item repository
pub struct ItemRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> ItemRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// All items, optionally filtered to a single list.
    pub async fn list(&self, list_id: Option<i32>) -> Result<Vec<ItemRow>, DbError> {
        let rows = match list_id {
            Some(list_id) => {
                sqlx::query_as::<_, ItemRow>("SELECT * FROM item WHERE list_id = ?")
                    .bind(list_id)
                    .fetch_all(self.pool)
                    .await?
            }
            None => {
                sqlx::query_as::<_, ItemRow>("SELECT * FROM item")
                    .fetch_all(self.pool)
                    .await?
            }
        };
        Ok(rows)
    }

    /// Insert an item. `completed` takes the store default (false).
    pub async fn create(
        &self,
        description: &str,
        list_id: Option<i32>,
    ) -> Result<ItemRow, DbError> {
        let result = sqlx::query("INSERT INTO item (description, list_id) VALUES (?, ?)")
            .bind(description)
            .bind(list_id)
            .execute(self.pool)
            .await?;

        Ok(ItemRow {
            id: result.last_insert_id() as i32,
            description: description.to_owned(),
            list_id,
            completed: false,
        })
    }

    /// Apply a non-empty partial update.
    pub async fn update(&self, id: i32, update: &ItemUpdate) -> Result<(), DbError> {
        debug_assert!(!update.is_empty());

        update.build_query(id).build().execute(self.pool).await?;
        Ok(())
    }

    /// Delete an item.
    pub async fn delete(&self, id: i32) -> Result<(), DbError> {
        sqlx::query("DELETE FROM item WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;
        Ok(())
    }
}
