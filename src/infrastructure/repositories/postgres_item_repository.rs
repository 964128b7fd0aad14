use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::item::{Item, ItemPatch, NewItem};
use crate::domain::repositories::{ItemRepository, RepositoryError};

/// PostgreSQL implementation of ItemRepository
///
/// Persists items in the `items` table. Queries are checked at runtime and
/// rows are mapped through `Item`'s `FromRow` derive.
pub struct PostgresItemRepository {
    pool: PgPool,
}

impl PostgresItemRepository {
    /// Creates a new PostgresItemRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemRepository for PostgresItemRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Item>, RepositoryError> {
        let item = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, name, description, created_at, updated_at
            FROM items
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    async fn list(&self, skip: i64, limit: i64) -> Result<Vec<Item>, RepositoryError> {
        let items = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, name, description, created_at, updated_at
            FROM items
            ORDER BY id
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(skip)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    async fn create(&self, new_item: NewItem) -> Result<Item, RepositoryError> {
        let item = sqlx::query_as::<_, Item>(
            r#"
            INSERT INTO items (name, description)
            VALUES ($1, $2)
            RETURNING id, name, description, created_at, updated_at
            "#,
        )
        .bind(new_item.name)
        .bind(new_item.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(item)
    }

    async fn update(&self, item: &Item, patch: ItemPatch) -> Result<Item, RepositoryError> {
        let mut updated = item.clone();
        patch.apply(&mut updated);

        let row = sqlx::query_as::<_, Item>(
            r#"
            UPDATE items
            SET name = $2, description = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, description, created_at, updated_at
            "#,
        )
        .bind(updated.id)
        .bind(&updated.name)
        .bind(&updated.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn delete(&self, id: i32) -> Result<Option<Item>, RepositoryError> {
        let item = sqlx::query_as::<_, Item>(
            r#"
            DELETE FROM items
            WHERE id = $1
            RETURNING id, name, description, created_at, updated_at
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }
}
