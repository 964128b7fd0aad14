use async_trait::async_trait;
use thiserror::Error;

use crate::domain::item::{Item, ItemPatch, NewItem};

/// Errors surfaced by repository implementations
///
/// Not-found is never an error at this layer; lookups return `Ok(None)`.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Repository trait for the Item resource
///
/// Defines the contract for persisting and retrieving items.
/// Implementations handle database-specific details. Every operation is a
/// single statement; no multi-operation atomicity is provided.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Find an item by its ID
    async fn find_by_id(&self, id: i32) -> Result<Option<Item>, RepositoryError>;

    /// List items in insertion order, skipping `skip` rows and returning at
    /// most `limit`
    async fn list(&self, skip: i64, limit: i64) -> Result<Vec<Item>, RepositoryError>;

    /// Persist a new item and return it with its generated `id` and
    /// `created_at`
    async fn create(&self, new_item: NewItem) -> Result<Item, RepositoryError>;

    /// Apply `patch` to an already-fetched item and persist the result,
    /// refreshing `updated_at`
    async fn update(&self, item: &Item, patch: ItemPatch) -> Result<Item, RepositoryError>;

    /// Delete an item by ID, returning the removed row, or `None` if no row
    /// matched
    async fn delete(&self, id: i32) -> Result<Option<Item>, RepositoryError>;
}
