use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::api::errors::ApiError;
use crate::domain::item::{Item, ItemPatch, NewItem};
use crate::domain::repositories::ItemRepository;
use crate::infrastructure::repositories::PostgresItemRepository;

/// Pagination parameters for listing items
#[derive(Debug, Deserialize)]
pub struct ListItemsQuery {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    100
}

/// Request body for creating an item
#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub name: String,
    pub description: Option<String>,
}

/// Request body for updating an item
///
/// An omitted `description` leaves the stored value unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateItemRequest {
    pub name: String,
    pub description: Option<String>,
}

impl UpdateItemRequest {
    fn into_patch(self) -> ItemPatch {
        ItemPatch {
            name: Some(self.name),
            description: self.description,
        }
    }
}

/// Item representation returned by every route
#[derive(Debug, Serialize)]
pub struct ItemResponse {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<&Item> for ItemResponse {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            description: item.description.clone(),
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

/// List items with offset/limit pagination
///
/// GET /api/v1/items/
pub async fn list_items(
    State(pool): State<PgPool>,
    Query(query): Query<ListItemsQuery>,
) -> Result<Json<Vec<ItemResponse>>, ApiError> {
    let repo = PostgresItemRepository::new(pool);
    let items = repo
        .list(query.skip, query.limit)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?;

    let responses = items.iter().map(ItemResponse::from).collect();

    Ok(Json(responses))
}

/// Create a new item
///
/// POST /api/v1/items/
pub async fn create_item(
    State(pool): State<PgPool>,
    Json(req): Json<CreateItemRequest>,
) -> Result<(StatusCode, Json<ItemResponse>), ApiError> {
    let repo = PostgresItemRepository::new(pool);
    let item = repo
        .create(NewItem {
            name: req.name,
            description: req.description,
        })
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to create item: {}", e)))?;

    Ok((StatusCode::CREATED, Json(ItemResponse::from(&item))))
}

/// Get an item by ID
///
/// GET /api/v1/items/:item_id
pub async fn get_item(
    State(pool): State<PgPool>,
    Path(item_id): Path<i32>,
) -> Result<Json<ItemResponse>, ApiError> {
    let repo = PostgresItemRepository::new(pool);
    let item = repo
        .find_by_id(item_id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?
        .ok_or_else(|| ApiError::not_found("Item not found"))?;

    Ok(Json(ItemResponse::from(&item)))
}

/// Update an item
///
/// PUT /api/v1/items/:item_id
pub async fn update_item(
    State(pool): State<PgPool>,
    Path(item_id): Path<i32>,
    Json(req): Json<UpdateItemRequest>,
) -> Result<Json<ItemResponse>, ApiError> {
    let repo = PostgresItemRepository::new(pool);
    let item = repo
        .find_by_id(item_id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?
        .ok_or_else(|| ApiError::not_found("Item not found"))?;

    let updated = repo
        .update(&item, req.into_patch())
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to update item: {}", e)))?;

    Ok(Json(ItemResponse::from(&updated)))
}

/// Delete an item, returning the removed record
///
/// DELETE /api/v1/items/:item_id
pub async fn delete_item(
    State(pool): State<PgPool>,
    Path(item_id): Path<i32>,
) -> Result<Json<ItemResponse>, ApiError> {
    let repo = PostgresItemRepository::new(pool);
    let item = repo
        .delete(item_id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to delete item: {}", e)))?
        .ok_or_else(|| ApiError::not_found("Item not found"))?;

    Ok(Json(ItemResponse::from(&item)))
}

/// Health check endpoint
///
/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}
