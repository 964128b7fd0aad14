// API layer module (adapters for controllers)
// The HTTP surface is an adapter over the domain repositories

use axum::routing::get;
use axum::Router;
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod errors;
pub mod handlers;

use handlers::items;

/// Builds the service router
///
/// Item routes are mounted under `{api_prefix}/items`; the liveness probe
/// stays at `/health`.
pub fn router(pool: PgPool, api_prefix: &str) -> Router {
    let items_routes = Router::new()
        .route("/", get(items::list_items).post(items::create_item))
        .route(
            "/:item_id",
            get(items::get_item)
                .put(items::update_item)
                .delete(items::delete_item),
        );

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(items::health_check))
        .nest(&format!("{}/items", api_prefix), items_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(pool)
}
