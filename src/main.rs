use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;

use item_service_api::api;
use item_service_api::config::Settings;
use item_service_api::infrastructure::db::wait_for_database;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();

    let settings = Settings::from_env().expect("Failed to load configuration");
    tracing::info!("Starting {} v{}", settings.project_name, settings.version);

    let database_url = settings.database_url();

    // Block until the database accepts connections; exhausting the retry
    // budget is fatal and the process never starts serving.
    wait_for_database(&database_url)
        .await
        .expect("Database never became ready");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Database connected successfully");

    let app = api::router(pool, &settings.api_v1_prefix);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], 8000));
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app).await.expect("Server failed");
}
