use axum::{Extension, Router, routing::get};
use food_search::config::Config;
use food_search::ingestion::loader::{initialize_sample_data, load_from_file};
use food_search::search::engine::FoodSearchService;
use food_search::search::handlers::{
    handle_categories, handle_get_food, handle_health, handle_popular, handle_search,
};
use food_search::storage::memory::MemoryStore;
use food_search::storage::store::RecordStore;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::load()?;

    // 1. Record store (connect once, shared by every request):
    let store = Arc::new(MemoryStore::new());
    store.ping()?;
    tracing::info!("Record store ready");

    // 2. Data:
    match &config.data_path {
        Some(path) => {
            load_from_file(&*store, path)?;
        }
        None if config.seed_sample_data => {
            initialize_sample_data(&*store);
        }
        None => tracing::warn!("No data file and seeding disabled, starting with an empty store"),
    }
    tracing::info!("Food collection contains {} documents", store.count()?);

    // 3. Search service:
    let service = Arc::new(FoodSearchService::new(store.clone()));

    // 4. HTTP Router:
    let app = Router::new()
        .route("/dashboard/search", get(handle_search))
        .route("/dashboard/categories", get(handle_categories))
        .route("/dashboard/foods/:id", get(handle_get_food))
        .route("/dashboard/popular", get(handle_popular))
        .route("/health", get(handle_health))
        .layer(Extension(service));

    // 5. Start HTTP server:
    tracing::info!("HTTP server listening on {}", config.bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close();
    tracing::info!("Server shut down");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received Ctrl+C, shutting down"),
        Err(e) => {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
