use axum::routing::{get, post};
use axum::Router;
use tracing_subscriber::EnvFilter;

use org_search::api;
use org_search::config::Config;
use org_search::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    tracing::info!("Content directory: {}", config.content_dir.display());

    let state = AppState::new(config.clone());

    let app = Router::new()
        .route(
            "/api/rag/query",
            post(api::rag::query_content).get(api::rag::query_content_get),
        )
        .route("/api/rag/services", get(api::rag::list_services))
        .route("/api/rag/services/{service}", get(api::rag::get_service_info))
        .route("/api/rag/health", get(api::rag::health))
        .route("/api/rag/reload", post(api::rag::reload))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
