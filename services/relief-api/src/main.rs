mod config;
mod state;
mod storage;
mod types;
mod routes_districts;
mod routes_upload;
mod routes_sample;

use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::CorsLayer;

use anyhow::{Context, Result};
use relief_store::DatasetStore;
use tracing::info;

use crate::config::AppConfig;
use crate::state::{AppState, SharedState};
use crate::types::{api_error, ApiError};

/// Multipart framing on top of the file itself.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env()?;

    // --- Storage dirs (fail fast) ---
    for dir in [&cfg.upload_dir, &cfg.processed_dir] {
        tokio::fs::create_dir_all(dir)
            .await
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }

    let store = if cfg.seed_sample {
        DatasetStore::with_seed()
    } else {
        DatasetStore::new()
    };
    info!(districts = store.len(), next_id = store.next_id(), "dataset ready");

    let app_state = std::sync::Arc::new(AppState::new(store, cfg.clone()));
    let app = router(app_state);

    let addr = &cfg.bind_addr;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("relief-api listening on http://{addr}");
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

fn router(state: SharedState) -> Router {
    let body_limit = state.cfg.max_upload_bytes + MULTIPART_OVERHEAD;

    Router::new()
        .route("/api/districts", get(routes_districts::get_districts))
        .route("/api/districts/views", get(routes_districts::get_district_views))
        .route("/api/districts/:id", get(routes_districts::get_district))
        .route("/api/summary", get(routes_districts::get_summary))
        .route("/api/overview", get(routes_districts::get_overview))
        .route("/api/sample.csv", get(routes_sample::get_sample_csv))
        .route("/api/upload", post(routes_upload::post_upload))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn not_found() -> (StatusCode, Json<ApiError>) {
    api_error(StatusCode::NOT_FOUND, "Not found")
}
