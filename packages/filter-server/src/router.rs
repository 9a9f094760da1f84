use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handler;
use crate::AppState;

/// API ルートと静的ファイル配信をまとめた Router を組み立てる
pub fn build(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/api", get(handler::health))
        .route("/api/", get(handler::health))
        .route("/api/process-image", post(handler::process_image))
        .fallback(handler::fallback)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
