//! Router builder utilities for catalog routes

use crate::server::handlers::{AppState, list_categories, list_items, page_sizes};
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use tower_http::trace::TraceLayer;

/// Build catalog routes
///
/// - GET /items - One page of filtered, sorted items
/// - GET /categories - Every category in the catalog
/// - GET /page-sizes - Allowed page sizes and the default
/// - GET /health, /healthz - Health check
pub fn build_catalog_routes(state: AppState) -> Router {
    Router::new()
        .route("/items", get(list_items))
        .route("/categories", get(list_categories))
        .route("/page-sizes", get(page_sizes))
        .with_state(state)
        .merge(health_routes())
        .layer(TraceLayer::new_for_http())
}

fn health_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "catalog-query"
    }))
}
