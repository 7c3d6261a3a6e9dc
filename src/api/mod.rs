//! HTTP surface: application state and router construction.

use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::models::{Category, Vendor};
use crate::repository::DocumentRepository;
use crate::store::InMemoryCollection;

pub mod category_routes;
pub mod vendor_routes;

/// Shared handler state: one repository handle per resource collection.
#[derive(Clone)]
pub struct AppState {
    pub categories: Arc<dyn DocumentRepository<Category>>,
    pub vendors: Arc<dyn DocumentRepository<Vendor>>,
}

impl AppState {
    /// State over fresh in-memory collections.
    pub fn in_memory() -> Self {
        Self {
            categories: Arc::new(InMemoryCollection::new("categories")),
            vendors: Arc::new(InMemoryCollection::new("vendors")),
        }
    }
}

/// Build the full axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .nest(
            "/api/v1",
            category_routes::router().merge(vendor_routes::router()),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "OK" }))
}
