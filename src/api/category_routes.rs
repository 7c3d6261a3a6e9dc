//! Category endpoints under `/api/v1/categories`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;

use crate::error::ApiError;
use crate::models::{Category, CategoryPatch};

use super::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        // Trailing slash on the list route only.
        .route("/categories/", get(list_categories))
        .route("/categories", post(create_category))
        .route(
            "/categories/:id",
            get(get_category)
                .put(update_category)
                .patch(patch_category),
        )
}

/// GET /api/v1/categories/ — full collection, store iteration order.
async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<Category>>, ApiError> {
    let categories = state.categories.find_all().await?;
    Ok(Json(categories))
}

/// GET /api/v1/categories/:id
async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Category>, ApiError> {
    let category = state
        .categories
        .find_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("category '{id}'")))?;
    Ok(Json(category))
}

/// POST /api/v1/categories — insert, id assigned by the store.
async fn create_category(
    State(state): State<AppState>,
    Json(body): Json<Category>,
) -> Result<(StatusCode, Json<Category>), ApiError> {
    let saved = state.categories.save(body).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// PUT /api/v1/categories/:id — full replace, upsert. The body's id is
/// overwritten with the path id; no read-before-write.
async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(mut body): Json<Category>,
) -> Result<Json<Category>, ApiError> {
    body.id = Some(id);
    let saved = state.categories.save(body).await?;
    Ok(Json(saved))
}

/// PATCH /api/v1/categories/:id — merge-if-changed. The save is skipped
/// entirely when no supplied field differs from the stored record. The read
/// and the write are separate store calls with no atomicity; last writer
/// wins.
async fn patch_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<CategoryPatch>,
) -> Result<Json<Category>, ApiError> {
    let mut category = state
        .categories
        .find_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("category '{id}'")))?;

    if category.apply_patch(&patch) {
        category = state.categories.save(category).await?;
    }
    Ok(Json(category))
}
