//! Vendor endpoints under `/api/v1/vendors`.
//!
//! Same contract as the category routes; the two resources share the CRUD
//! lifecycle and the patch merge rule.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;

use crate::error::ApiError;
use crate::models::{Vendor, VendorPatch};

use super::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/vendors/", get(list_vendors))
        .route("/vendors", post(create_vendor))
        .route(
            "/vendors/:id",
            get(get_vendor).put(update_vendor).patch(patch_vendor),
        )
}

/// GET /api/v1/vendors/
async fn list_vendors(State(state): State<AppState>) -> Result<Json<Vec<Vendor>>, ApiError> {
    let vendors = state.vendors.find_all().await?;
    Ok(Json(vendors))
}

/// GET /api/v1/vendors/:id
async fn get_vendor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vendor>, ApiError> {
    let vendor = state
        .vendors
        .find_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("vendor '{id}'")))?;
    Ok(Json(vendor))
}

/// POST /api/v1/vendors
async fn create_vendor(
    State(state): State<AppState>,
    Json(body): Json<Vendor>,
) -> Result<(StatusCode, Json<Vendor>), ApiError> {
    let saved = state.vendors.save(body).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// PUT /api/v1/vendors/:id — full replace, upsert; path id wins over body id.
async fn update_vendor(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(mut body): Json<Vendor>,
) -> Result<Json<Vendor>, ApiError> {
    body.id = Some(id);
    let saved = state.vendors.save(body).await?;
    Ok(Json(saved))
}

/// PATCH /api/v1/vendors/:id — merge-if-changed; no save when nothing
/// differs. Read and conditional write are not atomic.
async fn patch_vendor(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<VendorPatch>,
) -> Result<Json<Vendor>, ApiError> {
    let mut vendor = state
        .vendors
        .find_by_id(&id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("vendor '{id}'")))?;

    if vendor.apply_patch(&patch) {
        vendor = state.vendors.save(vendor).await?;
    }
    Ok(Json(vendor))
}
