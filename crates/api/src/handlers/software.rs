//! Handlers for the `/software` resource.

use assetdesk_core::error::CoreError;
use assetdesk_db::models::software::{CreateSoftwareAsset, SoftwareAsset};
use assetdesk_db::repositories::SoftwareAssetRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::state::AppState;

/// POST /api/software
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateSoftwareAsset>,
) -> AppResult<(StatusCode, Json<SoftwareAsset>)> {
    let software = state.lifecycle.create_software(&input).await?;
    Ok((StatusCode::CREATED, Json(software)))
}

/// GET /api/software
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<SoftwareAsset>>> {
    let software = SoftwareAssetRepo::list(&state.pool).await?;
    Ok(Json(software))
}

/// GET /api/software/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<SoftwareAsset>> {
    let software = SoftwareAssetRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| CoreError::not_found("SoftwareAsset", id))?;
    Ok(Json(software))
}

/// DELETE /api/software/{id}
///
/// Returns the deleted row.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<SoftwareAsset>> {
    let software = state.lifecycle.delete_software(&id).await?;
    Ok(Json(software))
}
