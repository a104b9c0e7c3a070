//! Handlers for the `/assets` resource.

use assetdesk_core::error::CoreError;
use assetdesk_db::models::asset::{Asset, CreateAsset, UpdateAsset};
use assetdesk_db::repositories::AssetRepo;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::response::MessageResponse;
use crate::state::AppState;

/// POST /api/assets
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateAsset>,
) -> AppResult<(StatusCode, Json<Asset>)> {
    let asset = state.lifecycle.create_asset(&input).await?;
    Ok((StatusCode::CREATED, Json(asset)))
}

/// GET /api/assets
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Asset>>> {
    let assets = AssetRepo::list(&state.pool).await?;
    Ok(Json(assets))
}

/// GET /api/assets/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Asset>> {
    let asset = AssetRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| CoreError::not_found("Asset", id))?;
    Ok(Json(asset))
}

/// PUT /api/assets/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<UpdateAsset>,
) -> AppResult<Json<Asset>> {
    let asset = state.lifecycle.update_asset(&id, &input).await?;
    Ok(Json(asset))
}

/// DELETE /api/assets/{id}
///
/// Soft retire: dependents are removed and the asset is marked `disposed`.
pub async fn retire(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse<Asset>>> {
    let asset = state.lifecycle.retire_asset(&id).await?;
    Ok(Json(MessageResponse::new(
        "Asset status updated to 'disposed' successfully",
        asset,
    )))
}

/// DELETE /api/assets/{id}/purge
///
/// Hard delete: dependents and the asset row are removed.
pub async fn purge(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse<Asset>>> {
    let asset = state.lifecycle.purge_asset(&id).await?;
    Ok(Json(MessageResponse::new("Asset deleted successfully", asset)))
}
