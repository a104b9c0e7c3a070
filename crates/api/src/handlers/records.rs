//! Read-only handlers for the asset-owned maintenance and in/out logs.

use assetdesk_db::models::in_out::InOutRecord;
use assetdesk_db::models::maintenance::MaintenanceRecord;
use assetdesk_db::repositories::{InOutRepo, MaintenanceRepo};
use axum::extract::State;
use axum::Json;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/maintenance
pub async fn list_maintenance(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<MaintenanceRecord>>> {
    let records = MaintenanceRepo::list(&state.pool).await?;
    Ok(Json(records))
}

/// GET /api/inout
pub async fn list_in_out(State(state): State<AppState>) -> AppResult<Json<Vec<InOutRecord>>> {
    let records = InOutRepo::list(&state.pool).await?;
    Ok(Json(records))
}
