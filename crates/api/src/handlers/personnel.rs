//! Read-only handlers for `/employee`.

use assetdesk_core::error::CoreError;
use assetdesk_db::models::personnel::Personnel;
use assetdesk_db::repositories::PersonnelRepo;
use axum::extract::{Path, State};
use axum::Json;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/employee
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Personnel>>> {
    let people = PersonnelRepo::list(&state.pool).await?;
    Ok(Json(people))
}

/// GET /api/employee/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Personnel>> {
    let person = PersonnelRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| CoreError::not_found("Personnel", id))?;
    Ok(Json(person))
}
