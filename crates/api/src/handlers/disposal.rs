//! Handlers for the `/disposal` audit log.

use assetdesk_db::models::disposal::{DisposalRecord, RecordDisposal};
use assetdesk_db::repositories::DisposalRepo;
use axum::extract::State;
use axum::Json;

use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::state::AppState;

/// POST /api/disposal
///
/// Appends a record and echoes it back. The asset row is left alone.
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<RecordDisposal>,
) -> AppResult<Json<DisposalRecord>> {
    let record = state.lifecycle.record_disposal(&input).await?;
    Ok(Json(record))
}

/// GET /api/disposal
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<DisposalRecord>>> {
    let records = DisposalRepo::list(&state.pool).await?;
    Ok(Json(records))
}
