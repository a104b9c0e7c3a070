//! Handler for the dashboard summary.

use assetdesk_db::models::dashboard::DashboardCounts;
use assetdesk_db::repositories::DashboardRepo;
use axum::extract::State;
use axum::Json;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/assets/count
pub async fn counts(State(state): State<AppState>) -> AppResult<Json<DashboardCounts>> {
    let counts = DashboardRepo::counts(&state.pool).await?;
    Ok(Json(counts))
}
