//! Route definitions for the audit logs and personnel.

use axum::routing::get;
use axum::Router;

use crate::handlers::{disposal, personnel, records};
use crate::state::AppState;

/// Routes merged at the `/api` root.
///
/// ```text
/// GET    /disposal          -> disposal::list
/// POST   /disposal          -> disposal::create
/// GET    /maintenance       -> records::list_maintenance
/// GET    /inout             -> records::list_in_out
/// GET    /employee          -> personnel::list
/// GET    /employee/{id}     -> personnel::get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/disposal", get(disposal::list).post(disposal::create))
        .route("/maintenance", get(records::list_maintenance))
        .route("/inout", get(records::list_in_out))
        .route("/employee", get(personnel::list))
        .route("/employee/{id}", get(personnel::get_by_id))
}
