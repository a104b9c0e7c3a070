//! Route definitions for the `/software` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::software;
use crate::state::AppState;

/// Routes mounted at `/software`.
///
/// ```text
/// GET    /          -> list
/// POST   /          -> create
/// GET    /{id}      -> get_by_id
/// DELETE /{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(software::list).post(software::create))
        .route("/{id}", get(software::get_by_id).delete(software::delete))
}
