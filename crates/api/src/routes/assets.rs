//! Route definitions for the `/assets` resource.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::{assets, dashboard};
use crate::state::AppState;

/// Routes mounted at `/assets`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// GET    /count         -> dashboard::counts
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update
/// DELETE /{id}          -> retire
/// DELETE /{id}/purge    -> purge
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(assets::list).post(assets::create))
        .route("/count", get(dashboard::counts))
        .route(
            "/{id}",
            get(assets::get_by_id)
                .put(assets::update)
                .delete(assets::retire),
        )
        .route("/{id}/purge", delete(assets::purge))
}
