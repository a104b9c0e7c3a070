pub mod assets;
pub mod health;
pub mod records;
pub mod software;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /assets                     list, create
/// /assets/count               dashboard counts
/// /assets/{id}                get, update, retire (soft)
/// /assets/{id}/purge          purge (hard delete)
///
/// /software                   list, create
/// /software/{id}              get, delete
///
/// /disposal                   list, record
/// /maintenance                list
/// /inout                      list
///
/// /employee                   list
/// /employee/{id}              get
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/assets", assets::router())
        .nest("/software", software::router())
        .merge(records::router())
}
