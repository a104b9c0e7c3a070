use assetdesk_db::DbPool;

use crate::lifecycle::AssetLifecycle;

/// State handed to every handler. Clones share the pool.
#[derive(Clone)]
pub struct AppState {
    /// Used directly by the read-only handlers.
    pub pool: DbPool,
    /// All writes go through here.
    pub lifecycle: AssetLifecycle,
}

impl AppState {
    pub fn new(pool: DbPool) -> Self {
        Self {
            lifecycle: AssetLifecycle::new(pool.clone()),
            pool,
        }
    }
}
