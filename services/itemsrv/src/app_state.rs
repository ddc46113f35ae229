//! Application state shared across request handlers.

use crate::config::ItemsrvConfig;
use sqlx::SqlitePool;
use std::sync::Arc;

/// Shared resources, constructed once at startup and passed to every
/// handler explicitly. No global state.
pub struct AppState {
    /// Service configuration
    pub config: Arc<ItemsrvConfig>,

    /// SQLite pool for item persistence
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(config: Arc<ItemsrvConfig>, pool: SqlitePool) -> Self {
        Self { config, pool }
    }
}
