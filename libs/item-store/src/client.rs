//! SQLite connection pool setup.

use crate::error::Result;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous},
    SqlitePool,
};
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// Open a file-backed connection pool.
///
/// Each operation acquires a connection from the pool and releases it on
/// every exit path. WAL keeps readers concurrent while SQLite serializes
/// writers.
pub async fn connect(db_path: impl AsRef<Path>) -> Result<SqlitePool> {
    let db_path = db_path.as_ref();

    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|e| crate::error::ItemStoreError::Database(e.to_string()))?;
        }
    }

    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_secs(5))
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(options)
        .await?;

    info!("SQLite database connected: {}", db_path.display());

    Ok(pool)
}

/// Open an in-memory pool, for tests.
///
/// Pinned to a single connection: every `:memory:` connection is a
/// separate empty database.
pub async fn connect_memory() -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;
    Ok(pool)
}
