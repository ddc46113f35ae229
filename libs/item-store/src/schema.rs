//! SQL DDL for initializing the database schema.

use crate::error::Result;
use sqlx::SqlitePool;

/// SQLite schema: the single `items` table.
///
/// `created_at` is TEXT in SQLite's `CURRENT_TIMESTAMP` format
/// (`YYYY-MM-DD HH:MM:SS`), decoded through the sqlx chrono adapter.
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS items (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT,
    created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
);
"#;

/// Idempotently create the items table. Runs once at process start,
/// before any request is served.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(SQLITE_INIT).execute(pool).await?;
    Ok(())
}
