//! Item Repository - SQLite persistence for items
//!
//! Every operation is a single statement or an atomic read-then-write on
//! one pooled connection; validation runs before any mutation.

use crate::error::{ItemStoreError, Result};
use crate::models::{CreatedItem, Item, ItemPatch, NewItem};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

/// Maximum title length enforced on update. Create deliberately enforces
/// no bound; the asymmetry is inherited behavior and kept as-is.
pub const MAX_TITLE_LEN: usize = 120;

/// Insert a new item; the store assigns `id` and `created_at`
pub async fn create_item(pool: &SqlitePool, new: NewItem) -> Result<CreatedItem> {
    let title = new.title.as_deref().unwrap_or("").trim().to_string();
    let description = new.description.as_deref().unwrap_or("").trim().to_string();

    if title.is_empty() {
        return Err(ItemStoreError::Validation("title is required".to_string()));
    }

    let result = sqlx::query("INSERT INTO items (title, description) VALUES (?, ?)")
        .bind(&title)
        .bind(&description)
        .execute(pool)
        .await?;

    Ok(CreatedItem {
        id: result.last_insert_rowid(),
        title,
        description,
    })
}

/// List all items, most recently created first
pub async fn list_items(pool: &SqlitePool) -> Result<Vec<Item>> {
    let rows = sqlx::query(
        r#"
        SELECT id, title, description, created_at
        FROM items
        ORDER BY id DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    let mut items = Vec::with_capacity(rows.len());
    for row in rows {
        items.push(hydrate_item(row)?);
    }
    Ok(items)
}

/// Get a single item by id
pub async fn get_item(pool: &SqlitePool, id: i64) -> Result<Item> {
    let row = sqlx::query(
        r#"
        SELECT id, title, description, created_at
        FROM items
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    match row {
        Some(row) => hydrate_item(row),
        None => Err(ItemStoreError::NotFound(id)),
    }
}

/// Apply a partial update: fields absent from the patch keep their stored
/// value. Both columns are rewritten and the refreshed row is returned.
pub async fn update_item(pool: &SqlitePool, id: i64, patch: ItemPatch) -> Result<Item> {
    let current = get_item(pool, id).await?;

    let title = match patch.title {
        Some(title) => {
            let title = title.trim().to_string();
            if title.is_empty() {
                return Err(ItemStoreError::Validation(
                    "title cannot be empty".to_string(),
                ));
            }
            if title.chars().count() > MAX_TITLE_LEN {
                return Err(ItemStoreError::Validation(
                    "title too long (max 120)".to_string(),
                ));
            }
            title
        }
        None => current.title,
    };

    let description = match patch.description {
        Some(description) => description.trim().to_string(),
        None => current.description,
    };

    sqlx::query("UPDATE items SET title = ?, description = ? WHERE id = ?")
        .bind(&title)
        .bind(&description)
        .bind(id)
        .execute(pool)
        .await?;

    get_item(pool, id).await
}

/// Delete an item permanently
pub async fn delete_item(pool: &SqlitePool, id: i64) -> Result<()> {
    let result = sqlx::query("DELETE FROM items WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(ItemStoreError::NotFound(id));
    }

    Ok(())
}

/// Hydrate a row into an Item, by column name
fn hydrate_item(row: SqliteRow) -> Result<Item> {
    let description: Option<String> = row.try_get("description")?;

    Ok(Item {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        description: description.unwrap_or_default(),
        created_at: row.try_get("created_at")?,
    })
}
