//! Item Store - SQLite persistence library
//!
//! Provides the storage layer for the item service:
//! - `models`: row structs and typed request payloads
//! - `schema`: SQL DDL and idempotent initialization
//! - `client`: connection pool setup (WAL, busy timeout)
//! - `repository`: the five item operations with validation

mod client;
mod error;
mod models;
mod repository;
mod schema;

// Re-export public API
pub use client::{connect, connect_memory};
pub use error::{ItemStoreError, Result};
pub use models::{CreatedItem, Item, ItemPatch, NewItem};
pub use repository::{
    create_item, delete_item, get_item, list_items, update_item, MAX_TITLE_LEN,
};
pub use schema::{ensure_schema, SQLITE_INIT};
