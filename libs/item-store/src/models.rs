//! Rust structs mirroring item rows and request payloads.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A persisted item, the full column snapshot returned to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub title: String,
    /// Stored as empty string when the caller omitted it or sent blanks.
    pub description: String,
    /// Assigned once by SQLite at insertion, never caller-supplied.
    pub created_at: NaiveDateTime,
}

/// What the create operation hands back: the server-assigned id plus the
/// trimmed inputs. `created_at` is not part of the create response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedItem {
    pub id: i64,
    pub title: String,
    pub description: String,
}

/// Creation payload. Both fields optional at the serde layer so that a
/// missing title surfaces as a validation error, not a decode failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewItem {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Partial-update payload. `None` means the field was absent from the
/// request and the stored value is kept.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemPatch {
    pub title: Option<String>,
    pub description: Option<String>,
}
