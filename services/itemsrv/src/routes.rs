//! API route configuration and request handlers.
//!
//! One handler per item operation; validation and persistence live in
//! `item-store`, handlers translate between HTTP and the repository.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

#[cfg(feature = "swagger-ui")]
use serde_json::json;
#[cfg(feature = "swagger-ui")]
use utoipa::OpenApi;

use crate::app_state::AppState;
use crate::error::ItemSrvError;
use crate::static_files::serve_ui;
use item_store::{CreatedItem, Item, ItemPatch, NewItem};

/// Create the service routes
pub fn create_routes(state: Arc<AppState>) -> Router {
    let router = Router::new()
        .route("/health", get(health_check))
        .route("/ui", get(serve_ui))
        .route("/api/items", get(list_items).post(create_item))
        .route(
            "/api/items/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    #[cfg(feature = "swagger-ui")]
    let router = router.merge(
        utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
            .url("/api-docs/openapi.json", ItemApiDoc::openapi()),
    );

    router
}

// ============================================================================
// OpenAPI Documentation
// ============================================================================

#[cfg(feature = "swagger-ui")]
#[derive(OpenApi)]
#[openapi(
    paths(list_items, create_item, get_item, update_item, delete_item),
    components(schemas(CreateItemRequest, UpdateItemRequest)),
    tags(
        (name = "items", description = "Item management")
    )
)]
pub struct ItemApiDoc;

// ============================================================================
// Request DTOs
// ============================================================================

/// Request DTO for creating an item
///
/// `title` is optional at the decode layer so a missing field maps to the
/// domain error "title is required" rather than a deserialization failure.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[cfg_attr(feature = "swagger-ui", derive(utoipa::ToSchema))]
pub struct CreateItemRequest {
    /// Item title (required, trimmed, must be non-empty)
    #[cfg_attr(feature = "swagger-ui", schema(example = "Buy milk"))]
    pub title: Option<String>,

    /// Item description (optional, trimmed, defaults to empty)
    #[cfg_attr(feature = "swagger-ui", schema(example = "2% from the corner store"))]
    pub description: Option<String>,
}

impl From<CreateItemRequest> for NewItem {
    fn from(req: CreateItemRequest) -> Self {
        NewItem {
            title: req.title,
            description: req.description,
        }
    }
}

/// Request DTO for updating an item (any subset of fields, partial update)
#[derive(Debug, Clone, Deserialize, Serialize)]
#[cfg_attr(feature = "swagger-ui", derive(utoipa::ToSchema))]
pub struct UpdateItemRequest {
    /// New title (optional; trimmed, non-empty, at most 120 characters)
    #[cfg_attr(feature = "swagger-ui", schema(example = "Buy oat milk"))]
    pub title: Option<String>,

    /// New description (optional; trimmed, may become empty)
    #[cfg_attr(feature = "swagger-ui", schema(example = "the barista kind"))]
    pub description: Option<String>,
}

impl From<UpdateItemRequest> for ItemPatch {
    fn from(req: UpdateItemRequest) -> Self {
        ItemPatch {
            title: req.title,
            description: req.description,
        }
    }
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Create a new item
#[cfg_attr(feature = "swagger-ui", utoipa::path(
    post,
    path = "/api/items",
    request_body = CreateItemRequest,
    responses(
        (status = 201, description = "Item created", body = serde_json::Value,
            example = json!({ "id": 1, "title": "Buy milk", "description": "" })),
        (status = 400, description = "Missing or blank title", body = serde_json::Value,
            example = json!({ "error": "title is required" }))
    ),
    tag = "items"
))]
pub async fn create_item(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateItemRequest>,
) -> Result<(StatusCode, Json<CreatedItem>), ItemSrvError> {
    let created = item_store::create_item(&state.pool, req.into()).await?;

    info!("Created item: {} ({})", created.title, created.id);
    Ok((StatusCode::CREATED, Json(created)))
}

/// List all items, most recently created first
#[cfg_attr(feature = "swagger-ui", utoipa::path(
    get,
    path = "/api/items",
    responses(
        (status = 200, description = "All items, newest first", body = serde_json::Value,
            example = json!([
                { "id": 2, "title": "Walk the dog", "description": "", "created_at": "2025-01-01T09:00:00" },
                { "id": 1, "title": "Buy milk", "description": "2%", "created_at": "2025-01-01T08:00:00" }
            ]))
    ),
    tag = "items"
))]
pub async fn list_items(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Item>>, ItemSrvError> {
    let items = item_store::list_items(&state.pool).await?;
    Ok(Json(items))
}

/// Get a single item by id
#[cfg_attr(feature = "swagger-ui", utoipa::path(
    get,
    path = "/api/items/{id}",
    params(("id" = i64, Path, description = "Item identifier")),
    responses(
        (status = 200, description = "Item details", body = serde_json::Value),
        (status = 404, description = "No item with this id", body = serde_json::Value,
            example = json!({ "error": "not found" }))
    ),
    tag = "items"
))]
pub async fn get_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Item>, ItemSrvError> {
    let item = item_store::get_item(&state.pool, id).await?;
    Ok(Json(item))
}

/// Update an item (partial: only fields present in the payload change)
#[cfg_attr(feature = "swagger-ui", utoipa::path(
    put,
    path = "/api/items/{id}",
    params(("id" = i64, Path, description = "Item identifier")),
    request_body = UpdateItemRequest,
    responses(
        (status = 200, description = "Refreshed item", body = serde_json::Value),
        (status = 400, description = "Empty or over-long title", body = serde_json::Value,
            example = json!({ "error": "title too long (max 120)" })),
        (status = 404, description = "No item with this id", body = serde_json::Value)
    ),
    tag = "items"
))]
pub async fn update_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateItemRequest>,
) -> Result<Json<Item>, ItemSrvError> {
    let item = item_store::update_item(&state.pool, id, req.into()).await?;

    info!("Updated item: {}", id);
    Ok(Json(item))
}

/// Delete an item permanently
#[cfg_attr(feature = "swagger-ui", utoipa::path(
    delete,
    path = "/api/items/{id}",
    params(("id" = i64, Path, description = "Item identifier")),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 404, description = "No item with this id", body = serde_json::Value)
    ),
    tag = "items"
))]
pub async fn delete_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ItemSrvError> {
    item_store::delete_item(&state.pool, id).await?;

    info!("Deleted item: {}", id);
    Ok(StatusCode::NO_CONTENT)
}
