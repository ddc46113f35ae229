//! End-to-end API tests
//!
//! Boots the real router on an ephemeral port with a temporary database
//! and drives it over HTTP.

use axum::http::StatusCode;
use itemsrv::{create_routes, AppState, ItemsrvConfig};
use serde_json::json;
use std::fs;
use std::net::SocketAddr;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::net::TcpListener;

/// Spin up the service against a tempdir-backed database.
///
/// `with_ui` controls whether the asset directory contains the UI page.
async fn create_test_server(with_ui: bool) -> (SocketAddr, TempDir) {
    let temp_dir = tempfile::tempdir().expect("failed to create temp dir");

    let assets_dir = temp_dir.path().join("static");
    fs::create_dir_all(&assets_dir).expect("failed to create assets dir");
    if with_ui {
        fs::write(
            assets_dir.join("ui.html"),
            "<!doctype html><title>Items</title>",
        )
        .expect("failed to write ui page");
    }

    let mut config = ItemsrvConfig::default();
    config.database.path = temp_dir
        .path()
        .join("items.db")
        .to_string_lossy()
        .to_string();
    config.assets.dir = assets_dir.to_string_lossy().to_string();

    let pool = item_store::connect(&config.database.path)
        .await
        .expect("failed to open database");
    item_store::ensure_schema(&pool)
        .await
        .expect("failed to initialize schema");

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind failed");
    let addr = listener.local_addr().expect("no local addr");

    let state = Arc::new(AppState::new(Arc::new(config), pool));
    let app = create_routes(state);

    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    (addr, temp_dir)
}

#[tokio::test]
async fn test_health_check() {
    let (addr, _guard) = create_test_server(true).await;

    let resp = reqwest::get(format!("http://{}/health", addr))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "itemsrv");
}

#[tokio::test]
async fn test_create_item_returns_created_row() {
    let (addr, _guard) = create_test_server(true).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("http://{}/api/items", addr))
        .json(&json!({ "title": "  Buy milk  ", "description": "  2%  " }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["id"], 1);
    assert_eq!(body["title"], "Buy milk");
    assert_eq!(body["description"], "2%");
    // The create response carries no timestamp
    assert!(body.get("created_at").is_none());
}

#[tokio::test]
async fn test_create_item_requires_title() {
    let (addr, _guard) = create_test_server(true).await;
    let client = reqwest::Client::new();

    for payload in [
        json!({}),
        json!({ "title": "" }),
        json!({ "title": "   ", "description": "desc" }),
    ] {
        let resp = client
            .post(format!("http://{}/api/items", addr))
            .json(&payload)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(body["error"], "title is required");
    }

    // No rows were persisted by the rejected requests
    let items: serde_json::Value = client
        .get(format!("http://{}/api/items", addr))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(items.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_list_items_newest_first() {
    let (addr, _guard) = create_test_server(true).await;
    let client = reqwest::Client::new();

    for title in ["first", "second", "third"] {
        let resp = client
            .post(format!("http://{}/api/items", addr))
            .json(&json!({ "title": title }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = client
        .get(format!("http://{}/api/items", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let items: serde_json::Value = resp.json().await.unwrap();
    let items = items.as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["title"], "third");
    assert_eq!(items[2]["title"], "first");
    assert!(items[0]["id"].as_i64().unwrap() > items[1]["id"].as_i64().unwrap());
    assert!(items[0]["created_at"].is_string());
}

#[tokio::test]
async fn test_get_item_not_found() {
    let (addr, _guard) = create_test_server(true).await;

    let resp = reqwest::get(format!("http://{}/api/items/999", addr))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "not found");
}

#[tokio::test]
async fn test_update_partial_fields() {
    let (addr, _guard) = create_test_server(true).await;
    let client = reqwest::Client::new();

    client
        .post(format!("http://{}/api/items", addr))
        .json(&json!({ "title": "Buy milk" }))
        .send()
        .await
        .unwrap();

    // Description-only update keeps the title
    let resp = client
        .put(format!("http://{}/api/items/1", addr))
        .json(&json!({ "description": "2%" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["title"], "Buy milk");
    assert_eq!(body["description"], "2%");
    assert!(body["created_at"].is_string());

    // Title-only update keeps the description
    let resp = client
        .put(format!("http://{}/api/items/1", addr))
        .json(&json!({ "title": "Buy oat milk" }))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["title"], "Buy oat milk");
    assert_eq!(body["description"], "2%");
}

#[tokio::test]
async fn test_update_validation() {
    let (addr, _guard) = create_test_server(true).await;
    let client = reqwest::Client::new();

    client
        .post(format!("http://{}/api/items", addr))
        .json(&json!({ "title": "stable" }))
        .send()
        .await
        .unwrap();

    let resp = client
        .put(format!("http://{}/api/items/1", addr))
        .json(&json!({ "title": "   " }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "title cannot be empty");

    let resp = client
        .put(format!("http://{}/api/items/1", addr))
        .json(&json!({ "title": "x".repeat(121) }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "title too long (max 120)");

    // The row is unchanged after the rejected updates
    let body: serde_json::Value = client
        .get(format!("http://{}/api/items/1", addr))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["title"], "stable");

    // Unknown id reports 404, not validation
    let resp = client
        .put(format!("http://{}/api/items/999", addr))
        .json(&json!({ "title": "ghost" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_item() {
    let (addr, _guard) = create_test_server(true).await;
    let client = reqwest::Client::new();

    client
        .post(format!("http://{}/api/items", addr))
        .json(&json!({ "title": "ephemeral" }))
        .send()
        .await
        .unwrap();

    let resp = client
        .delete(format!("http://{}/api/items/1", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert_eq!(resp.text().await.unwrap(), "");

    // Deleting again reports 404
    let resp = client
        .delete(format!("http://{}/api/items/1", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "not found");
}

/// The full lifecycle scenario: create, patch the description, delete,
/// and observe the item is gone.
#[tokio::test]
async fn test_item_lifecycle() {
    let (addr, _guard) = create_test_server(true).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("http://{}/api/items", addr))
        .json(&json!({ "title": "Buy milk" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "id": 1, "title": "Buy milk", "description": "" }));

    let resp = client
        .put(format!("http://{}/api/items/1", addr))
        .json(&json!({ "description": "2%" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["title"], "Buy milk");
    assert_eq!(body["description"], "2%");

    let resp = client
        .delete(format!("http://{}/api/items/1", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = client
        .get(format!("http://{}/api/items/1", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_ui_page_served() {
    let (addr, _guard) = create_test_server(true).await;

    let resp = reqwest::get(format!("http://{}/ui", addr)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()[axum::http::header::CONTENT_TYPE],
        "text/html; charset=utf-8"
    );
    assert!(resp.text().await.unwrap().contains("Items"));
}

#[tokio::test]
async fn test_ui_page_missing() {
    let (addr, _guard) = create_test_server(false).await;

    let resp = reqwest::get(format!("http://{}/ui", addr)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
