//! Static file serving handler for the UI page.
//!
//! The service never inspects or transforms the served bytes; it reads the
//! file fresh on every request so the page can be swapped without a restart.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use std::path::Path;
use std::sync::Arc;

use crate::app_state::AppState;
use crate::error::ItemSrvError;

/// Name of the UI page inside the asset directory
const UI_PAGE: &str = "ui.html";

/// Serve the UI page from the configured asset directory.
pub async fn serve_ui(State(state): State<Arc<AppState>>) -> Result<Response, ItemSrvError> {
    let path = Path::new(&state.config.assets.dir).join(UI_PAGE);

    match tokio::fs::read(&path).await {
        Ok(contents) => {
            let content_type = content_type_for(&path);
            Ok(([(header::CONTENT_TYPE, content_type)], contents).into_response())
        }
        Err(_) => Err(ItemSrvError::NotFound),
    }
}

/// Map a file extension to a content type
fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("js") => "application/javascript; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("json") => "application/json",
        _ => "application/octet-stream",
    }
}
