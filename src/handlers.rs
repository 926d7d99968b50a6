//! HTTP route handlers for the embed page.

use crate::templates::render_embed_page;
use crate::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

// ============================================================================
// Page Handler
// ============================================================================

pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    debug!(src = %state.shell.embed_url(), "rendering embed page");
    Html(render_embed_page(&state.shell))
}

// ============================================================================
// API Handlers
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct EmbedUrlResponse {
    pub url: String,
    pub authenticated: bool,
}

pub async fn embed_url(State(state): State<Arc<AppState>>) -> Json<EmbedUrlResponse> {
    Json(EmbedUrlResponse {
        url: state.shell.embed_url().to_string(),
        // No token source is wired, so the page always uses the public viewer.
        authenticated: false,
    })
}

#[derive(Debug, Default, Deserialize)]
pub struct EmbedErrorReport {
    pub src: Option<String>,
}

/// Beacon from the page when the iframe fails to load.
///
/// `sendBeacon` bodies are best-effort, so a missing or malformed body is
/// still logged rather than rejected.
pub async fn embed_error(State(state): State<Arc<AppState>>, body: Bytes) -> impl IntoResponse {
    let report: EmbedErrorReport = serde_json::from_slice(&body).unwrap_or_default();
    let expected = state.shell.embed_url().as_str();

    match report.src.as_deref() {
        Some(src) if src != expected => {
            warn!(src, expected, "embed failed to load with unexpected src");
        }
        _ => {
            warn!(src = expected, "embed failed to load");
        }
    }

    StatusCode::NO_CONTENT
}

pub async fn health() -> &'static str {
    "ok"
}
