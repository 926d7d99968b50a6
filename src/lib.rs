//! Workbook embed library - re-exports for testing and external use.
//!
//! Serves a single page that shows a SharePoint-hosted Excel workbook in an
//! iframe with the viewer chrome hidden.
//!
//! - `embed`: embed configuration and URL construction
//! - `shell`: page state (embed URL, load-error notification)
//! - `templates`: HTML/CSS/JS templates and rendering
//! - `handlers`: HTTP route handlers

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod embed;
pub mod handlers;
pub mod shell;
pub mod templates;

// ============================================================================
// Configuration
// ============================================================================

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_LOG_FILTER: &str = "workbook_embed=info,tower_http=info";

// ============================================================================
// Application State
// ============================================================================

/// Shared state, written once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct AppState {
    pub shell: PageShell,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_config(&SHAREPOINT_CONFIG)
    }

    pub fn with_config(config: &EmbedConfig) -> Self {
        Self {
            shell: PageShell::new(config),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/api/embed-url", get(handlers::embed_url))
        .route("/api/embed-error", post(handlers::embed_error))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

// Re-export commonly used types
pub use embed::{active_cell, build_embed_url, embed_url, EmbedConfig, EmbedUrl, SHAREPOINT_CONFIG};

pub use shell::{EmbedStatus, Notification, NotificationLevel, PageShell, EMBED_FAILED_MESSAGE};

pub use templates::{base_html, html_escape, render_embed_page, STYLE};

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header::CONTENT_TYPE, Request, StatusCode},
    };
    use tower::ServiceExt;

    fn test_app() -> Router {
        app(Arc::new(AppState::new()))
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_index_serves_page() {
        let response = test_app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[CONTENT_TYPE].to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/html"));

        let html = body_string(response).await;
        assert!(html.contains(&html_escape(embed_url(None).as_str())));
        assert!(html.contains("Gurukul Reading Program"));
    }

    #[tokio::test]
    async fn test_embed_url_api() {
        let response = test_app()
            .oneshot(Request::builder().uri("/api/embed-url").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: handlers::EmbedUrlResponse =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(body.url, embed_url(None).as_str());
        assert!(!body.authenticated);
    }

    #[tokio::test]
    async fn test_embed_error_accepts_report() {
        let report = serde_json::json!({ "src": embed_url(None).as_str() }).to_string();
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/embed-error")
                    .header(CONTENT_TYPE, "application/json")
                    .body(Body::from(report))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_embed_error_tolerates_empty_body() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/embed-error")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_embed_error_does_not_change_page() {
        let state = Arc::new(AppState::new());
        let router = app(state.clone());
        let before = state.shell.embed_url().clone();

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/embed-error")
                    .body(Body::from("not json"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let page = router
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let html = body_string(page).await;
        assert!(html.contains(&html_escape(before.as_str())));
        assert_eq!(state.shell.embed_url(), &before);
    }

    #[tokio::test]
    async fn test_health() {
        let response = test_app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "ok");
    }

    #[test]
    fn test_app_state_computes_url_once() {
        let state = AppState::new();
        assert_eq!(state.shell.embed_url(), &embed_url(None));
        assert_eq!(state.shell.status(), EmbedStatus::Displaying);
    }
}
