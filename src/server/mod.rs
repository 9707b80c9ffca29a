//! Web server for the Benchmark3x site.
//!
//! Serves two pages from a single route:
//! - `/` renders the landing page
//! - `/?page=login` (or `/login`) renders the sign-in stub
//!
//! Every request resolves assets and renders from scratch; the only shared
//! state is the explicit asset cache held in [`AppState`].

pub mod content;
mod handlers;
mod routes;
mod template_structs;
mod templates;

pub use routes::create_router;
pub use templates::{render_page, Page, RenderError, RenderOptions, DEFAULT_SITE_NAME};

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;

use crate::assets::{chart, AssetCache, ResolvedAssets};
use crate::config::Settings;

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub assets_dir: PathBuf,
    pub site_name: Arc<str>,
    pub asset_cache: Arc<AssetCache>,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            assets_dir: settings.assets_dir.clone(),
            site_name: Arc::from(settings.site_name.as_str()),
            asset_cache: Arc::new(AssetCache::with_ttl(Duration::from_secs(
                settings.asset_cache_ttl_secs,
            ))),
        }
    }

    /// Resolve assets and render `page` for one request.
    pub fn render(&self, page: Page, sign_in_submitted: bool) -> Result<String, RenderError> {
        let assets = ResolvedAssets::resolve_all(&self.assets_dir, Some(&self.asset_cache));
        let options = RenderOptions {
            site_name: self.site_name.to_string(),
            sign_in_submitted,
        };
        render_page(page, &assets, &options)
    }
}

/// Start the web server.
pub async fn serve(settings: &Settings, host: &str, port: u16) -> anyhow::Result<()> {
    chart::ensure_chart(&settings.assets_dir);

    let state = AppState::new(settings);
    let app = create_router(state);

    let listener = bind_listener(host, port).await?;
    tracing::info!("Starting server at http://{}", listener.local_addr()?);
    tracing::info!("Serving assets from {}", settings.assets_dir.display());

    axum::serve(listener, app).await?;

    Ok(())
}

/// Bind a listener, resolving `host` as a name or IP literal.
pub async fn bind_listener(host: &str, port: u16) -> anyhow::Result<tokio::net::TcpListener> {
    let host = host.trim_start_matches('[').trim_end_matches(']');
    tokio::net::TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", host, port))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tempfile::tempdir;
    use tower::ServiceExt;

    fn setup_test_app(ttl_secs: u64) -> (axum::Router, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let settings = Settings {
            assets_dir: dir.path().to_path_buf(),
            asset_cache_ttl_secs: ttl_secs,
            ..Settings::default()
        };
        (create_router(AppState::new(&settings)), dir)
    }

    async fn body_string(response: axum::response::Response) -> String {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(body.to_vec()).unwrap()
    }

    async fn get(app: &axum::Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        (status, body_string(response).await)
    }

    #[tokio::test]
    async fn test_root_serves_landing() {
        let (app, _dir) = setup_test_app(0);

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/html"));

        let html = body_string(response).await;
        assert!(html.contains("id=\"pricing\""));
        assert!(!html.contains("data:"));
    }

    #[tokio::test]
    async fn test_page_query_selects_login() {
        let (app, _dir) = setup_test_app(0);

        let (status, html) = get(&app, "/?page=login").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(html.matches("type=\"email\"").count(), 1);
        assert_eq!(html.matches("type=\"password\"").count(), 1);
        assert_eq!(html.matches("class=\"pricing-card").count(), 0);
    }

    #[tokio::test]
    async fn test_unknown_page_falls_back_to_landing() {
        let (app, _dir) = setup_test_app(0);

        let (_, landing) = get(&app, "/").await;
        for uri in ["/?page=", "/?page=signup", "/?page=Login", "/?other=login"] {
            let (status, html) = get(&app, uri).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(html, landing, "{} should render the landing page", uri);
        }
    }

    #[tokio::test]
    async fn test_repeated_page_param_is_not_rejected() {
        let (app, _dir) = setup_test_app(0);

        let (_, landing) = get(&app, "/").await;
        let (status, html) = get(&app, "/?page=home&page=x").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(html, landing);

        let (status, html) = get(&app, "/?page=login&page=home").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(html.matches("type=\"password\"").count(), 1);
    }

    #[tokio::test]
    async fn test_bind_listener_resolves_host_names() {
        let listener = bind_listener("localhost", 0).await.unwrap();
        assert!(listener.local_addr().unwrap().ip().is_loopback());

        let listener = bind_listener("127.0.0.1", 0).await.unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }

    #[tokio::test]
    async fn test_login_alias_route() {
        let (app, _dir) = setup_test_app(0);

        let (_, via_query) = get(&app, "/?page=login").await;
        let (status, via_path) = get(&app, "/login").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(via_query, via_path);
    }

    #[tokio::test]
    async fn test_post_login_is_acknowledged_stub() {
        let (app, _dir) = setup_test_app(0);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/login")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("email=a%40b.com&password=hunter2"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let html = body_string(response).await;
        assert!(html.contains("class=\"login-ack\""));
        assert!(html.contains("Member sign-in is not open yet."));
        assert!(!html.contains("hunter2"));
        assert!(!html.contains("a@b.com"));
    }

    #[tokio::test]
    async fn test_assets_are_inlined_when_present() {
        let (app, dir) = setup_test_app(0);
        std::fs::write(dir.path().join("computer.jpg"), b"\xff\xd8\xff").unwrap();

        let (_, html) = get(&app, "/").await;
        assert!(html.contains("src=\"data:image/jpeg;base64,/9j/\""));
        assert!(!html.contains(crate::assets::COMPUTER.placeholder));
    }

    #[tokio::test]
    async fn test_cached_render_is_stable() {
        let (app, dir) = setup_test_app(300);
        std::fs::write(dir.path().join("logo_R1.jpg"), b"logo").unwrap();

        let (_, first) = get(&app, "/").await;
        let (_, second) = get(&app, "/").await;
        assert_eq!(first, second);
        assert!(first.contains("data:image/jpeg;base64,bG9nbw=="));
    }
}
