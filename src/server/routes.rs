//! Router configuration for the web server.

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

use super::handlers;
use super::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Landing page; `?page=login` switches to the sign-in page
        .route("/", get(handlers::index))
        .route(
            "/login",
            get(handlers::login_page).post(handlers::submit_login),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
