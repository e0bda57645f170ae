//! Route definitions and router construction.
//!
//! This module defines the HTTP routes and creates the main router. View
//! routes render templates; API routes return JSON from the document store.

use axum::Router;
use axum::routing::{get, post};
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use factoid_core::contracts::http::views as view_contract;

use crate::bootstrap::{AxumContext, CorsConfig};
use crate::handlers;
use crate::state::AppState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            use axum::http::HeaderValue;
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// Build all API routes without the `/api` prefix (for nesting under /api).
///
/// Returned without `.with_state()` applied; the caller applies state once on
/// the outer router.
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/network", get(handlers::network::get))
        .route(
            "/entities",
            get(handlers::entities::list).post(handlers::entities::add),
        )
        .route(
            "/entities/{id}",
            get(handlers::entities::get).delete(handlers::entities::remove),
        )
        .route("/interactions", post(handlers::entities::add_interaction))
}

/// Create the main Axum router with view, API, and health routes.
///
/// # Path Parameter Syntax
/// Axum 0.8 uses brace syntax for path parameters: `{id}`
pub fn create_router(ctx: AxumContext, cors_config: &CorsConfig) -> Router {
    let state: AppState = Arc::new(ctx);
    let cors = build_cors_layer(cors_config);

    Router::new()
        .route(view_contract::HOME_VIEW, get(handlers::views::home))
        .route(
            view_contract::TEST_ABSTRACT_VIEW,
            get(handlers::views::test_abstract),
        )
        .nest("/api", api_routes().layer(cors))
        .route("/health", get(health_check))
        .with_state(state)
}

/// Create a router that also serves static assets (scripts, styles).
///
/// API and view routes take priority; anything unmatched falls back to the
/// asset directory, which 404s on missing files.
pub fn create_router_with_assets<P: AsRef<Path>>(
    ctx: AxumContext,
    static_dir: P,
    cors_config: &CorsConfig,
) -> Router {
    let serve_dir = ServeDir::new(static_dir.as_ref());

    create_router(ctx, cors_config).fallback_service(serve_dir)
}

/// Health check endpoint.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}
