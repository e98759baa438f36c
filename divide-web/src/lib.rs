//! divide-web library - the digitaldivide.ai atlas service
//!
//! Read-only HTTP facade over the language-technology database: every API
//! endpoint runs one SQL query and returns JSON. Also serves the embedded
//! map UI.

use axum::Router;
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod db;
pub mod pagination;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (read-only)
    pub db: PgPool,
}

impl AppState {
    /// Create new application state
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    // JSON API
    let api = Router::new()
        .route("/api/languages", get(api::list_languages))
        .route("/api/languages/:id", get(api::get_language))
        .route(
            "/api/languages/:id/translation-pairs",
            get(api::language_translation_pairs),
        )
        .route("/api/languages/:id/connections", get(api::language_connections))
        .route("/api/languages/:id/location", get(api::language_location))
        .route("/api/family/:id", get(api::family_languages))
        .route("/api/subfamily/:id", get(api::subfamily_languages))
        .route("/api/directory", get(api::directory))
        .route("/api/pairs", get(api::list_pairs))
        .route("/api/stats", get(api::get_stats));

    // Embedded UI, health and build identification
    let public = Router::new()
        .route("/", get(api::serve_index))
        .route("/static/app.js", get(api::serve_app_js))
        .route("/build_info", get(api::get_build_info))
        .merge(api::health_routes());

    Router::new()
        .merge(api)
        .merge(public)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        // Public informational site, no credentialed requests
        .layer(CorsLayer::permissive())
}
