use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod auth;
pub mod capture;
pub mod chat;
pub mod config;
pub mod content;
pub mod error;
pub mod handlers;
pub mod models;
pub mod store;

use config::Config;
use store::Store;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub config: Arc<Config>,
}

/// Build the full gateway router: public content/health routes plus the
/// identity-protected mood/journal/user resources.
pub fn router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/readyz", get(handlers::health::readyz))
        .route("/api/content/myths", get(handlers::content::list_myths))
        .route("/api/content/stories", get(handlers::content::list_stories))
        .route("/api/content/prompts", get(handlers::content::list_prompts));

    let protected_routes = Router::new()
        // Mood entries
        .route("/api/mood", get(handlers::mood::list_mood_entries))
        .route("/api/mood", post(handlers::mood::create_mood_entry))
        // Journal entries
        .route("/api/journal", get(handlers::journal::list_journal_entries))
        .route("/api/journal", post(handlers::journal::create_journal_entry))
        // Lazy profile creation on first authenticated contact
        .route("/api/user", post(handlers::user::create_user))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::middleware::require_auth,
        ));

    let allowed_origins: Vec<axum::http::HeaderValue> = {
        let mut origins = Vec::new();
        if let Ok(hv) = state.config.frontend_url.parse::<axum::http::HeaderValue>() {
            origins.push(hv);
        }
        // In dev, also allow LAN access (e.g. testing from another device)
        if let Ok(extra) = std::env::var("CORS_EXTRA_ORIGINS") {
            for o in extra.split(',') {
                if let Ok(hv) = o.trim().parse::<axum::http::HeaderValue>() {
                    origins.push(hv);
                }
            }
        }
        origins
    };
    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
        .allow_credentials(true);

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
