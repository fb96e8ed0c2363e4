//! Garden Records - Backend Server
//!
//! A small record keeper for a garden: seed varieties, growing
//! locations, active cultures and harvests, persisted as one JSON file
//! per collection, with a generated yearly Markdown report (bilan).

use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod services;
pub mod store;

pub use config::Config;
pub use store::JsonStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<JsonStore>,
    pub config: Arc<Config>,
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let data_dir = state.config.storage.data_dir.clone();
    let body_limit = state.config.upload.max_body_bytes;

    Router::new()
        .route("/", get(root))
        .route("/health", get(handlers::health::health_check))
        .nest("/api", routes::api_routes())
        // Icons and uploaded pictures, exactly where the records point.
        .nest_service("/data", ServeDir::new(data_dir))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Garden Records API v1.0"
}
