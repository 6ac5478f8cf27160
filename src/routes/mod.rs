//! HTTP Routes
//!
//! The host runtime for the gallery component:
//! - `/` - Page embedding the rendered component
//! - `/api/gallery` - Component events, theme and settings
//! - `/api/health` - Health checks

pub mod gallery;
pub mod health;
pub mod ui;

use axum::Router;
use tower_http::trace::TraceLayer;
use crate::middleware::apply_cors;
use crate::models::AppState;
use tracing::info;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    info!("Creating application router");

    let origins = state.config.server.cors_allowed_origins.clone();

    let router = Router::new()
        .merge(gallery::router(state.clone()))
        .merge(health::router())
        .merge(ui::router(state));

    apply_cors(router, &origins).layer(TraceLayer::new_for_http())
}
