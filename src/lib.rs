// Image Gallery - embeddable photo-search component with an axum host

pub mod config;
pub mod models;
pub mod types;
pub mod gallery;   // The component: view, dispatcher, mapper, host hooks
pub mod search;    // Photo search backends (Unsplash)
pub mod routes;
pub mod middleware;
pub mod utils;

// Re-exports for convenience
pub use config::Config;
pub use gallery::ImageGallery;
pub use models::AppState;

pub fn create_router(state: AppState) -> axum::Router {
    routes::create_router(state)
}
