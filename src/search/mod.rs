//! Search Module
//!
//! Provides photo search for the gallery component:
//! - `PhotoSearch` - the seam the dispatcher talks to
//! - Unsplash (`search/photos`) as the production backend

pub mod unsplash;

pub use unsplash::{UnsplashClient, SearchError};

use async_trait::async_trait;
use crate::types::{ImageResult, SearchQuery};

/// A backend able to answer one photo query with a list of thumbnails.
#[async_trait]
pub trait PhotoSearch: Send + Sync {
    async fn search_photos(&self, query: &SearchQuery) -> Result<Vec<ImageResult>, SearchError>;
}
