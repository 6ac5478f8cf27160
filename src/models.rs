use crate::config::Config;
use crate::gallery::{DispatchOutcome, ImageGallery};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub gallery: ImageGallery,
}

// API Request/Response types

/// Button activation: the current text field and selector values.
#[derive(Debug, serde::Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub orientation: String,
}

/// Key event on the text field, with the values at that moment.
#[derive(Debug, serde::Deserialize)]
pub struct KeyPressRequest {
    pub key: String,
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub orientation: String,
}

#[derive(Debug, serde::Serialize)]
pub struct SearchResponse {
    pub outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    /// Inner markup of the results container after the event.
    pub results_html: String,
}

impl SearchResponse {
    pub fn new(outcome: DispatchOutcome, results_html: String) -> Self {
        Self {
            outcome: outcome.as_str(),
            count: outcome.count(),
            results_html,
        }
    }
}

#[derive(Debug, serde::Serialize)]
pub struct GalleryResponse {
    pub instance_id: uuid::Uuid,
    pub html: String,
}

#[derive(Debug, serde::Serialize)]
pub struct ThemeResponse {
    pub style: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct UpdatePropertiesRequest {
    pub description: Option<String>,
}

#[derive(Debug, serde::Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub version: String,
}
