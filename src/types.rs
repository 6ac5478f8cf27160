// Type definitions and enums

use crate::config::{DEFAULT_SEARCH_TERM, RESULTS_PER_PAGE};

/// Orientation filter offered by the selector, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Landscape,
    Portrait,
    Squarish,
}

impl Orientation {
    pub const ALL: [Orientation; 3] = [
        Orientation::Landscape,
        Orientation::Portrait,
        Orientation::Squarish,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Landscape => "landscape",
            Orientation::Portrait => "portrait",
            Orientation::Squarish => "squarish",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Orientation::Landscape => "Landscape",
            Orientation::Portrait => "Portrait",
            Orientation::Squarish => "Squarish",
        }
    }

    /// Parse a selector value. Anything unrecognised maps to the first option.
    pub fn from_selector(value: &str) -> Self {
        match value {
            "portrait" => Orientation::Portrait,
            "squarish" => Orientation::Squarish,
            _ => Orientation::Landscape,
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parameters of a single dispatch. Not retained after the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub search_term: String,
    pub orientation: Orientation,
    pub results_per_page: u32,
}

impl SearchQuery {
    /// Build a query from raw input values; an empty term falls back to the default.
    pub fn from_input(text: &str, orientation: Orientation) -> Self {
        let search_term = if text.is_empty() {
            DEFAULT_SEARCH_TERM.to_string()
        } else {
            text.to_string()
        };

        Self {
            search_term,
            orientation,
            results_per_page: RESULTS_PER_PAGE,
        }
    }
}

/// One thumbnail returned by the photo search.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ImageResult {
    pub thumbnail_url: String,
    pub description: Option<String>,
}

impl ImageResult {
    pub fn new(thumbnail_url: impl Into<String>, description: Option<String>) -> Self {
        Self {
            thumbnail_url: thumbnail_url.into(),
            description,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::http::StatusCode;

        let status = match &self {
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        };

        (
            status,
            axum::Json(serde_json::json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;
