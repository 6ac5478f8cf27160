use anyhow::Result;
use serde::Deserialize;
use std::env;

/// Fixed page size sent with every search.
pub const RESULTS_PER_PAGE: u32 = 12;

/// Search term used when the text field is empty.
pub const DEFAULT_SEARCH_TERM: &str = "nature";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub unsplash: UnsplashConfig,
    pub gallery: GalleryConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Clone, Deserialize)]
pub struct UnsplashConfig {
    pub access_key: String,
    pub api_base: String,
    pub timeout_secs: u64,
}

// Keeps the access key out of the startup log line.
impl std::fmt::Debug for UnsplashConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UnsplashConfig")
            .field("access_key", &if self.access_key.is_empty() { "<unset>" } else { "<redacted>" })
            .field("api_base", &self.api_base)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GalleryConfig {
    /// Initial value of the `description` property shown in the settings pane.
    pub description: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()?,
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                cors_allowed_origins: env::var("ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| "http://localhost:3000".to_string())
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
            },
            unsplash: UnsplashConfig {
                access_key: env::var("UNSPLASH_ACCESS_KEY").unwrap_or_default(),
                api_base: env::var("UNSPLASH_API_BASE")
                    .unwrap_or_else(|_| "https://api.unsplash.com".to_string()),
                timeout_secs: env::var("UNSPLASH_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()?,
            },
            gallery: GalleryConfig {
                description: env::var("GALLERY_DESCRIPTION").unwrap_or_default(),
            },
        })
    }
}
