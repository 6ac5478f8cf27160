//! Unsplash Client
//!
//! Issues `GET {api_base}/search/photos` with:
//! - `query` - the search term
//! - `client_id` - the access key injected through configuration
//! - `orientation` - landscape, portrait or squarish
//! - `per_page` - the fixed page size
//!
//! Only `results[].urls.small` and `results[].alt_description` are read;
//! every other field of the response is ignored.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

use super::PhotoSearch;
use crate::config::UnsplashConfig;
use crate::types::{ImageResult, SearchQuery};

/// Errors that can occur during a photo search
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Unsplash access key not configured")]
    MissingAccessKey,

    #[error("Search request failed: {0}")]
    RequestFailed(String),

    #[error("Search endpoint returned HTTP {0}")]
    HttpStatus(u16),

    #[error("Failed to parse search results: {0}")]
    ParseError(String),
}

#[derive(Debug, Deserialize)]
struct SearchPhotosResponse {
    results: Vec<UnsplashPhoto>,
}

#[derive(Debug, Deserialize)]
struct UnsplashPhoto {
    urls: PhotoUrls,
    #[serde(default)]
    alt_description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PhotoUrls {
    small: String,
}

impl From<UnsplashPhoto> for ImageResult {
    fn from(photo: UnsplashPhoto) -> Self {
        ImageResult::new(photo.urls.small, photo.alt_description)
    }
}

/// Unsplash client for the `search/photos` endpoint
pub struct UnsplashClient {
    http: reqwest::Client,
    api_base: String,
    access_key: String,
}

impl UnsplashClient {
    /// Create a new client against the public API
    pub fn new(access_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: "https://api.unsplash.com".to_string(),
            access_key,
        }
    }

    /// Configure client from config
    pub fn from_config(config: &UnsplashConfig) -> Result<Self, SearchError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SearchError::RequestFailed(e.to_string()))?;

        Ok(Self {
            http,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            access_key: config.access_key.clone(),
        })
    }

    /// Point the client at a different API root
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/search/photos", self.api_base)
    }
}

#[async_trait]
impl PhotoSearch for UnsplashClient {
    async fn search_photos(&self, query: &SearchQuery) -> Result<Vec<ImageResult>, SearchError> {
        if self.access_key.is_empty() {
            return Err(SearchError::MissingAccessKey);
        }

        info!(
            query = %query.search_term,
            orientation = %query.orientation,
            per_page = query.results_per_page,
            "Searching Unsplash photos"
        );

        let per_page = query.results_per_page.to_string();
        let response = self
            .http
            .get(self.endpoint())
            .query(&[
                ("query", query.search_term.as_str()),
                ("client_id", self.access_key.as_str()),
                ("orientation", query.orientation.as_str()),
                ("per_page", per_page.as_str()),
            ])
            .send()
            .await
            .map_err(|e| SearchError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::HttpStatus(status.as_u16()));
        }

        let body: SearchPhotosResponse = response
            .json()
            .await
            .map_err(|e| SearchError::ParseError(e.to_string()))?;

        debug!(count = body.results.len(), "Raw Unsplash response received");

        Ok(body.results.into_iter().map(ImageResult::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Orientation;
    use mockito::Matcher;

    fn client_for(server: &mockito::ServerGuard) -> UnsplashClient {
        UnsplashClient::new("test-key".to_string()).with_api_base(server.url())
    }

    #[tokio::test]
    async fn test_search_sends_expected_params() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/search/photos")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("query".into(), "red fox".into()),
                Matcher::UrlEncoded("client_id".into(), "test-key".into()),
                Matcher::UrlEncoded("orientation".into(), "portrait".into()),
                Matcher::UrlEncoded("per_page".into(), "12".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "total": 2,
                    "results": [
                        {"id": "a", "urls": {"small": "https://img/a.jpg", "raw": "x"}, "alt_description": "a fox"},
                        {"id": "b", "urls": {"small": "https://img/b.jpg"}, "alt_description": null}
                    ]
                }"#,
            )
            .create_async()
            .await;

        let client = client_for(&server);
        let query = SearchQuery::from_input("red fox", Orientation::Portrait);
        let images = client.search_photos(&query).await.unwrap();

        mock.assert_async().await;
        assert_eq!(
            images,
            vec![
                ImageResult::new("https://img/a.jpg", Some("a fox".to_string())),
                ImageResult::new("https://img/b.jpg", None),
            ]
        );
    }

    #[tokio::test]
    async fn test_missing_alt_description_field() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/search/photos")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"results": [{"urls": {"small": "https://img/c.jpg"}}]}"#)
            .create_async()
            .await;

        let images = client_for(&server)
            .search_photos(&SearchQuery::from_input("", Orientation::Landscape))
            .await
            .unwrap();
        assert_eq!(images, vec![ImageResult::new("https://img/c.jpg", None)]);
    }

    #[tokio::test]
    async fn test_http_error_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/search/photos")
            .match_query(Matcher::Any)
            .with_status(401)
            .with_body(r#"{"errors": ["OAuth error: The access token is invalid"]}"#)
            .create_async()
            .await;

        let err = client_for(&server)
            .search_photos(&SearchQuery::from_input("cats", Orientation::Landscape))
            .await
            .unwrap_err();
        assert!(matches!(err, SearchError::HttpStatus(401)));
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/search/photos")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let err = client_for(&server)
            .search_photos(&SearchQuery::from_input("cats", Orientation::Landscape))
            .await
            .unwrap_err();
        assert!(matches!(err, SearchError::ParseError(_)));
    }

    #[tokio::test]
    async fn test_missing_access_key() {
        let client = UnsplashClient::new(String::new());
        let err = client
            .search_photos(&SearchQuery::from_input("cats", Orientation::Landscape))
            .await
            .unwrap_err();
        assert!(matches!(err, SearchError::MissingAccessKey));
    }
}
