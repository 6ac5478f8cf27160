//! Gallery API Routes
//!
//! Forwards browser events to the component and returns the updated markup:
//! - GET /api/gallery - Current component markup
//! - POST /api/gallery/render - Re-render the skeleton
//! - POST /api/gallery/search - Search button activation
//! - POST /api/gallery/keypress - Key event on the search field
//! - POST /api/gallery/theme - Apply a host theme
//! - GET /api/gallery/schema - Settings pane schema
//! - GET/POST /api/gallery/properties - Read or update component properties

use axum::{
    Router,
    routing::{get, post},
    Json,
    extract::{rejection::JsonRejection, State},
    response::Json as ResponseJson,
};
use tracing::{debug, info};

use crate::gallery::{GalleryEvent, GalleryProperties, HostAdapter, PropertyPaneConfiguration, Theme};
use crate::models::{
    AppState, GalleryResponse, KeyPressRequest, SearchRequest, SearchResponse, ThemeResponse,
    UpdatePropertiesRequest,
};
use crate::types::{AppResult, Orientation};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/gallery", get(get_gallery))
        .route("/api/gallery/render", post(render_gallery))
        .route("/api/gallery/search", post(search))
        .route("/api/gallery/keypress", post(keypress))
        .route("/api/gallery/theme", post(apply_theme))
        .route("/api/gallery/schema", get(get_schema))
        .route("/api/gallery/properties", get(get_properties))
        .route("/api/gallery/properties", post(update_properties))
        .with_state(state)
}

async fn get_gallery(State(state): State<AppState>) -> ResponseJson<GalleryResponse> {
    Json(GalleryResponse {
        instance_id: state.gallery.instance_id(),
        html: state.gallery.html().await,
    })
}

async fn render_gallery(State(state): State<AppState>) -> ResponseJson<GalleryResponse> {
    state.gallery.render().await;
    get_gallery(State(state)).await
}

async fn search(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> AppResult<ResponseJson<SearchResponse>> {
    let Json(request) = payload?;
    info!(query = %request.query, orientation = %request.orientation, "Search button activated");

    let gallery = &state.gallery;
    let outcome = gallery
        .handle_event_with_input(
            &request.query,
            Orientation::from_selector(&request.orientation),
            GalleryEvent::SearchClicked,
        )
        .await;

    Ok(Json(SearchResponse::new(outcome, gallery.results_html().await)))
}

async fn keypress(
    State(state): State<AppState>,
    payload: Result<Json<KeyPressRequest>, JsonRejection>,
) -> AppResult<ResponseJson<SearchResponse>> {
    let Json(request) = payload?;
    debug!(key = %request.key, "Key pressed in search field");

    let gallery = &state.gallery;
    let outcome = gallery
        .handle_event_with_input(
            &request.query,
            Orientation::from_selector(&request.orientation),
            GalleryEvent::KeyPress { key: request.key },
        )
        .await;

    Ok(Json(SearchResponse::new(outcome, gallery.results_html().await)))
}

async fn apply_theme(
    State(state): State<AppState>,
    payload: Result<Json<Option<Theme>>, JsonRejection>,
) -> AppResult<ResponseJson<ThemeResponse>> {
    let Json(theme) = payload?;
    state.gallery.on_theme_change(theme.as_ref()).await;
    Ok(Json(ThemeResponse {
        style: state.gallery.style_attribute().await,
    }))
}

async fn get_schema(State(state): State<AppState>) -> ResponseJson<PropertyPaneConfiguration> {
    Json(state.gallery.config_schema())
}

async fn get_properties(State(state): State<AppState>) -> ResponseJson<GalleryProperties> {
    Json(state.gallery.properties().await)
}

async fn update_properties(
    State(state): State<AppState>,
    payload: Result<Json<UpdatePropertiesRequest>, JsonRejection>,
) -> AppResult<ResponseJson<GalleryProperties>> {
    let Json(request) = payload?;
    if let Some(description) = request.description {
        info!("Updating gallery description");
        state.gallery.set_description(description).await;
    }
    Ok(Json(state.gallery.properties().await))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, GalleryConfig, ServerConfig, UnsplashConfig};
    use crate::gallery::ImageGallery;
    use crate::search::UnsplashClient;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use mockito::Matcher;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_config(api_base: &str) -> Config {
        Config {
            server: ServerConfig {
                port: 0,
                host: "127.0.0.1".to_string(),
                cors_allowed_origins: vec![],
            },
            unsplash: UnsplashConfig {
                access_key: "test-key".to_string(),
                api_base: api_base.to_string(),
                timeout_secs: 5,
            },
            gallery: GalleryConfig { description: "Photos".to_string() },
        }
    }

    async fn test_state(api_base: &str) -> AppState {
        let config = test_config(api_base);
        let client = UnsplashClient::from_config(&config.unsplash).unwrap();
        let gallery = ImageGallery::new(
            Arc::new(client),
            GalleryProperties { description: config.gallery.description.clone() },
        );
        gallery.on_init().await.unwrap();
        AppState { config, gallery }
    }

    async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_search_renders_cards() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/search/photos")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("query".into(), "nature".into()),
                Matcher::UrlEncoded("orientation".into(), "squarish".into()),
            ]))
            .with_status(200)
            .with_body(
                r#"{"results": [
                    {"urls": {"small": "https://img/1.jpg"}, "alt_description": "Tom & Jerry"},
                    {"urls": {"small": "https://img/2.jpg"}, "alt_description": null}
                ]}"#,
            )
            .create_async()
            .await;

        let state = test_state(&server.url()).await;
        let (status, body) = post_json(
            router(state.clone()),
            "/api/gallery/search",
            serde_json::json!({ "query": "", "orientation": "squarish" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["outcome"], "rendered");
        assert_eq!(body["count"], 2);
        let html = body["results_html"].as_str().unwrap();
        assert!(html.contains("<p>Tom &amp; Jerry</p>"));
        assert!(html.contains("<p>No description available</p>"));
        assert_eq!(state.gallery.card_count().await, 2);
    }

    #[tokio::test]
    async fn test_failed_search_is_swallowed() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/search/photos")
            .match_query(Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let state = test_state(&server.url()).await;
        let (status, body) = post_json(
            router(state),
            "/api/gallery/keypress",
            serde_json::json!({ "key": "Enter", "query": "cats", "orientation": "portrait" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["outcome"], "failed");
        assert_eq!(body["results_html"], "");
    }

    #[tokio::test]
    async fn test_non_enter_key_is_ignored() {
        let state = test_state("http://127.0.0.1:9").await;
        let (_, body) = post_json(
            router(state),
            "/api/gallery/keypress",
            serde_json::json!({ "key": "x", "query": "cats", "orientation": "portrait" }),
        )
        .await;

        assert_eq!(body["outcome"], "ignored");
    }

    #[tokio::test]
    async fn test_theme_and_properties() {
        let state = test_state("http://127.0.0.1:9").await;

        let (_, body) = post_json(
            router(state.clone()),
            "/api/gallery/theme",
            serde_json::json!({ "semanticColors": { "bodyText": "#323130" } }),
        )
        .await;
        assert_eq!(body["style"], "--bodyText: #323130;");

        let (_, body) = post_json(
            router(state.clone()),
            "/api/gallery/properties",
            serde_json::json!({ "description": "Landscapes" }),
        )
        .await;
        assert_eq!(body["description"], "Landscapes");
        assert_eq!(state.gallery.properties().await.description, "Landscapes");
    }

    #[tokio::test]
    async fn test_malformed_body_maps_to_json_error() {
        let state = test_state("http://127.0.0.1:9").await;
        let response = router(state.clone())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/gallery/properties")
                    .header("content-type", "application/json")
                    .body(Body::from("{\"description\": "))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["error"].as_str().unwrap().starts_with("Invalid request"));
        assert_eq!(state.gallery.properties().await.description, "Photos");
    }

    #[tokio::test]
    async fn test_overlapping_searches_use_their_own_terms() {
        let mut server = mockito::Server::new_async().await;
        let cats = server
            .mock("GET", "/search/photos")
            .match_query(Matcher::UrlEncoded("query".into(), "cats".into()))
            .with_status(200)
            .with_body(r#"{"results": []}"#)
            .expect(1)
            .create_async()
            .await;
        let dogs = server
            .mock("GET", "/search/photos")
            .match_query(Matcher::UrlEncoded("query".into(), "dogs".into()))
            .with_status(200)
            .with_body(r#"{"results": []}"#)
            .expect(1)
            .create_async()
            .await;

        let state = test_state(&server.url()).await;
        let (a, b) = tokio::join!(
            post_json(
                router(state.clone()),
                "/api/gallery/search",
                serde_json::json!({ "query": "cats", "orientation": "landscape" }),
            ),
            post_json(
                router(state.clone()),
                "/api/gallery/search",
                serde_json::json!({ "query": "dogs", "orientation": "landscape" }),
            )
        );

        assert_eq!(a.0, StatusCode::OK);
        assert_eq!(b.0, StatusCode::OK);
        cats.assert_async().await;
        dogs.assert_async().await;
    }
}
