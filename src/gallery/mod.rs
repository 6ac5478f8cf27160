//! Gallery Component
//!
//! The image gallery as a host-independent component:
//! - `view` - the skeleton markup
//! - `dispatcher` - one search per trigger, latest request wins
//! - `mapper` - image records to cards
//! - `host` - lifecycle hooks and settings schema for the host runtime

pub mod dispatcher;
pub mod host;
pub mod mapper;
pub mod surface;
pub mod view;

pub use dispatcher::{DispatchOutcome, GalleryEvent, QueryDispatcher};
pub use host::{GalleryProperties, HostAdapter, PropertyPaneConfiguration, SemanticColors, Theme};
pub use surface::Surface;

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::search::PhotoSearch;
use crate::types::{AppResult, Orientation, SearchQuery};

/// One instance of the gallery component. Cheap to clone; clones share state.
#[derive(Clone)]
pub struct ImageGallery {
    inner: Arc<GalleryInner>,
}

struct GalleryInner {
    instance_id: Uuid,
    surface: RwLock<Surface>,
    properties: RwLock<GalleryProperties>,
    dispatcher: QueryDispatcher,
}

impl ImageGallery {
    pub fn new(search: Arc<dyn PhotoSearch>, properties: GalleryProperties) -> Self {
        Self {
            inner: Arc::new(GalleryInner {
                instance_id: Uuid::new_v4(),
                surface: RwLock::new(Surface::new()),
                properties: RwLock::new(properties),
                dispatcher: QueryDispatcher::new(search),
            }),
        }
    }

    pub fn instance_id(&self) -> Uuid {
        self.inner.instance_id
    }

    /// Replace the surface with the initial skeleton.
    pub async fn render(&self) {
        let mut surface = self.inner.surface.write().await;
        view::render(&mut surface);
        debug!(instance = %self.inner.instance_id, "Gallery rendered");
    }

    pub async fn html(&self) -> String {
        self.inner.surface.read().await.to_html()
    }

    pub async fn results_html(&self) -> String {
        self.inner.surface.read().await.results_html()
    }

    pub async fn style_attribute(&self) -> String {
        self.inner.surface.read().await.style_attribute()
    }

    pub async fn card_count(&self) -> usize {
        self.inner.surface.read().await.cards().len()
    }

    /// Mirror what the user typed and selected into the surface.
    pub async fn set_input(&self, text: &str, orientation: Orientation) {
        let mut surface = self.inner.surface.write().await;
        surface.search_text = text.to_string();
        surface.orientation = orientation;
    }

    pub async fn properties(&self) -> GalleryProperties {
        self.inner.properties.read().await.clone()
    }

    pub async fn set_description(&self, description: String) {
        self.inner.properties.write().await.description = description;
    }

    /// Handle a user event; searches only on click or Enter.
    pub async fn handle_event(&self, event: GalleryEvent) -> DispatchOutcome {
        if !event.triggers_search() {
            return DispatchOutcome::Ignored;
        }
        self.fetch_images().await
    }

    /// Apply the values the user typed and selected, then handle the event.
    /// The query is built under the same guard that writes the input, so a
    /// concurrent event cannot swap in its own values.
    pub async fn handle_event_with_input(
        &self,
        text: &str,
        orientation: Orientation,
        event: GalleryEvent,
    ) -> DispatchOutcome {
        let query = {
            let mut surface = self.inner.surface.write().await;
            surface.search_text = text.to_string();
            surface.orientation = orientation;
            SearchQuery::from_input(&surface.search_text, surface.orientation)
        };

        if !event.triggers_search() {
            return DispatchOutcome::Ignored;
        }
        self.search(&query).await
    }

    /// Read the current input values and run one search.
    pub async fn fetch_images(&self) -> DispatchOutcome {
        let query = {
            let surface = self.inner.surface.read().await;
            SearchQuery::from_input(&surface.search_text, surface.orientation)
        };
        self.search(&query).await
    }

    /// Run one search and apply it to the results container if it is still
    /// the latest one issued. Failures are logged and swallowed.
    pub async fn search(&self, query: &SearchQuery) -> DispatchOutcome {
        let dispatch = self.inner.dispatcher.dispatch(query).await;

        let images = match dispatch.result {
            Ok(images) => images,
            Err(e) => {
                error!(
                    instance = %self.inner.instance_id,
                    query = %query.search_term,
                    error = %e,
                    "Error fetching images"
                );
                return DispatchOutcome::Failed;
            }
        };

        let mut surface = self.inner.surface.write().await;
        if !self.inner.dispatcher.is_current(dispatch.generation) {
            debug!(
                generation = dispatch.generation,
                latest = self.inner.dispatcher.current_generation(),
                "Discarding stale search response"
            );
            return DispatchOutcome::Stale;
        }

        mapper::render_images(&mut surface, &images);
        info!(
            instance = %self.inner.instance_id,
            query = %query.search_term,
            count = images.len(),
            "Rendered search results"
        );
        DispatchOutcome::Rendered(images.len())
    }
}

#[async_trait]
impl HostAdapter for ImageGallery {
    async fn on_init(&self) -> AppResult<()> {
        info!(instance = %self.inner.instance_id, "Initializing image gallery");
        self.render().await;
        Ok(())
    }

    async fn on_theme_change(&self, theme: Option<&Theme>) {
        let Some(colors) = theme.and_then(|t| t.semantic_colors.as_ref()) else {
            return;
        };

        let mut surface = self.inner.surface.write().await;
        for (name, value) in colors.css_properties() {
            if !surface.set_style_property(name, value) {
                warn!(property = name, "Ignoring theme colour that is not a single CSS value");
            }
        }
    }

    fn config_schema(&self) -> PropertyPaneConfiguration {
        PropertyPaneConfiguration::gallery_settings()
    }
}
