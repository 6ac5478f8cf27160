//! Query dispatcher: one outbound search per trigger, tagged with a
//! generation number so only the latest request may touch the results.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::search::{PhotoSearch, SearchError};
use crate::types::{ImageResult, SearchQuery};

/// Key that triggers a search from the text field.
pub const ENTER_KEY: &str = "Enter";

/// User actions the component reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryEvent {
    SearchClicked,
    KeyPress { key: String },
}

impl GalleryEvent {
    pub fn triggers_search(&self) -> bool {
        match self {
            GalleryEvent::SearchClicked => true,
            GalleryEvent::KeyPress { key } => key == ENTER_KEY,
        }
    }
}

/// What happened to a dispatched search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The results container now holds this many cards.
    Rendered(usize),
    /// A newer search was issued while this one was in flight.
    Stale,
    /// The request failed; the container was left as it was.
    Failed,
    /// The event did not trigger a search.
    Ignored,
}

impl DispatchOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            DispatchOutcome::Rendered(_) => "rendered",
            DispatchOutcome::Stale => "stale",
            DispatchOutcome::Failed => "failed",
            DispatchOutcome::Ignored => "ignored",
        }
    }

    pub fn count(&self) -> Option<usize> {
        match self {
            DispatchOutcome::Rendered(n) => Some(*n),
            _ => None,
        }
    }
}

/// A finished request together with the generation it was issued under.
pub struct Dispatch {
    pub generation: u64,
    pub result: Result<Vec<ImageResult>, SearchError>,
}

pub struct QueryDispatcher {
    search: Arc<dyn PhotoSearch>,
    generation: AtomicU64,
}

impl QueryDispatcher {
    pub fn new(search: Arc<dyn PhotoSearch>) -> Self {
        Self {
            search,
            generation: AtomicU64::new(0),
        }
    }

    /// Issue one request. The generation is taken before the first await.
    pub async fn dispatch(&self, query: &SearchQuery) -> Dispatch {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let result = self.search.search_photos(query).await;
        Dispatch { generation, result }
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    pub fn current_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }
}
