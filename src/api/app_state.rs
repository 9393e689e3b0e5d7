use crate::observability::AppMetrics;
use crate::render::Renderer;
use crate::storage::repository::StoryStore;
use std::sync::Arc;

/// Application state shared by the story routes
#[derive(Clone)]
pub struct AppState {
    /// Story store, constructed once by the process entry point
    pub store: Arc<dyn StoryStore>,
    /// Renderer turning view models into response bodies
    pub renderer: Arc<dyn Renderer>,
    /// Request counters
    pub metrics: Arc<AppMetrics>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("store", &"Arc<dyn StoryStore>")
            .field("renderer", &"Arc<dyn Renderer>")
            .field("metrics", &self.metrics)
            .finish()
    }
}

impl AppState {
    /// Create new application state
    pub fn new(
        store: Arc<dyn StoryStore>,
        renderer: Box<dyn Renderer>,
        metrics: Arc<AppMetrics>,
    ) -> Self {
        Self {
            store,
            renderer: Arc::from(renderer),
            metrics,
        }
    }

    /// Create state with the built-in HTML renderer and fresh metrics
    pub fn with_html(store: Arc<dyn StoryStore>) -> Self {
        Self::new(
            store,
            Box::new(crate::render::HtmlRenderer::default()),
            Arc::new(AppMetrics::default()),
        )
    }
}
