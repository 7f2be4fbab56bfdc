use std::sync::Arc;

use crate::{
    catalog::CatalogStore,
    config::{default_personal_top_k, default_similar_top_k, Config},
};

/// Shared application state
///
/// The catalog is read-only after load, so requests share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<CatalogStore>,
    /// Recommendations returned for a single seed title
    pub similar_top_k: usize,
    /// Candidates considered for multi-title recommendations
    pub personal_top_k: usize,
}

impl AppState {
    /// Creates state over a loaded store with the default result sizes
    pub fn new(store: CatalogStore) -> Self {
        Self {
            store: Arc::new(store),
            similar_top_k: default_similar_top_k(),
            personal_top_k: default_personal_top_k(),
        }
    }

    /// Creates state with result sizes taken from the configuration
    pub fn from_config(store: CatalogStore, config: &Config) -> Self {
        Self {
            store: Arc::new(store),
            similar_top_k: config.similar_top_k,
            personal_top_k: config.personal_top_k,
        }
    }
}
