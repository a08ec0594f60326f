//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::store::ListingStore;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; holds the configuration and the listing
/// store behind the [`ListingStore`] trait so tests can swap in the
/// in-memory store.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AppConfig,
    store: Arc<dyn ListingStore>,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: AppConfig, store: Arc<dyn ListingStore>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, store }),
        }
    }

    /// Get a reference to the application configuration.
    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    /// Get a reference to the listing store.
    #[must_use]
    pub fn store(&self) -> &dyn ListingStore {
        self.inner.store.as_ref()
    }
}
