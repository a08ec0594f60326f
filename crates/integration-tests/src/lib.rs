//! Integration tests for Tradepost.
//!
//! # Test Categories
//!
//! - `web_listings` - Full-router tests over the in-memory store,
//!   driven with `tower::ServiceExt::oneshot` (no network, no
//!   credentials; these run in CI)
//! - `live_site` - Smoke tests against a running server backed by real
//!   Firestore credentials; marked `#[ignore]`
//!
//! # Running Tests
//!
//! ```bash
//! # Router tests
//! cargo test -p tradepost-integration-tests
//!
//! # Live smoke tests (server must be running)
//! TRADEPOST_BASE_URL=http://localhost:3000 \
//!   cargo test -p tradepost-integration-tests -- --ignored
//! ```

use std::sync::Arc;

use secrecy::SecretString;
use tradepost_web::config::{AppConfig, FirestoreConfig};
use tradepost_web::state::AppState;
use tradepost_web::store::MemoryStore;

/// Configuration for router tests; the Firestore parameters are never
/// used because the state is built over the in-memory store.
#[must_use]
pub fn test_config() -> AppConfig {
    AppConfig {
        host: "127.0.0.1".parse().expect("valid test host"),
        port: 0,
        firestore: FirestoreConfig {
            project_id: "tradepost-test".to_string(),
            api_key: SecretString::from("test-only-key"),
            collection: "listings".to_string(),
        },
    }
}

/// Application state over a fresh in-memory store; returns the store
/// handle so tests can inspect it directly.
#[must_use]
pub fn test_state() -> (AppState, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let state = AppState::new(test_config(), store.clone());
    (state, store)
}
