//! In-memory listing store for tests.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tradepost_core::{Listing, ListingId};
use uuid::Uuid;

use crate::store::{FETCH_LIMIT, ListingStore, StoreError};

/// In-memory [`ListingStore`] with the same ordering contract as the
/// remote store. Used by router-level tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    listings: RwLock<Vec<(ListingId, Listing)>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of listings currently held.
    pub async fn len(&self) -> usize {
        self.listings.read().await.len()
    }

    /// Whether the store holds no listings.
    pub async fn is_empty(&self) -> bool {
        self.listings.read().await.is_empty()
    }
}

#[async_trait]
impl ListingStore for MemoryStore {
    async fn insert(&self, listing: &Listing) -> Result<ListingId, StoreError> {
        let id = ListingId::from(Uuid::new_v4().to_string());
        self.listings
            .write()
            .await
            .push((id.clone(), listing.clone()));
        Ok(id)
    }

    async fn list_newest_first(&self) -> Result<Vec<(ListingId, Listing)>, StoreError> {
        let mut rows: Vec<(ListingId, Listing)> = self.listings.read().await.clone();
        // Stable sort: ties keep insertion order, matching the remote
        // store's behavior for identical timestamps.
        rows.sort_by(|a, b| b.1.created_at.cmp(&a.1.created_at));
        rows.truncate(FETCH_LIMIT);
        Ok(rows)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tradepost_core::NewListing;

    fn listing(title: &str, created_at: &str) -> Listing {
        NewListing::from_form(title, "", "10", "", "055")
            .unwrap()
            .into_listing(created_at.to_string())
    }

    #[tokio::test]
    async fn test_list_orders_newest_first() {
        let store = MemoryStore::new();
        store
            .insert(&listing("older", "2026-08-29T10:00:00Z"))
            .await
            .unwrap();
        store
            .insert(&listing("newest", "2026-08-30T10:00:00Z"))
            .await
            .unwrap();
        store
            .insert(&listing("oldest", "2026-08-28T10:00:00Z"))
            .await
            .unwrap();

        let rows = store.list_newest_first().await.unwrap();
        let titles: Vec<&str> = rows.iter().map(|(_, l)| l.title.as_str()).collect();
        assert_eq!(titles, ["newest", "older", "oldest"]);
    }

    #[tokio::test]
    async fn test_insert_assigns_unique_ids() {
        let store = MemoryStore::new();
        let a = store
            .insert(&listing("a", "2026-08-30T10:00:00Z"))
            .await
            .unwrap();
        let b = store
            .insert(&listing("b", "2026-08-30T10:00:00Z"))
            .await
            .unwrap();
        assert_ne!(a, b);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_list_caps_at_fetch_limit() {
        let store = MemoryStore::new();
        for i in 0..FETCH_LIMIT + 5 {
            store
                .insert(&listing(&format!("item {i}"), "2026-08-30T10:00:00Z"))
                .await
                .unwrap();
        }
        let rows = store.list_newest_first().await.unwrap();
        assert_eq!(rows.len(), FETCH_LIMIT);
    }
}
