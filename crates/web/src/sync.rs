//! Listing synchronization: fetch, filter, map.
//!
//! Each reload is one request-scoped pass: read the latest listings from
//! the store, keep the ones matching the visitor's filter, and map the
//! survivors to display cards. Rapid reloads race independently against
//! the store; the later-completing response wins the visible render.
//! No cancellation, no retries.

use tracing::instrument;

use crate::store::ListingStore;
use crate::views::ListingCard;

/// Outcome of one reload, ready for rendering.
///
/// A failed fetch yields an empty card list with `failed` set; templates
/// render the failure placeholder instead of the empty state.
#[derive(Debug, Default)]
pub struct ListingFeed {
    pub cards: Vec<ListingCard>,
    pub failed: bool,
}

impl ListingFeed {
    fn failure() -> Self {
        Self {
            cards: Vec::new(),
            failed: true,
        }
    }
}

/// Fetch the latest listings and build the renderable feed.
///
/// When `filter` is non-empty, only listings whose combined searchable
/// text contains it (case-insensitively) are kept. Filtering never
/// reorders: display order is exactly the store's descending
/// `created_at`. Fetch failures are logged and reported as the failure
/// placeholder; this function always reaches a terminal rendered state.
#[instrument(skip(store))]
pub async fn reload(store: &dyn ListingStore, filter: &str) -> ListingFeed {
    let rows = match store.list_newest_first().await {
        Ok(rows) => rows,
        Err(err) => {
            tracing::error!(error = %err, "Failed to load listings");
            return ListingFeed::failure();
        }
    };

    let filter = filter.trim().to_lowercase();
    let cards = rows
        .iter()
        .filter(|(_, listing)| filter.is_empty() || listing.search_text().contains(&filter))
        .map(|(id, listing)| ListingCard::from_listing(id, listing))
        .collect();

    ListingFeed {
        cards,
        failed: false,
    }
}
