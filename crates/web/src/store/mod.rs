//! Listing store clients.
//!
//! # Architecture
//!
//! - The store is the source of truth - NO local sync, direct API calls
//! - Firestore's typed-value JSON envelope is encoded and decoded here,
//!   so the rest of the app only ever sees the normalized [`Listing`]
//!   shape
//! - Listings are immutable: the boundary is insert plus ordered read,
//!   nothing else

mod firestore;
mod memory;

pub use firestore::FirestoreStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use thiserror::Error;
use tradepost_core::{Listing, ListingId};

/// Fixed fetch size for the ordered read: only the latest 100 listings
/// are ever requested.
pub const FETCH_LIMIT: usize = 100;

/// Errors that can occur when talking to the listing store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The store API returned a non-success status.
    #[error("store API returned {status}: {message}")]
    Api { status: u16, message: String },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A stored document is missing a required field.
    #[error("document missing field: {0}")]
    MissingField(&'static str),

    /// A stored document does not have the expected shape.
    #[error("malformed document: {0}")]
    MalformedDocument(String),
}

/// Remote document collection holding the listings.
///
/// Implementations must return reads ordered by `created_at` descending
/// (newest first), capped at [`FETCH_LIMIT`] records.
#[async_trait]
pub trait ListingStore: Send + Sync {
    /// Persist a stamped listing record; the store assigns and returns
    /// its ID.
    async fn insert(&self, listing: &Listing) -> Result<ListingId, StoreError>;

    /// Read the latest listings, newest first.
    async fn list_newest_first(&self) -> Result<Vec<(ListingId, Listing)>, StoreError>;
}
