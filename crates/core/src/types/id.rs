//! Newtype ID for type-safe listing references.

use serde::{Deserialize, Serialize};

/// Opaque identifier assigned by the document store on creation.
///
/// Immutable once assigned; used only as a key and in diagnostics, never
/// displayed to visitors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingId(String);

impl ListingId {
    /// Create an ID from the store-assigned value.
    #[must_use]
    pub const fn new(id: String) -> Self {
        Self(id)
    }

    /// Get the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ListingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ListingId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ListingId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<ListingId> for String {
    fn from(id: ListingId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_id_display_matches_inner() {
        let id = ListingId::from("a1B2c3");
        assert_eq!(id.to_string(), "a1B2c3");
        assert_eq!(id.as_str(), "a1B2c3");
    }
}
