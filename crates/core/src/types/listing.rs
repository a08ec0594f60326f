//! The listing model.

use serde::{Deserialize, Serialize};

use crate::types::price::Price;

/// Errors that can occur when building a [`NewListing`] from form input.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ListingError {
    /// The title is empty after trimming.
    #[error("title cannot be empty")]
    EmptyTitle,
    /// The phone is empty after trimming.
    #[error("phone cannot be empty")]
    EmptyPhone,
}

/// A classified-ad record as stored in the document collection.
///
/// Listings are immutable once created: there is no update or delete path.
/// `created_at` is an RFC 3339 timestamp string stamped by the writer and
/// is the sole sort key (descending, newest first).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Listing {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: Price,
    #[serde(default)]
    pub location: String,
    pub phone: String,
    pub created_at: String,
}

impl Listing {
    /// The combined searchable text of this listing, lowercased.
    ///
    /// Concatenates title, description, location, and the plain price
    /// amount; the browse filter does a case-insensitive substring match
    /// against this.
    #[must_use]
    pub fn search_text(&self) -> String {
        format!(
            "{} {} {} {}",
            self.title,
            self.description,
            self.location,
            self.price.amount()
        )
        .to_lowercase()
    }
}

/// A validated listing payload, not yet stamped or persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewListing {
    pub title: String,
    pub description: String,
    pub price: Price,
    pub location: String,
    pub phone: String,
}

impl NewListing {
    /// Build a validated payload from raw form field values.
    ///
    /// Text fields are trimmed; the price is parsed with invalid and
    /// negative input clamped to zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the title or phone is empty after trimming.
    pub fn from_form(
        title: &str,
        description: &str,
        price: &str,
        location: &str,
        phone: &str,
    ) -> Result<Self, ListingError> {
        let title = title.trim();
        let phone = phone.trim();

        if title.is_empty() {
            return Err(ListingError::EmptyTitle);
        }
        if phone.is_empty() {
            return Err(ListingError::EmptyPhone);
        }

        Ok(Self {
            title: title.to_owned(),
            description: description.trim().to_owned(),
            price: Price::parse(price),
            location: location.trim().to_owned(),
            phone: phone.to_owned(),
        })
    }

    /// Stamp the payload with its creation timestamp, producing the record
    /// handed to the store.
    #[must_use]
    pub fn into_listing(self, created_at: String) -> Listing {
        Listing {
            title: self.title,
            description: self.description,
            price: self.price,
            location: self.location,
            phone: self.phone,
            created_at,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sofa() -> NewListing {
        NewListing::from_form("Sofa", "Three-seater", "150", "Accra", "+233 55 123 4567")
            .unwrap()
    }

    #[test]
    fn test_from_form_trims_fields() {
        let listing =
            NewListing::from_form("  Sofa ", " comfy ", "150", " Accra ", " 055 123 ").unwrap();
        assert_eq!(listing.title, "Sofa");
        assert_eq!(listing.description, "comfy");
        assert_eq!(listing.location, "Accra");
        assert_eq!(listing.phone, "055 123");
    }

    #[test]
    fn test_from_form_rejects_empty_title() {
        let err = NewListing::from_form("   ", "", "10", "", "055").unwrap_err();
        assert_eq!(err, ListingError::EmptyTitle);
    }

    #[test]
    fn test_from_form_rejects_empty_phone() {
        let err = NewListing::from_form("Sofa", "", "10", "", "  ").unwrap_err();
        assert_eq!(err, ListingError::EmptyPhone);
    }

    #[test]
    fn test_from_form_defaults_bad_price_to_zero() {
        let listing = NewListing::from_form("Sofa", "", "not-a-price", "", "055").unwrap();
        assert_eq!(listing.price, Price::ZERO);
    }

    #[test]
    fn test_into_listing_stamps_created_at() {
        let listing = sofa().into_listing("2026-08-30T12:00:00Z".to_string());
        assert_eq!(listing.created_at, "2026-08-30T12:00:00Z");
        assert_eq!(listing.price.display(), "GHS 150.00");
    }

    #[test]
    fn test_search_text_is_lowercased_and_includes_price() {
        let listing = sofa().into_listing("2026-08-30T12:00:00Z".to_string());
        let text = listing.search_text();
        assert!(text.contains("sofa"));
        assert!(text.contains("three-seater"));
        assert!(text.contains("accra"));
        assert!(text.contains("150"));
        assert!(!text.contains("Sofa"));
    }
}
