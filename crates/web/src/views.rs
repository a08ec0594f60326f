//! Display-ready card data for templates.
//!
//! The mapper is a pure transform: listing text is escaped here, once,
//! and the templates mark the fields `|safe`. Nothing unescaped from a
//! listing ever reaches the rendered tree.

use tradepost_core::{Listing, ListingId, html};

/// Shown in place of an absent location.
const LOCATION_PLACEHOLDER: &str = "—";

/// Listing display data for templates. All text fields are HTML-escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingCard {
    /// Store-assigned ID, used as the render key only.
    pub id: String,
    pub title: String,
    pub description: String,
    pub location: String,
    /// Formatted price, e.g. "GHS 150.00".
    pub price: String,
    /// WhatsApp deep-link built from the digits of the phone.
    pub whatsapp_url: String,
    /// `tel:` deep-link carrying the phone verbatim, percent-encoded.
    pub tel_url: String,
}

impl ListingCard {
    /// Build a card from one listing record.
    #[must_use]
    pub fn from_listing(id: &ListingId, listing: &Listing) -> Self {
        let location = if listing.location.is_empty() {
            LOCATION_PLACEHOLDER
        } else {
            listing.location.as_str()
        };

        let digits: String = listing.phone.chars().filter(char::is_ascii_digit).collect();

        Self {
            id: id.to_string(),
            title: html::escape(&listing.title),
            description: html::escape(&listing.description),
            location: html::escape(location),
            price: listing.price.display(),
            whatsapp_url: format!("https://wa.me/{}", urlencoding::encode(&digits)),
            tel_url: format!("tel:{}", urlencoding::encode(&listing.phone)),
        }
    }
}
