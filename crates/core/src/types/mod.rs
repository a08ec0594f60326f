//! Core types for Tradepost.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod listing;
pub mod price;

pub use id::ListingId;
pub use listing::{Listing, ListingError, NewListing};
pub use price::Price;
