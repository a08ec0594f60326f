//! HTTP route handlers for the web crate.
//!
//! # Route Structure
//!
//! ```text
//! GET  /             - Full page: post form, search, listing feed
//! GET  /health       - Liveness check
//! GET  /health/ready - Readiness check (pings the store)
//!
//! # Listings (HTMX fragments)
//! GET  /listings     - Listing feed fragment (?q= filters)
//! POST /listings     - Submit a listing (returns status fragment,
//!                      triggers listing-posted)
//! ```

pub mod home;
pub mod listings;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create the listing routes router.
pub fn listing_routes() -> Router<AppState> {
    Router::new().route("/", get(listings::feed).post(listings::submit))
}

/// Create all routes for the site.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .nest("/listings", listing_routes())
}
