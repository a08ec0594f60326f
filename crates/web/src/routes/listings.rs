//! Listing feed and submission route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::IntoResponse,
};
use chrono::{SecondsFormat, Utc};
use serde::Deserialize;
use tracing::instrument;
use tradepost_core::NewListing;

use crate::error::Result;
use crate::state::AppState;
use crate::sync::{self, ListingFeed};

/// Feed query parameters.
#[derive(Debug, Deserialize)]
pub struct FeedQuery {
    /// Live search filter; empty means unfiltered.
    #[serde(default)]
    pub q: String,
}

/// Listing submission form data.
#[derive(Debug, Deserialize)]
pub struct ListingForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub phone: String,
}

/// Listing feed fragment template (HTMX target).
#[derive(Template, WebTemplate)]
#[template(path = "partials/listing_feed.html")]
pub struct ListingFeedTemplate {
    pub feed: ListingFeed,
}

/// Post-status fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/form_status.html")]
pub struct FormStatusTemplate {
    pub message: &'static str,
}

/// Listing feed fragment (HTMX).
///
/// Driven by the live search input, the refresh control, and the
/// `listing-posted` event after a successful submit. An empty query
/// reloads unfiltered.
#[instrument(skip(state))]
pub async fn feed(
    State(state): State<AppState>,
    Query(query): Query<FeedQuery>,
) -> impl IntoResponse {
    let feed = sync::reload(state.store(), &query.q).await;
    ListingFeedTemplate { feed }
}

/// Submit a listing.
///
/// POST /listings
///
/// Validates the trimmed form, stamps `created_at` from the server
/// clock, and inserts via the store. Success returns the "Posted!"
/// status fragment with an `HX-Trigger: listing-posted` header so the
/// feed re-fetches without a manual refresh. Validation problems come
/// back as 422 and store failures as 502, both with an inline message;
/// the browser keeps the form populated for retry.
#[instrument(skip(state, form), fields(title = %form.title))]
pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<ListingForm>,
) -> Result<impl IntoResponse> {
    let payload = NewListing::from_form(
        &form.title,
        &form.description,
        &form.price,
        &form.location,
        &form.phone,
    )?;

    let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    let listing = payload.into_listing(created_at);

    let id = state.store().insert(&listing).await?;
    tracing::info!(id = %id, "Listing posted");

    Ok((
        [("HX-Trigger", "listing-posted")],
        FormStatusTemplate { message: "Posted!" },
    ))
}
