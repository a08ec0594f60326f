//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::filters;
use crate::state::AppState;
use crate::sync::{self, ListingFeed};

/// Home page template: post form, search input, and the listing feed.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Initial, unfiltered listing feed.
    pub feed: ListingFeed,
    /// Page render timestamp shown in the header.
    pub generated_at: String,
}

/// Display the home page with the initial feed.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let feed = sync::reload(state.store(), "").await;

    HomeTemplate {
        feed,
        generated_at: chrono::Utc::now().format("%Y-%m-%d %H:%M UTC").to_string(),
    }
}
