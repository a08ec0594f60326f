//! Smoke tests against a running server.
//!
//! These tests require:
//! - A running server (cargo run -p tradepost-web)
//! - Valid Firestore credentials in environment
//!
//! Run with: cargo test -p tradepost-integration-tests -- --ignored

#![allow(clippy::unwrap_used)]

use reqwest::{Client, StatusCode};

/// Base URL for the site (configurable via environment).
fn base_url() -> String {
    std::env::var("TRADEPOST_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

#[tokio::test]
#[ignore = "Requires running server and Firestore credentials"]
async fn test_home_page_is_served() {
    let client = Client::new();
    let resp = client
        .get(format!("{}/", base_url()))
        .send()
        .await
        .expect("Failed to get home page");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read response");
    assert!(body.contains("Post a listing"));
}

#[tokio::test]
#[ignore = "Requires running server and Firestore credentials"]
async fn test_post_and_find_listing() {
    let client = Client::new();
    let base = base_url();

    // Post a uniquely-titled listing
    let title = format!("Smoke test {}", std::process::id());
    let resp = client
        .post(format!("{base}/listings"))
        .form(&[
            ("title", title.as_str()),
            ("description", "integration smoke test"),
            ("price", "1"),
            ("location", ""),
            ("phone", "+233 55 000 0000"),
        ])
        .send()
        .await
        .expect("Failed to post listing");
    assert_eq!(resp.status(), StatusCode::OK);

    // It shows up in the feed
    let resp = client
        .get(format!("{base}/listings"))
        .send()
        .await
        .expect("Failed to fetch feed");
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read feed");
    assert!(body.contains(&title));
}

#[tokio::test]
#[ignore = "Requires running server and Firestore credentials"]
async fn test_readiness_reflects_store_connectivity() {
    let client = Client::new();
    let resp = client
        .get(format!("{}/health/ready", base_url()))
        .send()
        .await
        .expect("Failed to get readiness");

    assert_eq!(resp.status(), StatusCode::OK);
}
