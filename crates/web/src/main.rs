//! Tradepost - classifieds posting-and-browsing site.
//!
//! This binary serves the public site on port 3000.
//!
//! # Architecture
//!
//! - Axum web framework with HTMX for interactivity
//! - Askama templates for server-side rendering
//! - Firestore (REST API) as the managed listing store
//!
//! There is no local database and no authentication: the remote document
//! collection is the single source of truth, and everyone may post.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use tower_http::services::ServeDir;

use tradepost_web::config::AppConfig;
use tradepost_web::state::AppState;
use tradepost_web::store::FirestoreStore;

#[tokio::main]
async fn main() {
    // Load configuration from environment. Missing store configuration
    // is fatal: halt before serving anything.
    let config = AppConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "tradepost_web=info,tower_http=debug".into());

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Build application state around the Firestore store client
    let store = Arc::new(FirestoreStore::new(&config.firestore));
    tracing::info!(
        project = %config.firestore.project_id,
        collection = %config.firestore.collection,
        "Firestore store client created"
    );

    let state = AppState::new(config.clone(), store);

    // Build router
    let app = tradepost_web::app(state).nest_service("/static", ServeDir::new("crates/web/static"));

    // Start server
    let addr = config.socket_addr();
    tracing::info!("tradepost listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
