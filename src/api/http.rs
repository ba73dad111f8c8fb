//! HTTP server setup with Axum

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

use super::rest::{concepts, stats, terms};
use super::state::AppState;
use crate::types::ThesaurusResult;

/// Create the Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS configuration - allow all origins for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // REST API endpoints
        .route("/api/terms/:term", get(terms::lookup_term))
        .route("/api/expand", get(terms::expand_query))
        .route("/api/ambiguous", get(terms::list_ambiguous))
        .route("/api/concepts/:id", get(concepts::get_concept))
        .route("/api/stats", get(stats::get_stats))
        .layer(cors)
        .with_state(state)
}

/// Serve the API until Ctrl+C
pub async fn serve(state: Arc<AppState>, port: u16) -> ThesaurusResult<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    eprintln!("[Http] Listening on http://{}", addr);

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            eprintln!("[Http] Shutting down");
        })
        .await?;

    Ok(())
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
