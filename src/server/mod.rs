//! HTTP server
//!
//! Exposes the chat backend via REST endpoints:
//! - GET  /api/status             - Health check
//! - GET  /api/tones              - Tone profiles and suggested questions
//! - POST /api/chat               - One synchronous chat round trip
//! - POST /api/chat/clear         - Clear a session's transcript
//! - GET  /api/chat/history       - A session's transcript
//! - GET  /api/analytics/keywords - Keyword counts, descending
//! - GET  /api/analytics/daily    - Daily counts, ascending

mod chat;
mod handlers;
pub mod types;

use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Create the router with all endpoints
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/api/status", get(handlers::status_handler))
        .route("/api/tones", get(handlers::tones_handler))
        .route("/api/chat", post(chat::chat_handler))
        .route("/api/chat/clear", post(handlers::clear_handler))
        .route("/api/chat/history", get(handlers::history_handler))
        .route("/api/analytics/keywords", get(handlers::keyword_counts_handler))
        .route("/api/analytics/daily", get(handlers::daily_counts_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
