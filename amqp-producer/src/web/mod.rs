//! Web server module.
//!
//! Exposes `GET /send?message=...`, which hands the message to the
//! publisher, and a `GET /health` liveness probe.

pub mod handlers;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

pub use handlers::{
    health, message_param, send_message, AppState, HealthResponse, MISSING_MESSAGE,
    PUBLISH_FAILED, SENT_PREFIX,
};

/// Build the application router with its routes registered explicitly.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/send", get(send_message))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
