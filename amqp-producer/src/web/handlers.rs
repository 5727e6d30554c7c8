//! Endpoint handlers.
//!
//! `send_message` validates the query, awaits a single publish and echoes
//! the message back behind a fixed prefix. Nothing is retried.

use axum::{
    extract::{RawQuery, State},
    http::StatusCode,
    Json,
};
use percent_encoding::percent_decode_str;
use serde::Serialize;
use tracing::{error, info, warn};

use crate::queue::{OutboundMessage, Publisher};

/// Prefix of every successful `/send` response body.
pub const SENT_PREFIX: &str = "Mensaje enviado: ";

/// Body returned when the `message` parameter is missing or empty.
pub const MISSING_MESSAGE: &str = "Required request parameter 'message' is not present";

/// Body returned when the broker rejects a publish.
pub const PUBLISH_FAILED: &str = "Internal Server Error";

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub publisher: Publisher,
}

impl AppState {
    pub fn new(publisher: Publisher) -> Self {
        Self { publisher }
    }
}

// =============================================================================
// Health Check
// =============================================================================

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

// =============================================================================
// Send
// =============================================================================

/// Strictly decode the first usable `message` value from a raw query string.
///
/// `+` is a space and `%XX` escapes are decoded to bytes. A value whose bytes
/// are not valid UTF-8 is skipped rather than repaired, so a message is never
/// altered on its way to the broker.
pub fn message_param(query: &str) -> Option<String> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .filter(|(key, _)| decode_component(key).as_deref() == Some("message"))
        .find_map(|(_, value)| decode_component(value))
}

fn decode_component(raw: &str) -> Option<String> {
    let spaced = raw.replace('+', " ");
    let bytes: Vec<u8> = percent_decode_str(&spaced).collect();
    String::from_utf8(bytes).ok()
}

/// Publish `message` to the queue and confirm with a plain-text body.
///
/// - missing, empty or undecodable `message`: 400, nothing published
/// - publish failure: 500
/// - otherwise: 200 with `"Mensaje enviado: " + message`
pub async fn send_message(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> (StatusCode, String) {
    let message = match query.as_deref().and_then(message_param) {
        Some(m) if !m.is_empty() => m,
        _ => {
            warn!("send_message_missing_parameter");
            return (StatusCode::BAD_REQUEST, MISSING_MESSAGE.to_string());
        }
    };

    info!(message_length = message.len(), "send_message_received");

    let reply = format!("{}{}", SENT_PREFIX, message);

    if let Err(e) = state.publisher.send(OutboundMessage::new(message)).await {
        error!(
            queue = state.publisher.queue().name,
            error = %e,
            "send_message_publish_failed"
        );
        return (StatusCode::INTERNAL_SERVER_ERROR, PUBLISH_FAILED.to_string());
    }

    (StatusCode::OK, reply)
}
