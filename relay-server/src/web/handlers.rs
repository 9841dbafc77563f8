//! Webhook endpoint handlers.
//!
//! The GitHub handler runs a linear, request-scoped pipeline:
//! 1. Receive the raw body bytes and headers
//! 2. Verify the HMAC signature; reject with 401 on any failure
//! 3. Dispatch the payload to a summarizer
//! 4. Forward the summary to the chat webhook
//! 5. Acknowledge with 202, or 500 if forwarding failed
//!
//! Nothing before step 2 inspects payload contents, and nothing after it
//! re-checks authenticity. The response is not sent until the outbound
//! notification attempt has completed.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::dispatch::Dispatch;
use crate::notify::{Notifier, NotifyOutcome};
use crate::web::signature::verify_signature;
use crate::Config;

/// Header carrying the HMAC signature of the raw body.
const SIGNATURE_HEADER: &str = "X-Hub-Signature-256";

/// Header carrying the event type discriminator.
const EVENT_HEADER: &str = "X-GitHub-Event";

/// Shared application state.
///
/// Collaborators are injected rather than constructed here, so tests can
/// substitute fakes without networked side effects.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub dispatcher: Arc<dyn Dispatch>,
    pub notifier: Arc<dyn Notifier>,
}

impl AppState {
    pub fn new(
        config: Config,
        dispatcher: Arc<dyn Dispatch>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            dispatcher,
            notifier,
        }
    }
}

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Acknowledgment response for an accepted delivery.
#[derive(Serialize)]
pub struct WebhookResponse {
    pub status: &'static str,
}

/// Error response; carries no internal diagnostic detail.
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
}

/// GitHub webhook endpoint.
pub async fn github_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let event_type = headers
        .get(EVENT_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    info!(
        event_type = event_type,
        body_length = body.len(),
        has_signature = !signature.is_empty(),
        "webhook_received"
    );

    // Verify against the exact wire bytes before touching the payload
    if !verify_signature(state.config.webhook_secret.as_bytes(), signature, &body) {
        warn!(event_type = event_type, "webhook_signature_invalid");
        return (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse {
                error: "Invalid signature",
            }),
        )
            .into_response();
    }

    // Lenient parse: summarizers degrade missing fields to placeholders
    let payload: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    let message = state.dispatcher.dispatch(event_type, &payload);

    match state.notifier.notify(&message).await {
        NotifyOutcome::Delivered => {
            info!(event_type = event_type, "webhook_acknowledged");
            (
                StatusCode::ACCEPTED,
                Json(WebhookResponse { status: "accepted" }),
            )
                .into_response()
        }
        NotifyOutcome::Failed => {
            warn!(event_type = event_type, "webhook_notify_failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Notification failed",
                }),
            )
                .into_response()
        }
    }
}
