//! Web server module for handling inbound webhooks.
//!
//! Receives GitHub webhook deliveries, verifies the HMAC signature over
//! the raw body, and relays a summary message to the chat webhook before
//! acknowledging.

pub mod handlers;
pub mod signature;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub use handlers::{github_webhook, health, AppState, ErrorResponse, HealthResponse, WebhookResponse};
pub use signature::verify_signature;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/webhooks/github", post(github_webhook))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
