//! Webhook relay.
//!
//! Receives GitHub webhook deliveries, authenticates them with
//! HMAC-SHA256 over the raw request body, summarizes the event into a
//! short text message, and forwards the summary to a Discord-compatible
//! chat webhook.
//!
//! ## Architecture
//!
//! ```text
//! GitHub → Web Server → Verify → Dispatch → Notify → Discord
//! ```
//!
//! Everything is request-scoped: no shared mutable state, no queues, no
//! background tasks.

pub mod config;
pub mod dispatch;
pub mod notify;
pub mod web;

// Re-export commonly used types
pub use config::Config;
pub use dispatch::{Dispatch, Dispatcher};
pub use notify::{DiscordNotifier, Notifier, NotifyOutcome};
pub use web::{router, AppState};
