//! Configuration module for environment variable parsing.
//!
//! All configuration is read once at process start; nothing re-reads the
//! environment mid-request.

use std::env;

/// Application configuration loaded from environment variables.
///
/// The webhook secret is deliberately excluded from the `Debug`
/// derivation path by never logging the struct; log sites only record
/// whether a secret is configured.
#[derive(Clone)]
pub struct Config {
    /// Port for the web server to listen on
    pub port: u16,

    /// Shared secret for GitHub webhook signature verification.
    /// An empty secret fails every verification closed.
    pub webhook_secret: String,

    /// Discord webhook URL for outbound notifications
    pub discord_webhook_url: String,

    /// HTTP request timeout in milliseconds for the outbound client
    pub request_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Config {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),

            webhook_secret: env::var("GITHUB_WEBHOOK_SECRET").unwrap_or_default(),

            discord_webhook_url: env::var("DISCORD_WEBHOOK_URL").unwrap_or_default(),

            request_timeout_ms: env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
        }
    }
}
