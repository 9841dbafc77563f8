//! Outbound chat notification.
//!
//! Delivers summary messages to a Discord-compatible chat webhook with a
//! single JSON POST per delivery. All failure paths resolve to a
//! `Failed` outcome so the ingress handler can always produce a
//! deterministic HTTP response; retry policy belongs to the upstream
//! sender, not here.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

/// Outcome of a notification attempt. No partial or graded results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyOutcome {
    Delivered,
    Failed,
}

/// Internal notification error; never escapes `notify`.
#[derive(Debug, Error)]
enum NotifyError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("chat endpoint returned status {0}")]
    Status(u16),
}

/// JSON body for the chat webhook.
#[derive(Serialize)]
struct ChatMessage<'a> {
    content: &'a str,
}

/// Delivers a text message to an external chat endpoint.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, message: &str) -> NotifyOutcome;
}

/// Notifier backed by a Discord webhook URL.
pub struct DiscordNotifier {
    client: Client,
    webhook_url: String,
}

impl DiscordNotifier {
    pub fn new(client: Client, webhook_url: String) -> Self {
        Self {
            client,
            webhook_url,
        }
    }

    async fn post_message(&self, message: &str) -> Result<(), NotifyError> {
        let response = self
            .client
            .post(&self.webhook_url)
            .json(&ChatMessage { content: message })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::Status(status.as_u16()));
        }

        Ok(())
    }
}

#[async_trait]
impl Notifier for DiscordNotifier {
    async fn notify(&self, message: &str) -> NotifyOutcome {
        match self.post_message(message).await {
            Ok(()) => {
                info!(message_length = message.len(), "notify_delivered");
                NotifyOutcome::Delivered
            }
            Err(e) => {
                warn!(error = %e, "notify_failed");
                NotifyOutcome::Failed
            }
        }
    }
}
