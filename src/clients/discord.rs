//! Discord webhook delivery
//!
//! Strictly best-effort: an empty webhook URL turns the sink into a no-op,
//! and delivery failures are logged rather than raised so a Discord outage
//! can never stall the polling loop.

use anyhow::{Context, Result};
use log::{debug, error, info};
use reqwest::Client;
use serde_json::json;
use std::time::Duration;

#[derive(Clone)]
pub struct DiscordWebhook {
    http: Client,
    webhook_url: String,
    mention: String,
}

impl std::fmt::Debug for DiscordWebhook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscordWebhook")
            .field("configured", &self.is_configured())
            .field("mention", &self.mention)
            .finish()
    }
}

impl DiscordWebhook {
    pub fn new(webhook_url: String, mention: String) -> Self {
        Self {
            http: Client::builder()
                .timeout(Duration::from_secs(10))
                .build()
                .unwrap_or_else(|_| Client::new()),
            webhook_url,
            mention,
        }
    }

    /// Whether a webhook URL was configured at all.
    pub fn is_configured(&self) -> bool {
        !self.webhook_url.is_empty()
    }

    /// Send the presence alert for a player, swallowing every failure.
    ///
    /// Unconfigured webhooks skip silently; delivery errors are logged at
    /// error level and dropped so the caller's polling cadence is never
    /// affected by Discord being down.
    pub async fn notify(&self, username: &str, online: bool) {
        if !self.is_configured() {
            debug!("DISCORD_WEBHOOK_URL not set, dropping notification for {}", username);
            return;
        }

        let message = presence_message(&self.mention, username, online);
        match self.send(&message).await {
            Ok(()) => info!("Sent Discord ping for {}", username),
            Err(e) => error!("Discord webhook delivery failed: {}", e),
        }
    }

    /// Raw delivery of a message to the webhook.
    pub async fn send(&self, content: &str) -> Result<()> {
        let payload = json!({ "content": content });

        let resp = self
            .http
            .post(&self.webhook_url)
            .json(&payload)
            .send()
            .await
            .context("Discord webhook request failed")?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            anyhow::bail!("Discord webhook non-2xx: {status} body={text}");
        }
        Ok(())
    }
}

/// Format the presence alert, prefixing the mention token when one is set.
pub fn presence_message(mention: &str, username: &str, online: bool) -> String {
    let status_text = if online {
        "just came ONLINE ✅"
    } else {
        "just went OFFLINE ❌"
    };

    if mention.is_empty() {
        format!("`{}` {}", username, status_text)
    } else {
        format!("{} `{}` {}", mention, username, status_text)
    }
}
