//! Hypixel status API client
//!
//! Answers the per-cycle presence probe: GET /status with the player UUID
//! and an API key. A response without a session block (or without the
//! online flag) means the player is offline; only transport problems,
//! non-2xx statuses and success=false rejections count as probe errors.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::clients::{StatusSource, USER_AGENT};

const HYPIXEL_BASE_URL: &str = "https://api.hypixel.net";

#[derive(Clone)]
pub struct HypixelClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl std::fmt::Debug for HypixelClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HypixelClient")
            .field("base_url", &self.base_url)
            .field("has_api_key", &!self.api_key.is_empty())
            .finish()
    }
}

/// Top-level /status response; success=false carries a cause string
#[derive(Debug, Deserialize)]
struct StatusResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    cause: Option<String>,
    #[serde(default)]
    session: Option<SessionStatus>,
}

#[derive(Debug, Default, Deserialize)]
struct SessionStatus {
    #[serde(default)]
    online: bool,
}

impl StatusResponse {
    /// Missing session or online flag reads as offline, not as an error
    fn is_online(&self) -> bool {
        self.session.as_ref().map(|s| s.online).unwrap_or(false)
    }
}

impl HypixelClient {
    pub fn new(api_key: String) -> Self {
        Self {
            http: Client::builder()
                .timeout(Duration::from_secs(10))
                .user_agent(USER_AGENT)
                .build()
                .unwrap_or_else(|_| Client::new()),
            base_url: HYPIXEL_BASE_URL.to_string(),
            api_key,
        }
    }

    /// One presence probe for the given UUID.
    pub async fn fetch_online(&self, uuid: &str) -> Result<bool> {
        if self.api_key.is_empty() {
            anyhow::bail!("HYPIXEL_API_KEY must be set to query the status API");
        }

        let url = format!("{}/status", self.base_url.trim_end_matches('/'));

        let resp = self
            .http
            .get(&url)
            .query(&[("uuid", uuid), ("key", self.api_key.as_str())])
            .send()
            .await
            .with_context(|| format!("Hypixel API request failed: {url}"))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            anyhow::bail!("Hypixel API non-2xx: {status} body={text}");
        }

        let body: StatusResponse = resp
            .json()
            .await
            .context("Hypixel status response was not valid JSON")?;

        if !body.success {
            let cause = body.cause.as_deref().unwrap_or("no cause given");
            anyhow::bail!("Hypixel API rejected the status query: {cause}");
        }

        Ok(body.is_online())
    }
}

#[async_trait]
impl StatusSource for HypixelClient {
    async fn is_online(&self, uuid: &str) -> Result<bool> {
        self.fetch_online(uuid).await
    }
}
