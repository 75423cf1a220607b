//! Mojang profile API client
//!
//! Resolves a player's in-game name to the undashed UUID the Hypixel API
//! keys sessions on. Called once at startup; the watcher cannot probe
//! anything without the UUID, so resolution failures are fatal.

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::clients::USER_AGENT;

const MOJANG_BASE_URL: &str = "https://api.mojang.com";

#[derive(Debug, Clone)]
pub struct MojangClient {
    http: Client,
    base_url: String,
}

/// Profile response from /users/profiles/minecraft/{name}
#[derive(Debug, Deserialize)]
struct ProfileResponse {
    /// UUID without hyphens
    id: String,
}

impl MojangClient {
    pub fn new() -> Self {
        Self {
            http: Client::builder()
                .timeout(Duration::from_secs(10))
                .user_agent(USER_AGENT)
                .build()
                .unwrap_or_else(|_| Client::new()),
            base_url: MOJANG_BASE_URL.to_string(),
        }
    }

    /// Resolve a username to its undashed UUID.
    ///
    /// Unknown usernames come back from Mojang as a non-2xx status (or an
    /// empty body on some edge nodes) and surface here as errors.
    pub async fn resolve_uuid(&self, username: &str) -> Result<String> {
        let url = format!(
            "{}/users/profiles/minecraft/{}",
            self.base_url.trim_end_matches('/'),
            username
        );

        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Mojang API request failed: {url}"))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            anyhow::bail!("Mojang API non-2xx for {username}: {status} body={text}");
        }

        let profile: ProfileResponse = resp
            .json()
            .await
            .with_context(|| format!("Mojang profile response for {username} was not valid JSON"))?;

        Ok(profile.id)
    }
}

impl Default for MojangClient {
    fn default() -> Self {
        Self::new()
    }
}
