//! Configuration for hypixel_watcher

use anyhow::{anyhow, Result};
use std::env;

/// Placeholder username treated the same as unset.
const USERNAME_PLACEHOLDER: &str = "YourIGNHere";

#[derive(Debug, Clone)]
pub struct WatcherConfig {
    // Player being watched
    pub username: String,

    // Hypixel API
    pub api_key: String,

    // Discord delivery (empty URL disables it)
    pub webhook_url: String,
    pub mention: String,

    // Polling
    pub poll_interval_secs: u64,
}

impl WatcherConfig {
    pub fn from_env() -> Result<Self> {
        let username = env::var("MC_USERNAME").unwrap_or_default();
        if !username_is_set(&username) {
            return Err(anyhow!(
                "MC_USERNAME must be set to the player's in-game name"
            ));
        }

        let poll_interval_secs = parse_u64("CHECK_INTERVAL_SECONDS", 60)?;

        Ok(Self {
            username,

            api_key: env::var("HYPIXEL_API_KEY").unwrap_or_default(),

            webhook_url: env::var("DISCORD_WEBHOOK_URL").unwrap_or_default(),
            mention: env::var("DISCORD_PING").unwrap_or_default(),

            // Floor at 1s so a zero interval cannot hot-loop against the API
            poll_interval_secs: poll_interval_secs.max(1),
        })
    }
}

/// A username counts as set when it is non-empty and not the placeholder.
fn username_is_set(username: &str) -> bool {
    let trimmed = username.trim();
    !trimmed.is_empty() && trimmed != USERNAME_PLACEHOLDER
}

/// Parse environment variable as u64 with default fallback
fn parse_u64(var_name: &str, default: u64) -> Result<u64> {
    match env::var(var_name) {
        Ok(val) => val.parse().map_err(|_| anyhow!("{} must be a valid u64", var_name)),
        Err(_) => Ok(default),
    }
}
