//! HTTP clients for the watcher's three external collaborators
//!
//! Mojang resolves the player name once at startup, Hypixel answers the
//! per-cycle presence probe, and Discord receives the transition alert.
//! The polling loop talks to the probe through the StatusSource trait so
//! tests can drive it with a scripted source.

use anyhow::Result;
use async_trait::async_trait;

// Concrete client implementations
pub mod discord;
pub mod hypixel;
pub mod mojang;

// Re-export clients for convenient access
pub use discord::DiscordWebhook;
pub use hypixel::HypixelClient;
pub use mojang::MojangClient;

/// User agent sent with every outbound request
pub(crate) const USER_AGENT: &str = "hypixel_watcher/0.1";

/// Source of the tracked player's presence flag
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// One probe: is the player online right now?
    async fn is_online(&self, uuid: &str) -> Result<bool>;
}
