//! hypixel_watcher - Pings a Discord channel when a Hypixel player comes online

pub mod clients;
pub mod config;
pub mod presence;
pub mod watcher;

pub use clients::{DiscordWebhook, HypixelClient, MojangClient, StatusSource};
pub use config::WatcherConfig;
pub use presence::{PresenceState, PresenceTracker};
pub use watcher::{Watcher, WatcherStats};
