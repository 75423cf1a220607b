use anyhow::Result;
use dotenv::dotenv;
use hypixel_watcher::{DiscordWebhook, HypixelClient, MojangClient, Watcher, WatcherConfig};
use log::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    info!("Starting hypixel_watcher...");

    let config = WatcherConfig::from_env()?;
    info!(
        "Config: username={} interval={}s webhook_configured={} mention_configured={}",
        config.username,
        config.poll_interval_secs,
        !config.webhook_url.is_empty(),
        !config.mention.is_empty(),
    );

    let uuid = MojangClient::new().resolve_uuid(&config.username).await?;
    info!("Resolved {} to UUID {}", config.username, uuid);

    let source = HypixelClient::new(config.api_key.clone());
    let sink = DiscordWebhook::new(config.webhook_url.clone(), config.mention.clone());
    if !sink.is_configured() {
        warn!("DISCORD_WEBHOOK_URL not set, transitions will only be logged");
    }

    let mut watcher = Watcher::new(config, uuid, source, sink);
    watcher.run().await
}
