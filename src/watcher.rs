//! Watcher: polling loop and transition alerting
//!
//! Main orchestrator that coordinates:
//! - Periodic presence probes against the status source
//! - Tri-state presence memory across cycles
//! - One Discord ping per offline to online transition
//!
//! A failed probe is logged and skipped without touching the stored state,
//! so transient API trouble can neither fire a stale alert nor suppress the
//! next real one.

use anyhow::Result;
use chrono::{DateTime, Utc};
use log::{info, warn};
use std::time::Duration;

use crate::clients::{DiscordWebhook, StatusSource};
use crate::config::WatcherConfig;
use crate::presence::{PresenceState, PresenceTracker};

/// Counters reported by the periodic stats log line
#[derive(Debug, Default, Clone)]
pub struct WatcherStats {
    pub cycles: u64,
    pub probe_failures: u64,
    pub transitions: u64,
    pub last_transition: Option<DateTime<Utc>>,
}

/// Main watcher service
pub struct Watcher<S: StatusSource> {
    config: WatcherConfig,
    uuid: String,
    source: S,
    sink: DiscordWebhook,
    tracker: PresenceTracker,
    stats: WatcherStats,
}

impl<S: StatusSource> Watcher<S> {
    pub fn new(config: WatcherConfig, uuid: String, source: S, sink: DiscordWebhook) -> Self {
        Self {
            config,
            uuid,
            source,
            sink,
            tracker: PresenceTracker::new(),
            stats: WatcherStats::default(),
        }
    }

    /// Stored presence state going into the next cycle.
    pub fn presence(&self) -> PresenceState {
        self.tracker.state()
    }

    pub fn stats(&self) -> &WatcherStats {
        &self.stats
    }

    /// Run a single probe cycle (everything except the sleep).
    pub async fn poll_once(&mut self) {
        match self.source.is_online(&self.uuid).await {
            Ok(online) => {
                info!("{} online: {}", self.config.username, online);

                if self.tracker.observe(online) {
                    info!("{} just came online, sending Discord ping", self.config.username);
                    self.sink.notify(&self.config.username, true).await;
                    self.stats.transitions += 1;
                    self.stats.last_transition = Some(Utc::now());
                }
            }
            Err(e) => {
                warn!(
                    "Presence probe failed (state stays {}): {}",
                    self.tracker.state().as_str(),
                    e
                );
                self.stats.probe_failures += 1;
            }
        }

        self.stats.cycles += 1;
        if self.stats.cycles % 10 == 0 {  // Log every ~10m at the default 60s interval
            info!(
                "Watcher stats: cycles={}, probe_failures={}, transitions={}, last_transition={}",
                self.stats.cycles,
                self.stats.probe_failures,
                self.stats.transitions,
                self.stats
                    .last_transition
                    .map(|t| t.to_rfc3339())
                    .unwrap_or_else(|| "never".to_string()),
            );
        }
    }

    /// Poll forever at the configured cadence.
    pub async fn run(&mut self) -> Result<()> {
        info!(
            "Watcher initialized for {} (poll_interval: {}s, webhook_configured: {})",
            self.config.username,
            self.config.poll_interval_secs,
            self.sink.is_configured()
        );

        loop {
            self.poll_once().await;
            tokio::time::sleep(Duration::from_secs(self.config.poll_interval_secs)).await;
        }
    }
}
