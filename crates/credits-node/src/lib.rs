//! Credits Node - credits page server
//!
//! Hosts the credits page and the compiled scroller bundle, keeps the roster
//! of credited names and pushes roster changes to WebSocket clients.

pub mod server;

use std::sync::Arc;
use std::time::Instant;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use credits_core::{CreditCategory, CreditsConfig, CreditsRoster, PageOptions, Result};
use server::messages::WsMessage;

/// Capacity of the roster event channel
pub const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Application state shared across handlers
pub struct AppState {
    /// Loaded configuration
    pub config: CreditsConfig,
    /// Credited names
    pub roster: CreditsRoster,
    /// Broadcast channel for WebSocket events
    pub event_tx: broadcast::Sender<WsMessage>,
    /// Server start time
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: CreditsConfig) -> Self {
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            config,
            roster: CreditsRoster::new(),
            event_tx,
            start_time: Instant::now(),
        }
    }

    /// Credit a name and notify subscribers if it is new
    pub fn add_credit(&self, category: CreditCategory, name: &str) -> Result<bool> {
        let added = self.roster.add(category, name)?;
        if added {
            let name = name.trim().to_string();
            info!("Credited {} as {}", name, category);
            let _ = self.event_tx.send(WsMessage::CreditAdded {
                category,
                name,
                timestamp: chrono::Utc::now().timestamp_millis(),
            });
        }
        Ok(added)
    }

    /// Remove a name and notify subscribers if it was present
    pub fn remove_credit(&self, category: CreditCategory, name: &str) -> bool {
        let removed = self.roster.remove(category, name);
        if removed {
            info!("Removed {} from {}", name.trim(), category);
            let _ = self.event_tx.send(WsMessage::CreditRemoved {
                category,
                name: name.trim().to_string(),
            });
        }
        removed
    }

    /// Drop every credited name
    pub fn clear_credits(&self) {
        self.roster.clear();
        info!("Roster cleared");
        let _ = self.event_tx.send(WsMessage::RosterCleared);
    }

    /// Current roster counts
    pub fn stats(&self) -> WsMessage {
        WsMessage::Stats {
            chatters: self.roster.count(CreditCategory::Chatters),
            followers: self.roster.count(CreditCategory::Followers),
            subscribers: self.roster.count(CreditCategory::Subscribers),
            uptime_seconds: self.start_time.elapsed().as_secs(),
        }
    }

    /// Page options derived from the configuration
    pub fn page_options(&self) -> PageOptions {
        PageOptions {
            title: self.config.server.title.clone(),
            variant: self.config.scroll.variant,
            ..PageOptions::default()
        }
    }
}

/// Periodically push roster stats to connected WebSocket clients
pub fn spawn_heartbeat(state: Arc<AppState>) -> JoinHandle<()> {
    let period = state.config.server.heartbeat_interval;
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        loop {
            ticker.tick().await;
            if state.event_tx.receiver_count() == 0 {
                continue;
            }
            debug!("Sending heartbeat stats");
            let _ = state.event_tx.send(state.stats());
        }
    })
}
