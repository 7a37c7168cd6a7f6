//! WebSocket message types

use serde::{Deserialize, Serialize};
use credits_core::{CreditCategory, RosterSnapshot};

/// Messages sent from server to client
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WsMessage {
    /// Full roster, sent on connect and on request
    Roster {
        roster: RosterSnapshot,
    },

    /// A name was credited
    CreditAdded {
        category: CreditCategory,
        name: String,
        timestamp: i64,
    },

    /// A name was removed
    CreditRemoved {
        category: CreditCategory,
        name: String,
    },

    /// Every name was removed
    RosterCleared,

    /// Roster statistics
    Stats {
        chatters: usize,
        followers: usize,
        subscribers: usize,
        uptime_seconds: u64,
    },

    /// Error message
    Error {
        message: String,
        code: String,
    },
}

/// Messages sent from client to server
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Credit a name
    AddCredit {
        category: String,
        name: String,
    },

    /// Remove a credited name
    RemoveCredit {
        category: String,
        name: String,
    },

    /// Request the full roster
    GetRoster,

    /// Request roster statistics
    GetStats,
}
