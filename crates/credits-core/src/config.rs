//! Configuration types for the credits roll
//!
//! Loaded from a JSON file; every section falls back to its defaults when
//! omitted.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{CreditsError, Result};
use crate::scroll::ScrollVariant;

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreditsConfig {
    /// Scroll animation configuration
    pub scroll: ScrollConfig,
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl CreditsConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CreditsError::ConfigNotFound(path.display().to_string()));
        }

        let raw = std::fs::read_to_string(path)?;
        let config: CreditsConfig = serde_json::from_str(&raw)?;
        config.validate()?;

        Ok(config)
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<()> {
        if self.server.heartbeat_interval.is_zero() {
            return Err(CreditsError::InvalidConfig(
                "server.heartbeat_interval must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Scroll animation configuration
///
/// Only the variant is selectable; start position, property and repeat
/// count are fixed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollConfig {
    /// Which end-position/duration formula to use
    pub variant: ScrollVariant,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Listen port (0 = auto-assign)
    pub port: u16,
    /// Directory served under /static
    pub static_dir: PathBuf,
    /// Directory holding the compiled scroller bundle, served under /pkg
    pub pkg_dir: PathBuf,
    /// Page title
    pub title: String,
    /// Interval between roster stats pushed to WebSocket clients
    #[serde(with = "humantime_serde")]
    pub heartbeat_interval: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 12345,
            static_dir: PathBuf::from("public"),
            pkg_dir: PathBuf::from("pkg"),
            title: "Credits".to_string(),
            heartbeat_interval: Duration::from_secs(30),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level
    pub level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
        }
    }
}

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

// Helper module for Duration serialization
mod humantime_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = humantime::format_duration(*duration).to_string();
        s.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        humantime::parse_duration(&s).map_err(serde::de::Error::custom)
    }
}
