use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use super::auth_client::Credentials;
use crate::transport::channel::DEFAULT_CAPACITY;

pub const API_KEY_ENV: &str = "BTCE_API_KEY";
pub const API_SECRET_ENV: &str = "BTCE_API_SECRET";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// BTC-e connector configuration (JSON)
#[derive(Clone, Serialize, Deserialize)]
pub struct BtceConfig {
    /// Public REST API base URL (depth, trades)
    #[serde(default = "default_public_rest_url")]
    pub public_rest_url: String,
    /// Trade REST API base URL (signed calls)
    #[serde(default = "default_trade_rest_url")]
    pub trade_rest_url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default)]
    pub api_secret: String,
    /// Period of the book and trade polls
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,
    /// Book levels requested per side
    #[serde(default = "default_depth_limit")]
    pub depth_limit: u32,
    /// Trades requested per poll
    #[serde(default = "default_trade_limit")]
    pub trade_limit: u32,
    /// Buffer of each event stream before slow subscribers start lagging
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

impl Default for BtceConfig {
    fn default() -> Self {
        BtceConfig {
            public_rest_url: default_public_rest_url(),
            trade_rest_url: default_trade_rest_url(),
            api_key: String::new(),
            api_secret: String::new(),
            poll_interval_ms: default_poll_interval(),
            depth_limit: default_depth_limit(),
            trade_limit: default_trade_limit(),
            channel_capacity: default_channel_capacity(),
        }
    }
}

impl fmt::Debug for BtceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BtceConfig")
            .field("public_rest_url", &self.public_rest_url)
            .field("trade_rest_url", &self.trade_rest_url)
            .field("api_key", &redacted(&self.api_key))
            .field("api_secret", &redacted(&self.api_secret))
            .field("poll_interval_ms", &self.poll_interval_ms)
            .field("depth_limit", &self.depth_limit)
            .field("trade_limit", &self.trade_limit)
            .field("channel_capacity", &self.channel_capacity)
            .finish()
    }
}

fn redacted(value: &str) -> &'static str {
    if value.is_empty() { "<EMPTY>" } else { "<REDACTED>" }
}

impl BtceConfig {
    /// Read a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Take key and secret from `BTCE_API_KEY` / `BTCE_API_SECRET` when set
    pub fn with_env_overrides(self) -> Self {
        let key = std::env::var(API_KEY_ENV).ok();
        let secret = std::env::var(API_SECRET_ENV).ok();
        self.with_overrides(key, secret)
    }

    /// Replace key and secret with the given values unless absent or empty
    pub fn with_overrides(mut self, api_key: Option<String>, api_secret: Option<String>) -> Self {
        if let Some(key) = api_key.filter(|k| !k.is_empty()) {
            self.api_key = key;
        }
        if let Some(secret) = api_secret.filter(|s| !s.is_empty()) {
            self.api_secret = secret;
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.public_rest_url.trim().is_empty() {
            return Err(ConfigError::Invalid("public_rest_url is empty".into()));
        }
        if self.trade_rest_url.trim().is_empty() {
            return Err(ConfigError::Invalid("trade_rest_url is empty".into()));
        }
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::Invalid("poll_interval_ms must be > 0".into()));
        }
        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.api_key.clone(), self.api_secret.clone())
    }
}

// Default value functions for serde
fn default_public_rest_url() -> String {
    "https://btc-e.com/api/3".to_string()
}

fn default_trade_rest_url() -> String {
    "https://btc-e.com/tapi".to_string()
}

fn default_poll_interval() -> u64 {
    2000
}

fn default_depth_limit() -> u32 {
    5
}

fn default_trade_limit() -> u32 {
    5
}

fn default_channel_capacity() -> usize {
    DEFAULT_CAPACITY
}
