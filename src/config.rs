//! Configuration loading.
//!
//! All settings come from the process environment. An optional `.env` file
//! in the working directory is merged in by the binary before loading.
//! The three secrets are required; everything else has a default that can be
//! overridden with a `HOMEWORK_BOT_*` variable.

use std::time::Duration;

use crate::constants;
use crate::error::{BotError, Result};

/// Environment variable holding the Practicum OAuth token.
pub const PRACTICUM_TOKEN_VAR: &str = "PRACTICUM_TOKEN";
/// Environment variable holding the Telegram bot token.
pub const TELEGRAM_TOKEN_VAR: &str = "TELEGRAM_TOKEN";
/// Environment variable holding the destination chat identifier.
pub const TELEGRAM_CHAT_ID_VAR: &str = "TELEGRAM_CHAT_ID";

/// Runtime configuration for the relay.
#[derive(Clone)]
pub struct Config {
    /// OAuth token for the Practicum API.
    pub practicum_token: String,
    /// Telegram bot token.
    pub telegram_token: String,
    /// Chat that receives notifications.
    pub telegram_chat_id: String,
    /// Homework statuses endpoint.
    pub endpoint: String,
    /// Base URL of the Telegram Bot API.
    pub telegram_api_url: String,
    /// Pause between poll cycles.
    pub retry_interval: Duration,
}

impl Config {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary key lookup.
    ///
    /// Empty values count as missing. Every missing secret is reported in a
    /// single [`BotError::Configuration`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str, missing: &mut Vec<&'static str>| {
            match lookup(key).filter(|value| !value.is_empty()) {
                Some(value) => value,
                None => {
                    missing.push(key);
                    String::new()
                }
            }
        };

        let mut missing = Vec::new();
        let practicum_token = required(PRACTICUM_TOKEN_VAR, &mut missing);
        let telegram_token = required(TELEGRAM_TOKEN_VAR, &mut missing);
        let telegram_chat_id = required(TELEGRAM_CHAT_ID_VAR, &mut missing);

        if !missing.is_empty() {
            return Err(BotError::Configuration { missing });
        }

        let mut config = Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            endpoint: constants::PRACTICUM_ENDPOINT.to_string(),
            telegram_api_url: constants::TELEGRAM_API_URL.to_string(),
            retry_interval: constants::RETRY_INTERVAL,
        };
        config.apply_overrides(&lookup);
        Ok(config)
    }

    fn apply_overrides<F>(&mut self, lookup: &F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoint) = lookup("HOMEWORK_BOT_ENDPOINT") {
            self.endpoint = endpoint;
        }

        if let Some(api_url) = lookup("HOMEWORK_BOT_TELEGRAM_API_URL") {
            self.telegram_api_url = api_url;
        }

        if let Some(interval) = lookup("HOMEWORK_BOT_RETRY_INTERVAL") {
            if let Ok(secs) = interval.parse::<u64>() {
                self.retry_interval = Duration::from_secs(secs);
            }
        }
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("practicum_token", &"<redacted>")
            .field("telegram_token", &"<redacted>")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("endpoint", &self.endpoint)
            .field("telegram_api_url", &self.telegram_api_url)
            .field("retry_interval", &self.retry_interval)
            .finish()
    }
}
