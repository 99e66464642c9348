//! Telegram Bot API channel.
//!
//! Sends, edits, and answers through the Bot API; receives via `getUpdates`
//! long polling. Every call targets the one configured chat.
//! Docs: <https://core.telegram.org/bots/api>

mod polling;
mod send;
pub(crate) mod types;

#[cfg(test)]
mod tests;

use hearth_core::config::TelegramConfig;
use std::time::Duration;

const API_BASE: &str = "https://api.telegram.org";

/// Telegram channel bound to a single chat.
pub struct TelegramChannel {
    config: TelegramConfig,
    client: reqwest::Client,
    base_url: String,
    /// Timeout for send/edit/answer calls.
    request_timeout: Duration,
    /// Server-side wait for `getUpdates`.
    long_poll_secs: u64,
}

impl TelegramChannel {
    /// Create a new Telegram channel from config.
    pub fn new(config: TelegramConfig, request_timeout: Duration, long_poll_secs: u64) -> Self {
        Self::with_api_base(config, API_BASE, request_timeout, long_poll_secs)
    }

    /// Create a channel against a different API host (used by tests).
    pub fn with_api_base(
        config: TelegramConfig,
        api_base: &str,
        request_timeout: Duration,
        long_poll_secs: u64,
    ) -> Self {
        let base_url = format!(
            "{}/bot{}",
            api_base.trim_end_matches('/'),
            config.bot_token
        );
        Self {
            config,
            client: reqwest::Client::new(),
            base_url,
            request_timeout,
            long_poll_secs,
        }
    }

    /// Destination chat, as a JSON value (numeric ids stay numeric).
    fn chat_id_value(&self) -> serde_json::Value {
        match self.config.chat_id.trim().parse::<i64>() {
            Ok(id) => serde_json::Value::from(id),
            Err(_) => serde_json::Value::from(self.config.chat_id.clone()),
        }
    }
}
