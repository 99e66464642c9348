mod defaults;
mod family;


pub use family::*;

use crate::calendar::weekday_from_name;
use crate::error::HearthError;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use defaults::*;

/// Environment variable holding the bot token.
pub const ENV_TOKEN: &str = "TELEGRAM_TOKEN";
/// Environment variable holding the destination chat id.
pub const ENV_CHAT_ID: &str = "TELEGRAM_CHAT_ID";
/// Environment variable holding the health endpoint port.
pub const ENV_PORT: &str = "PORT";

/// Top-level Hearth configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub hearth: HearthConfig,
    #[serde(default)]
    pub telegram: TelegramConfig,
    #[serde(default)]
    pub weather: WeatherConfig,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub notifier: NotifierConfig,
    #[serde(default)]
    pub tracker: TrackerConfig,
    #[serde(default = "default_events")]
    pub events: Vec<RecurringEvent>,
    #[serde(default)]
    pub birthdays: Vec<Birthday>,
    #[serde(default)]
    pub quotes: Vec<String>,
    /// Weekly activities keyed by weekday name (English or Russian).
    #[serde(default)]
    pub schedule: BTreeMap<String, Vec<Activity>>,
    /// Dishes duty keyed by weekday name (English or Russian).
    #[serde(default)]
    pub dishes: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hearth: HearthConfig::default(),
            telegram: TelegramConfig::default(),
            weather: WeatherConfig::default(),
            content: ContentConfig::default(),
            notifier: NotifierConfig::default(),
            tracker: TrackerConfig::default(),
            events: default_events(),
            birthdays: Vec::new(),
            quotes: Vec::new(),
            schedule: BTreeMap::new(),
            dishes: BTreeMap::new(),
        }
    }
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HearthConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Directory for a daily-rolling log file. Unset = stderr only.
    #[serde(default)]
    pub log_dir: Option<String>,
    /// Message language: "ru" or "en".
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Timeout for every outbound HTTP call except the long poll.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for HearthConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            log_level: default_log_level(),
            log_dir: None,
            locale: default_locale(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Telegram bot config. Both values are normally supplied by the environment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TelegramConfig {
    #[serde(default)]
    pub bot_token: String,
    /// Destination chat (numeric id or `@channel`).
    #[serde(default)]
    pub chat_id: String,
}

/// Open-Meteo location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    #[serde(default = "default_longitude")]
    pub longitude: f64,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// City label shown in the weather header.
    #[serde(default = "default_city")]
    pub city: String,
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            latitude: default_latitude(),
            longitude: default_longitude(),
            timezone: default_timezone(),
            city: default_city(),
            base_url: default_weather_base_url(),
        }
    }
}

/// Static content host for event descriptions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    #[serde(default = "default_content_base_url")]
    pub base_url: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            base_url: default_content_base_url(),
        }
    }
}

/// Morning briefing options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotifierConfig {
    /// Include today's kids activities in the morning briefing.
    #[serde(default)]
    pub include_kids_schedule: bool,
    /// Family council link sent as a second message on Sundays.
    #[serde(default)]
    pub council_url: Option<String>,
}

/// Checklist tracker settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Health endpoint port.
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_stats_path")]
    pub stats_path: String,
    /// Local time ("HH:MM") of the daily summary.
    #[serde(default = "default_summary_time")]
    pub summary_time: String,
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
    #[serde(default = "default_error_delay")]
    pub error_delay_secs: u64,
    /// Server-side wait for `getUpdates`.
    #[serde(default = "default_long_poll_timeout")]
    pub long_poll_timeout_secs: u64,
    #[serde(default)]
    pub markers: ChecklistMarkers,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            stats_path: default_stats_path(),
            summary_time: default_summary_time(),
            poll_interval_secs: default_poll_interval(),
            error_delay_secs: default_error_delay(),
            long_poll_timeout_secs: default_long_poll_timeout(),
            markers: ChecklistMarkers::default(),
        }
    }
}

/// Marker phrases that classify checklist header lines.
///
/// `day` and `evening` require ALL phrases on the line; `cant_do` and
/// `reset` match on ANY phrase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistMarkers {
    #[serde(default = "default_day_markers")]
    pub day: Vec<String>,
    #[serde(default = "default_cant_do_markers")]
    pub cant_do: Vec<String>,
    #[serde(default = "default_evening_markers")]
    pub evening: Vec<String>,
    #[serde(default = "default_reset_markers")]
    pub reset: Vec<String>,
    #[serde(default = "default_bullet")]
    pub bullet: String,
}

impl Default for ChecklistMarkers {
    fn default() -> Self {
        Self {
            day: default_day_markers(),
            cant_do: default_cant_do_markers(),
            evening: default_evening_markers(),
            reset: default_reset_markers(),
            bullet: default_bullet(),
        }
    }
}

impl Config {
    /// Activities scheduled for `weekday`, resolved through the weekday name table.
    pub fn activities_for(&self, weekday: Weekday) -> &[Activity] {
        self.schedule
            .iter()
            .find(|(key, _)| weekday_from_name(key) == Some(weekday))
            .map(|(_, items)| items.as_slice())
            .unwrap_or(&[])
    }

    /// Dishes duty for `weekday`, resolved through the weekday name table.
    pub fn dishes_for(&self, weekday: Weekday) -> Option<&str> {
        self.dishes
            .iter()
            .find(|(key, _)| weekday_from_name(key) == Some(weekday))
            .map(|(_, duty)| duty.as_str())
    }

    /// Overlay values from the process environment.
    pub fn apply_env(&mut self) -> Result<(), HearthError> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Overlay values from an arbitrary lookup (the environment in production).
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<(), HearthError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = lookup(ENV_TOKEN).filter(|v| !v.is_empty()) {
            self.telegram.bot_token = token;
        }
        if let Some(chat) = lookup(ENV_CHAT_ID).filter(|v| !v.is_empty()) {
            self.telegram.chat_id = chat;
        }
        if let Some(port) = lookup(ENV_PORT).filter(|v| !v.is_empty()) {
            self.tracker.port = port
                .trim()
                .parse()
                .map_err(|e| HearthError::Config(format!("invalid {ENV_PORT} '{port}': {e}")))?;
        }
        Ok(())
    }

    /// Reject configs the binaries cannot run with.
    pub fn validate(&self) -> Result<(), HearthError> {
        if self.telegram.bot_token.is_empty() {
            return Err(HearthError::Config(format!(
                "{ENV_TOKEN} is not set (environment or [telegram].bot_token)"
            )));
        }
        if self.telegram.chat_id.is_empty() {
            return Err(HearthError::Config(format!(
                "{ENV_CHAT_ID} is not set (environment or [telegram].chat_id)"
            )));
        }
        for key in self.schedule.keys().chain(self.dishes.keys()) {
            if weekday_from_name(key).is_none() {
                return Err(HearthError::Config(format!("unknown weekday '{key}'")));
            }
        }
        if chrono::NaiveTime::parse_from_str(self.tracker.summary_time.trim(), "%H:%M").is_err() {
            return Err(HearthError::Config(format!(
                "invalid tracker.summary_time '{}', expected HH:MM",
                self.tracker.summary_time
            )));
        }
        for b in &self.birthdays {
            if !(1..=12).contains(&b.month) || !(1..=31).contains(&b.day) {
                return Err(HearthError::Config(format!(
                    "invalid birthday date for '{}': {}.{}",
                    b.name, b.day, b.month
                )));
            }
        }
        Ok(())
    }
}

/// Expand `~` to home directory.
pub fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return format!("{}/{rest}", home.to_string_lossy());
        }
    }
    path.to_string()
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist. The environment
/// overlay and validation are separate steps.
pub fn load(path: &str) -> Result<Config, HearthError> {
    let path = Path::new(path);
    if !path.exists() {
        tracing::info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| HearthError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    parse(&content)
}

/// Parse configuration from TOML text.
pub fn parse(content: &str) -> Result<Config, HearthError> {
    toml::from_str(content).map_err(|e| HearthError::Config(format!("failed to parse config: {e}")))
}
