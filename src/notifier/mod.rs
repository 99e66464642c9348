//! One-shot notifier: builds and sends a single briefing or reminder, then exits.

mod briefing;


pub use briefing::{compose_briefing, kids_schedule, ReminderBlock};

use crate::i18n::{self, t};
use chrono::{Datelike, NaiveDate, Weekday};
use hearth_core::calendar::due_event_reminders;
use hearth_core::config::Config;
use hearth_core::error::HearthError;
use hearth_core::message::OutgoingMessage;
use hearth_core::traits::Messenger;
use hearth_sources::{ContentClient, WeatherClient};
use rand::seq::SliceRandom;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

/// Which message to send.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Mode {
    /// Full morning briefing.
    #[default]
    Morning,
    /// Family gratitude reminder.
    Gratitude,
    /// Family games reminder.
    Games,
}

pub struct Notifier {
    config: Config,
    messenger: Arc<dyn Messenger>,
    weather: WeatherClient,
    content: ContentClient,
}

impl Notifier {
    pub fn new(config: Config, messenger: Arc<dyn Messenger>) -> Self {
        let timeout = Duration::from_secs(config.hearth.request_timeout_secs);
        let weather = WeatherClient::new(config.weather.clone(), timeout);
        let content = ContentClient::new(&config.content.base_url, timeout);
        Self {
            config,
            messenger,
            weather,
            content,
        }
    }

    /// Send the message for `mode`. Every failure is logged; returns success.
    pub async fn run(&self, mode: Mode, today: NaiveDate) -> bool {
        info!("notifier: sending {mode:?} via {}", self.messenger.name());
        let lang = self.config.hearth.locale.as_str();
        let result = match mode {
            Mode::Morning => self.send_morning(today).await,
            Mode::Gratitude => self.send(t("gratitude", lang)).await,
            Mode::Games => self.send(t("games", lang)).await,
        };
        match result {
            Ok(()) => {
                info!("notifier: {mode:?} sent");
                true
            }
            Err(e) => {
                error!("notifier: {mode:?} failed: {e}");
                false
            }
        }
    }

    async fn send_morning(&self, today: NaiveDate) -> Result<(), HearthError> {
        let weather = match self.weather.current().await {
            Ok(w) => Some(w),
            Err(e) => {
                warn!("weather unavailable: {e}");
                None
            }
        };

        let quote = self
            .config
            .quotes
            .choose(&mut rand::thread_rng())
            .map(String::as_str);

        let mut reminders = Vec::new();
        for reminder in due_event_reminders(&self.config.events, today) {
            info!(
                "event {} on {} is due ({:?})",
                reminder.event.key, reminder.date, reminder.tier
            );
            let content = match self.content.fetch(&reminder.event.file).await {
                Ok(text) => Some(text),
                Err(e) => {
                    error!("failed to load {}: {e}", reminder.event.file);
                    None
                }
            };
            reminders.push(ReminderBlock { reminder, content });
        }

        let text = compose_briefing(&self.config, today, weather.as_ref(), quote, &reminders);
        self.send(&text).await?;

        if today.weekday() == Weekday::Sun {
            if let Some(ref url) = self.config.notifier.council_url {
                let lang = self.config.hearth.locale.as_str();
                self.send(&i18n::council_message(lang, url)).await?;
            }
        }
        Ok(())
    }

    async fn send(&self, text: &str) -> Result<(), HearthError> {
        let sent = self.messenger.send(&OutgoingMessage::text(text)).await?;
        info!("message {} delivered", sent.message_id);
        Ok(())
    }
}
