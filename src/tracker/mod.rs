//! Long-poll checklist tracker.
//!
//! Owns the toggle state and stats store; processes updates one at a time.
//! Every failure inside the loop is logged and retried after a fixed delay.

mod callbacks;
mod render;
mod summary;


pub use render::{checklist_keyboard, render_checklist, render_results, truncate};
pub use summary::{compose_summary, SummarySchedule};

use crate::i18n::t;
use chrono::{NaiveDate, NaiveDateTime};
use hearth_core::config::Config;
use hearth_core::error::HearthError;
use hearth_core::message::{IncomingMessage, OutgoingMessage, Update, UpdateKind};
use hearth_core::traits::Messenger;
use hearth_tracker::{Checklist, Completion, StatsStore, ToggleState};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info};

pub struct Tracker {
    config: Config,
    messenger: Arc<dyn Messenger>,
    state: ToggleState,
    stats: StatsStore,
    summary: SummarySchedule,
    /// Next `getUpdates` offset: last seen update id + 1.
    offset: Option<i64>,
}

impl Tracker {
    pub fn new(
        config: Config,
        messenger: Arc<dyn Messenger>,
        now: NaiveDateTime,
    ) -> Result<Self, HearthError> {
        let summary = SummarySchedule::new(&config.tracker.summary_time, now)?;
        let stats = StatsStore::load(&config.tracker.stats_path);
        info!(
            "tracker: {} day(s) of stats loaded from {}",
            stats.len(),
            config.tracker.stats_path
        );
        Ok(Self {
            config,
            messenger,
            state: ToggleState::new(),
            stats,
            summary,
            offset: None,
        })
    }

    /// Poll forever.
    pub async fn run(mut self) {
        let interval = Duration::from_secs(self.config.tracker.poll_interval_secs);
        let error_delay = Duration::from_secs(self.config.tracker.error_delay_secs);
        info!("tracker: polling {}", self.messenger.name());

        loop {
            let now = chrono::Local::now().naive_local();
            match self.poll_once(now).await {
                Ok(()) => tokio::time::sleep(interval).await,
                Err(e) => {
                    error!("tracker: poll failed: {e}");
                    tokio::time::sleep(error_delay).await;
                }
            }
        }
    }

    /// One iteration: the evening summary if due, then one batch of updates.
    pub async fn poll_once(&mut self, now: NaiveDateTime) -> Result<(), HearthError> {
        if self.summary.due(now) {
            self.send_summary(now.date()).await;
        }

        let updates = self.messenger.get_updates(self.offset).await?;
        for update in updates {
            self.offset = Some(update.update_id + 1);
            self.handle_update(update, now.date()).await;
        }
        Ok(())
    }

    async fn handle_update(&mut self, update: Update, today: NaiveDate) {
        match update.kind {
            UpdateKind::Message(msg) => self.handle_message(msg).await,
            UpdateKind::Callback(query) => self.handle_callback(query, today).await,
            UpdateKind::Other => debug!("tracker: ignoring update {}", update.update_id),
        }
    }

    /// A numeric configured chat id filters inbound messages; a `@channel`
    /// name cannot be compared and accepts every chat.
    fn accepts_chat(&self, chat_id: i64) -> bool {
        match self.config.telegram.chat_id.trim().parse::<i64>() {
            Ok(configured) => configured == chat_id,
            Err(_) => true,
        }
    }

    async fn handle_message(&mut self, msg: IncomingMessage) {
        if !self.accepts_chat(msg.chat_id) {
            debug!("tracker: message from foreign chat {}", msg.chat_id);
            return;
        }
        if !msg.text.contains(self.config.tracker.markers.bullet.as_str()) {
            return;
        }

        info!("tracker: task message {} received", msg.message_id);
        let checklist = Checklist::parse(&msg.text, &self.config.tracker.markers);
        if checklist.is_empty() {
            info!("tracker: no tasks found in message {}", msg.message_id);
            return;
        }

        let lang = self.config.hearth.locale.as_str();
        let completion = Completion::default();
        let message = OutgoingMessage::text(render_checklist(
            lang,
            &checklist,
            &completion,
            t("checklist_title", lang),
        ))
        .with_keyboard(checklist_keyboard(lang, &checklist, &completion))
        .without_preview();

        match self.messenger.send(&message).await {
            Ok(sent) => {
                info!(
                    "tracker: checklist {} sent with {} task(s)",
                    sent.message_id,
                    checklist.total()
                );
                self.state.register(sent.message_id, checklist);
            }
            Err(e) => error!("tracker: failed to send checklist: {e}"),
        }
    }

    async fn send_summary(&self, today: NaiveDate) {
        let lang = self.config.hearth.locale.as_str();
        let Some(text) = compose_summary(lang, today, self.stats.get(today)) else {
            info!("tracker: no stats for {today}, summary skipped");
            return;
        };
        match self.messenger.send(&OutgoingMessage::text(text)).await {
            Ok(_) => info!("tracker: summary for {today} sent"),
            Err(e) => error!("tracker: failed to send summary: {e}"),
        }
    }
}
