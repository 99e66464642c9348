//! Inline-button callback handling.

use super::{checklist_keyboard, render_checklist, render_results, Tracker};
use crate::i18n::t;
use chrono::NaiveDate;
use hearth_core::message::{CallbackQuery, OutgoingMessage};
use hearth_tracker::{CallbackAction, Category, Checklist};
use tracing::{error, info, warn};

impl Tracker {
    pub(super) async fn handle_callback(&mut self, query: CallbackQuery, today: NaiveDate) {
        info!("tracker: callback {:?} on message {}", query.data, query.message_id);
        match CallbackAction::parse(&query.data) {
            Some(CallbackAction::Toggle(category, idx)) => {
                self.on_toggle(&query, category, idx).await
            }
            Some(CallbackAction::Save) => self.on_save(&query, today).await,
            Some(CallbackAction::Cancel) => self.on_cancel(&query).await,
            Some(CallbackAction::Header) => self.answer(&query.id, None).await,
            None => {
                warn!("tracker: unrecognised callback data {:?}", query.data);
                self.answer(&query.id, None).await;
            }
        }
    }

    /// The checklist behind a message: the registered one, else whatever
    /// parses out of the message's current text.
    fn checklist_for(&mut self, query: &CallbackQuery) -> Checklist {
        if let Some(checklist) = self.state.checklist(query.message_id) {
            return checklist.clone();
        }
        let parsed = Checklist::parse(&query.message_text, &self.config.tracker.markers);
        if !parsed.is_empty() {
            self.state.register(query.message_id, parsed.clone());
        }
        parsed
    }

    async fn on_toggle(&mut self, query: &CallbackQuery, category: Category, idx: usize) {
        let checklist = self.checklist_for(query);
        if idx >= checklist.tasks(category).len() {
            warn!(
                "tracker: no {} task {idx} on message {} (state lost?)",
                category.key(),
                query.message_id
            );
            self.answer(&query.id, None).await;
            return;
        }

        let now_done = self.state.toggle(query.message_id, category, idx);
        info!(
            "tracker: {} task {idx} on message {} is now {}",
            category.key(),
            query.message_id,
            if now_done { "done" } else { "open" }
        );

        let lang = self.config.hearth.locale.as_str();
        let completion = self.state.completion(query.message_id);
        let message = OutgoingMessage::text(render_checklist(
            lang,
            &checklist,
            &completion,
            t("checklist_title", lang),
        ))
        .with_keyboard(checklist_keyboard(lang, &checklist, &completion))
        .without_preview();

        if let Err(e) = self.messenger.edit(query.message_id, &message).await {
            error!("tracker: failed to edit message {}: {e}", query.message_id);
        }
        self.answer(&query.id, None).await;
    }

    async fn on_save(&mut self, query: &CallbackQuery, today: NaiveDate) {
        let lang = self.config.hearth.locale.clone();
        self.answer(&query.id, Some(t("progress_saved_toast", &lang)))
            .await;

        let checklist = self.checklist_for(query);
        let text = if checklist.is_empty() {
            warn!(
                "tracker: nothing to record for message {}",
                query.message_id
            );
            format!(
                "{}\n\n{}",
                t("progress_saved_banner", &lang),
                query.message_text
            )
        } else {
            let completion = self.state.completion(query.message_id);
            let done = completion.done_count(&checklist);
            self.stats.record(today, checklist.total(), done);
            if let Err(e) = self.stats.save() {
                error!("tracker: failed to save stats: {e}");
            }
            info!(
                "tracker: {today} progress {done}/{} saved",
                checklist.total()
            );
            render_results(&lang, &checklist, &completion)
        };

        let message = OutgoingMessage::text(text).without_preview();
        if let Err(e) = self.messenger.edit(query.message_id, &message).await {
            error!("tracker: failed to edit message {}: {e}", query.message_id);
        }
        self.state.forget(query.message_id);
    }

    async fn on_cancel(&mut self, query: &CallbackQuery) {
        let lang = self.config.hearth.locale.as_str();
        self.answer(&query.id, Some(t("update_cancelled_toast", lang)))
            .await;

        let message = OutgoingMessage::text(t("update_cancelled", lang)).without_preview();
        if let Err(e) = self.messenger.edit(query.message_id, &message).await {
            error!("tracker: failed to edit message {}: {e}", query.message_id);
        }
        self.state.forget(query.message_id);
    }

    async fn answer(&self, callback_id: &str, text: Option<&str>) {
        if let Err(e) = self.messenger.answer_callback(callback_id, text).await {
            error!("tracker: failed to answer callback {callback_id}: {e}");
        }
    }
}
