//! Long-poll update fetch and the Messenger trait implementation.

use super::types::{TgResponse, TgUpdate};
use super::TelegramChannel;
use async_trait::async_trait;
use hearth_core::{
    error::HearthError,
    message::{OutgoingMessage, SentMessage, Update},
    traits::Messenger,
};
use std::time::Duration;

impl TelegramChannel {
    /// Fetch pending updates, waiting up to `long_poll_secs` server-side.
    pub(crate) async fn fetch_updates(&self, offset: Option<i64>) -> Result<Vec<Update>, HearthError> {
        let mut url = format!("{}/getUpdates?timeout={}", self.base_url, self.long_poll_secs);
        if let Some(off) = offset {
            url.push_str(&format!("&offset={off}"));
        }

        let resp = self
            .client
            .get(&url)
            .timeout(Duration::from_secs(self.long_poll_secs + 5))
            .send()
            .await
            .map_err(|e| HearthError::Channel(format!("telegram poll error: {e}")))?;

        let status = resp.status();
        if status != reqwest::StatusCode::OK {
            let error_text = resp.text().await.unwrap_or_default();
            return Err(HearthError::Channel(format!(
                "telegram getUpdates failed ({status}): {error_text}"
            )));
        }

        let body: TgResponse<Vec<TgUpdate>> = resp
            .json()
            .await
            .map_err(|e| HearthError::Channel(format!("telegram parse error: {e}")))?;

        if !body.ok {
            return Err(HearthError::Channel(format!(
                "telegram API error: {}",
                body.description.unwrap_or_default()
            )));
        }

        Ok(body
            .result
            .unwrap_or_default()
            .into_iter()
            .map(Update::from)
            .collect())
    }
}

#[async_trait]
impl Messenger for TelegramChannel {
    fn name(&self) -> &str {
        "telegram"
    }

    async fn send(&self, message: &OutgoingMessage) -> Result<SentMessage, HearthError> {
        self.send_text(message).await
    }

    async fn edit(&self, message_id: i64, message: &OutgoingMessage) -> Result<(), HearthError> {
        self.edit_text(message_id, message).await
    }

    async fn answer_callback(
        &self,
        callback_id: &str,
        text: Option<&str>,
    ) -> Result<(), HearthError> {
        self.answer_query(callback_id, text).await
    }

    async fn get_updates(&self, offset: Option<i64>) -> Result<Vec<Update>, HearthError> {
        self.fetch_updates(offset).await
    }
}
