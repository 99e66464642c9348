//! Outbound Bot API calls: sendMessage, editMessageText, answerCallbackQuery.

use super::types::{TgInlineKeyboard, TgMessage, TgResponse};
use super::TelegramChannel;
use hearth_core::{
    error::HearthError,
    message::{OutgoingMessage, SentMessage},
};
use serde::de::DeserializeOwned;
use tracing::debug;

impl TelegramChannel {
    /// POST a JSON body to a Bot API method.
    ///
    /// Succeeds only on HTTP 200 with `ok: true`.
    async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        body: &serde_json::Value,
    ) -> Result<Option<T>, HearthError> {
        let url = format!("{}/{method}", self.base_url);
        let resp = self
            .client
            .post(&url)
            .timeout(self.request_timeout)
            .json(body)
            .send()
            .await
            .map_err(|e| HearthError::Channel(format!("telegram {method} failed: {e}")))?;

        let status = resp.status();
        if status != reqwest::StatusCode::OK {
            let error_text = resp.text().await.unwrap_or_default();
            return Err(HearthError::Channel(format!(
                "telegram {method} failed ({status}): {error_text}"
            )));
        }

        let parsed: TgResponse<T> = resp
            .json()
            .await
            .map_err(|e| HearthError::Channel(format!("telegram {method} parse failed: {e}")))?;

        if !parsed.ok {
            return Err(HearthError::Channel(format!(
                "telegram {method} returned ok=false: {}",
                parsed.description.unwrap_or_default()
            )));
        }

        debug!("telegram {method} ok");
        Ok(parsed.result)
    }

    /// Build the shared sendMessage/editMessageText body.
    fn message_body(&self, message: &OutgoingMessage) -> serde_json::Value {
        let mut body = serde_json::json!({
            "chat_id": self.chat_id_value(),
            "text": message.text,
            "parse_mode": "HTML",
            "disable_web_page_preview": message.disable_preview,
        });
        if let Some(ref keyboard) = message.keyboard {
            body["reply_markup"] = serde_json::json!(TgInlineKeyboard::from(keyboard));
        }
        body
    }

    pub(crate) async fn send_text(
        &self,
        message: &OutgoingMessage,
    ) -> Result<SentMessage, HearthError> {
        let body = self.message_body(message);
        let sent: Option<TgMessage> = self.call("sendMessage", &body).await?;
        let sent =
            sent.ok_or_else(|| HearthError::Channel("telegram sendMessage: no result".into()))?;
        Ok(SentMessage {
            message_id: sent.message_id,
        })
    }

    pub(crate) async fn edit_text(
        &self,
        message_id: i64,
        message: &OutgoingMessage,
    ) -> Result<(), HearthError> {
        let mut body = self.message_body(message);
        body["message_id"] = serde_json::json!(message_id);
        // Result is the edited Message (or `true` for inline messages); unused.
        self.call::<serde_json::Value>("editMessageText", &body)
            .await
            .map(|_| ())
    }

    pub(crate) async fn answer_query(
        &self,
        callback_id: &str,
        text: Option<&str>,
    ) -> Result<(), HearthError> {
        let mut body = serde_json::json!({ "callback_query_id": callback_id });
        if let Some(text) = text {
            body["text"] = serde_json::json!(text);
        }
        self.call::<bool>("answerCallbackQuery", &body)
            .await
            .map(|_| ())
    }
}
