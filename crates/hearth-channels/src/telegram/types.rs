//! Telegram Bot API (de)serialization types.

use hearth_core::message::{CallbackQuery, IncomingMessage, Keyboard, Update, UpdateKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub(crate) struct TgResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TgUpdate {
    pub update_id: i64,
    pub message: Option<TgMessage>,
    /// Posts in channels arrive here instead of `message`.
    pub channel_post: Option<TgMessage>,
    pub callback_query: Option<TgCallbackQuery>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TgMessage {
    pub message_id: i64,
    pub chat: TgChat,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TgChat {
    pub id: i64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TgCallbackQuery {
    pub id: String,
    pub data: Option<String>,
    pub message: Option<TgMessage>,
}

#[derive(Debug, Serialize)]
pub(crate) struct TgInlineKeyboard<'a> {
    pub inline_keyboard: Vec<Vec<TgInlineButton<'a>>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct TgInlineButton<'a> {
    pub text: &'a str,
    pub callback_data: &'a str,
}

impl<'a> From<&'a Keyboard> for TgInlineKeyboard<'a> {
    fn from(keyboard: &'a Keyboard) -> Self {
        Self {
            inline_keyboard: keyboard
                .rows
                .iter()
                .map(|row| {
                    row.iter()
                        .map(|b| TgInlineButton {
                            text: &b.text,
                            callback_data: &b.callback_data,
                        })
                        .collect()
                })
                .collect(),
        }
    }
}

impl From<TgUpdate> for Update {
    fn from(update: TgUpdate) -> Self {
        let kind = if let Some(cq) = update.callback_query {
            let (message_id, message_text) = cq
                .message
                .map(|m| (m.message_id, m.text.unwrap_or_default()))
                .unwrap_or_default();
            UpdateKind::Callback(CallbackQuery {
                id: cq.id,
                data: cq.data.unwrap_or_default(),
                message_id,
                message_text,
            })
        } else if let Some(msg) = update.message.or(update.channel_post) {
            match msg.text {
                Some(text) => UpdateKind::Message(IncomingMessage {
                    message_id: msg.message_id,
                    chat_id: msg.chat.id,
                    text,
                }),
                None => UpdateKind::Other,
            }
        } else {
            UpdateKind::Other
        };
        Update {
            update_id: update.update_id,
            kind,
        }
    }
}
