use serde::{Deserialize, Serialize};

/// An outgoing message to the configured chat.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutgoingMessage {
    /// HTML-formatted text.
    pub text: String,
    /// Inline keyboard attached to the message.
    #[serde(default)]
    pub keyboard: Option<Keyboard>,
    /// Suppress link previews.
    #[serde(default)]
    pub disable_preview: bool,
}

impl OutgoingMessage {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_keyboard(mut self, keyboard: Keyboard) -> Self {
        self.keyboard = Some(keyboard);
        self
    }

    pub fn without_preview(mut self) -> Self {
        self.disable_preview = true;
        self
    }
}

/// Inline keyboard: rows of callback buttons.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Keyboard {
    pub rows: Vec<Vec<Button>>,
}

/// A button that sends `callback_data` back when pressed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Button {
    pub text: String,
    pub callback_data: String,
}

impl Button {
    pub fn new(text: impl Into<String>, callback_data: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            callback_data: callback_data.into(),
        }
    }
}

/// A message the platform accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentMessage {
    pub message_id: i64,
}

/// One inbound update from the long poll.
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    pub update_id: i64,
    pub kind: UpdateKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UpdateKind {
    /// A text message posted in a chat.
    Message(IncomingMessage),
    /// An inline-button press.
    Callback(CallbackQuery),
    /// Anything else (edits, joins, media without text).
    Other,
}

/// An inbound text message.
#[derive(Debug, Clone, PartialEq)]
pub struct IncomingMessage {
    pub message_id: i64,
    pub chat_id: i64,
    pub text: String,
}

/// An inline-button press on one of our messages.
#[derive(Debug, Clone, PartialEq)]
pub struct CallbackQuery {
    pub id: String,
    pub data: String,
    /// Message the button belongs to.
    pub message_id: i64,
    /// Current text of that message.
    pub message_text: String,
}
