use crate::{
    error::HearthError,
    message::{OutgoingMessage, SentMessage, Update},
};
use async_trait::async_trait;

/// Messaging channel bound to one destination chat.
///
/// Every call is a single request: success means the platform accepted it,
/// anything else is an error the caller logs. No retries.
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Human-readable channel name.
    fn name(&self) -> &str;

    /// Post a new message.
    async fn send(&self, message: &OutgoingMessage) -> Result<SentMessage, HearthError>;

    /// Replace the text and keyboard of an existing message.
    async fn edit(&self, message_id: i64, message: &OutgoingMessage) -> Result<(), HearthError>;

    /// Acknowledge an inline-button press, optionally with a toast.
    async fn answer_callback(&self, callback_id: &str, text: Option<&str>)
        -> Result<(), HearthError>;

    /// Long-poll for updates after `offset`.
    async fn get_updates(&self, offset: Option<i64>) -> Result<Vec<Update>, HearthError>;
}
