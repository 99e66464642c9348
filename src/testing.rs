//! Shared test doubles.

use async_trait::async_trait;
use hearth_core::error::HearthError;
use hearth_core::message::{OutgoingMessage, SentMessage, Update};
use hearth_core::traits::Messenger;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

/// Messenger that records every call and replays queued update batches.
pub struct MockMessenger {
    pub sent: Mutex<Vec<OutgoingMessage>>,
    pub edits: Mutex<Vec<(i64, OutgoingMessage)>>,
    pub answers: Mutex<Vec<(String, Option<String>)>>,
    pub polled_offsets: Mutex<Vec<Option<i64>>>,
    updates: Mutex<VecDeque<Result<Vec<Update>, HearthError>>>,
    next_id: AtomicI64,
    /// Sends fail once this many messages have been accepted.
    fail_after: Option<usize>,
}

impl MockMessenger {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            edits: Mutex::new(Vec::new()),
            answers: Mutex::new(Vec::new()),
            polled_offsets: Mutex::new(Vec::new()),
            updates: Mutex::new(VecDeque::new()),
            next_id: AtomicI64::new(100),
            fail_after: None,
        }
    }

    pub fn failing_after(accepted: usize) -> Self {
        Self {
            fail_after: Some(accepted),
            ..Self::new()
        }
    }

    pub fn queue_updates(&self, batch: Result<Vec<Update>, HearthError>) {
        self.updates.lock().unwrap().push_back(batch);
    }

    pub fn sent_texts(&self) -> Vec<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .map(|m| m.text.clone())
            .collect()
    }
}

#[async_trait]
impl Messenger for MockMessenger {
    fn name(&self) -> &str {
        "mock"
    }

    async fn send(&self, message: &OutgoingMessage) -> Result<SentMessage, HearthError> {
        let mut sent = self.sent.lock().unwrap();
        if self.fail_after.is_some_and(|n| sent.len() >= n) {
            return Err(HearthError::Channel("mock send failure".into()));
        }
        sent.push(message.clone());
        Ok(SentMessage {
            message_id: self.next_id.fetch_add(1, Ordering::SeqCst),
        })
    }

    async fn edit(&self, message_id: i64, message: &OutgoingMessage) -> Result<(), HearthError> {
        self.edits
            .lock()
            .unwrap()
            .push((message_id, message.clone()));
        Ok(())
    }

    async fn answer_callback(
        &self,
        callback_id: &str,
        text: Option<&str>,
    ) -> Result<(), HearthError> {
        self.answers
            .lock()
            .unwrap()
            .push((callback_id.to_string(), text.map(str::to_string)));
        Ok(())
    }

    async fn get_updates(&self, offset: Option<i64>) -> Result<Vec<Update>, HearthError> {
        self.polled_offsets.lock().unwrap().push(offset);
        self.updates
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}
