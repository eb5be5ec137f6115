//! Mock implementation of [`lesson_core::Bot`] for integration tests.
//!
//! Records every `send_reply` call so tests can assert on chat, text, markup and keyboard
//! without hitting Telegram.

use async_trait::async_trait;
use lesson_core::{Bot, Chat, OutgoingReply, Result};
use std::sync::Mutex;

/// One recorded call to `send_reply(chat, reply)`.
#[derive(Debug, Clone)]
pub struct SentReply {
    pub chat_id: i64,
    pub reply: OutgoingReply,
}

/// Mock Bot that stores sent replies in order.
#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<SentReply>>,
}

impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replies sent so far.
    pub fn sent(&self) -> Vec<SentReply> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_reply(&self, chat: &Chat, reply: &OutgoingReply) -> Result<()> {
        self.sent.lock().unwrap().push(SentReply {
            chat_id: chat.id,
            reply: reply.clone(),
        });
        Ok(())
    }
}
