//! Bot abstraction for sending replies.
//!
//! [`Bot`] is transport-agnostic; lesson-telegram implements it with teloxide, tests use a recording mock.

use crate::error::Result;
use crate::types::{Chat, Message, OutgoingReply};
use async_trait::async_trait;

/// Abstraction for sending messages. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a reply (text, markup mode, optional keyboard) to the given chat.
    async fn send_reply(&self, chat: &Chat, reply: &OutgoingReply) -> Result<()>;

    /// Sends a reply to the given message (same chat).
    async fn reply_to(&self, message: &Message, reply: &OutgoingReply) -> Result<()> {
        self.send_reply(&message.chat, reply).await
    }
}
