//! Logs each message in before() and the outcome in after(); always continues.

use async_trait::async_trait;
use lesson_core::{Handler, HandlerResponse, Message, Result};
use tracing::{info, instrument};

pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        info!(
            user_id = message.user.id,
            username = %message.user.username.as_deref().unwrap_or("unknown"),
            chat_type = %message.chat.chat_type,
            message_content = %message.content,
            "Received message"
        );
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        let reply_len = match response {
            HandlerResponse::Reply(text) => Some(text.chars().count()),
            _ => None,
        };
        info!(
            user_id = message.user.id,
            message_id = %message.id,
            replied = reply_len.is_some(),
            reply_len = ?reply_len,
            "Processed message"
        );
        Ok(())
    }
}
