//! Catch-all text handler: asks the responder for a topic or category.

use std::sync::Arc;

use async_trait::async_trait;
use lesson_core::{Handler, HandlerResponse, Message, Result};
use topic_responder::{Resolution, Responder};
use tracing::{info, instrument};

/// Replies with the matching topic or category summary. Unmatched text continues, so the chain's
/// not-found fallback answers it. Non-text messages are ignored.
pub struct TopicHandler {
    responder: Arc<Responder>,
}

impl TopicHandler {
    pub fn new(responder: Arc<Responder>) -> Self {
        Self { responder }
    }
}

#[async_trait]
impl Handler for TopicHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !message.has_text() {
            return Ok(HandlerResponse::Ignore);
        }
        let resolution = self.responder.resolve(&message.content);
        info!(
            user_id = message.user.id,
            matched = %resolution.label(),
            "Topic lookup"
        );
        match resolution {
            Resolution::NotFound => Ok(HandlerResponse::Continue),
            found => Ok(HandlerResponse::Reply(self.responder.render(&found))),
        }
    }
}
