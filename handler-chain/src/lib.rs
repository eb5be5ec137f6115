//! # Handler chain
//!
//! Runs every handler's `before` in order, then `handle` until one returns Stop or Reply, then every
//! `after` in reverse order. An optional fallback reply guarantees that a text message never goes unanswered.

use lesson_core::{Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Ordered handlers plus an optional fallback reply.
#[derive(Clone, Default)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
    fallback: Option<String>,
}

impl HandlerChain {
    /// Creates an empty chain with no fallback.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a handler (runs in order; first Stop/Reply ends the handle phase).
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Reply used when no handler replied to a text message.
    pub fn with_fallback(mut self, text: impl Into<String>) -> Self {
        self.fallback = Some(text.into());
        self
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Runs before / handle / after. Returns the first Stop or Reply, the fallback Reply, or Continue.
    #[instrument(skip(self, message), fields(user_id = message.user.id, chat_id = message.chat.id))]
    pub async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        info!(message_id = %message.id, "step: handler_chain started");

        for handler in &self.handlers {
            let name = std::any::type_name_of_val(handler.as_ref());
            if !handler.before(message).await? {
                info!(handler = %name, "step: before returned false, chain stopped");
                return Ok(HandlerResponse::Stop);
            }
            debug!(handler = %name, "step: before done");
        }

        let mut final_response = HandlerResponse::Continue;
        for handler in &self.handlers {
            let name = std::any::type_name_of_val(handler.as_ref());
            let response = handler.handle(message).await?;
            let (response_type, reply_len) = describe(&response);
            info!(
                handler = %name,
                response_type = %response_type,
                reply_len = ?reply_len,
                "step: handler done"
            );
            if matches!(response, HandlerResponse::Stop | HandlerResponse::Reply(_)) {
                final_response = response;
                break;
            }
        }

        if final_response == HandlerResponse::Continue && message.has_text() {
            if let Some(fallback) = &self.fallback {
                info!("step: no handler replied, using fallback");
                final_response = HandlerResponse::Reply(fallback.clone());
            }
        }

        for handler in self.handlers.iter().rev() {
            handler.after(message, &final_response).await?;
        }

        info!(message_id = %message.id, "step: handler_chain finished");
        Ok(final_response)
    }
}

fn describe(response: &HandlerResponse) -> (&'static str, Option<usize>) {
    match response {
        HandlerResponse::Continue => ("Continue", None),
        HandlerResponse::Stop => ("Stop", None),
        HandlerResponse::Ignore => ("Ignore", None),
        HandlerResponse::Reply(s) => ("Reply", Some(s.len())),
    }
}
