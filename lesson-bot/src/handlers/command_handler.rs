//! Answers /start, /help and /rules; anything else starting with `/` gets a pointer to /help.

use std::sync::Arc;

use async_trait::async_trait;
use lesson_core::{Handler, HandlerResponse, Message, Result};
use topic_responder::Responder;
use tracing::{info, instrument, warn};

use crate::commands::Command;

pub const GREETING: &str = "Привет! Я бот по русскому языку для 3 класса 📚\n\
    Напиши название темы или используй команду /rules.\n\
    Разделы можно выбрать на клавиатуре внизу.";

pub const UNKNOWN_COMMAND: &str = "Я не знаю такой команды. Напиши /help.";

/// Replies to slash commands; plain text continues to the next handler.
pub struct CommandHandler {
    responder: Arc<Responder>,
}

impl CommandHandler {
    pub fn new(responder: Arc<Responder>) -> Self {
        Self { responder }
    }

    fn reply_for(&self, command: Command) -> String {
        match command {
            Command::Start => GREETING.to_string(),
            Command::Help => self.responder.help(),
            Command::Rules => self.responder.topic_list(),
        }
    }
}

#[async_trait]
impl Handler for CommandHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        match Command::parse(&message.content) {
            None => Ok(HandlerResponse::Continue),
            Some(Ok(command)) => {
                info!(user_id = message.user.id, command = ?command, "Command");
                Ok(HandlerResponse::Reply(self.reply_for(command)))
            }
            Some(Err(e)) => {
                warn!(user_id = message.user.id, error = %e, "Unknown command");
                Ok(HandlerResponse::Reply(UNKNOWN_COMMAND.to_string()))
            }
        }
    }
}
