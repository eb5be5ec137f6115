//! Wraps teloxide::Bot and implements [`lesson_core::Bot`]. Production code sends via Telegram; tests substitute a mock.

use async_trait::async_trait;
use lesson_core::{Bot as CoreBot, Chat, Keyboard, LessonError, Markup, OutgoingReply, Result};
use teloxide::{
    prelude::*,
    types::{ChatId, KeyboardButton, KeyboardMarkup, ParseMode},
};

/// Builds a persistent, resized reply keyboard from core [`Keyboard`] rows.
pub fn to_keyboard_markup(keyboard: &Keyboard) -> KeyboardMarkup {
    KeyboardMarkup::new(
        keyboard
            .rows
            .iter()
            .map(|row| row.iter().map(|label| KeyboardButton::new(label.clone()))),
    )
    .resize_keyboard()
    .persistent()
}

/// Thin wrapper around teloxide::Bot that implements lesson-core's Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_reply(&self, chat: &Chat, reply: &OutgoingReply) -> Result<()> {
        let mut request = self.bot.send_message(ChatId(chat.id), reply.text.clone());
        if reply.markup == Markup::Html {
            request = request.parse_mode(ParseMode::Html);
        }
        if let Some(keyboard) = &reply.keyboard {
            request = request.reply_markup(to_keyboard_markup(keyboard));
        }
        request
            .await
            .map_err(|e| LessonError::Bot(e.to_string()))?;
        Ok(())
    }
}
