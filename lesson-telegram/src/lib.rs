//! # lesson-telegram
//!
//! Telegram layer: teloxide adapters, [`lesson_core::Bot`] implementation with markup and keyboards,
//! minimal config, and the REPL runner that feeds every message through a [`handler_chain::HandlerChain`].
//! No lesson logic lives here.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::{to_keyboard_markup, TelegramBotAdapter};
pub use config::TelegramConfig;
pub use runner::{process_message, register_commands, run_repl, ReplyOptions};
