//! Bot configuration: Telegram connection (lesson-telegram) + probe port + reply and matching options.

mod bot_config;


pub use bot_config::{BotConfig, DEFAULT_PORT};
