//! # Russian lesson bot
//!
//! Wires topic-responder, handler-chain and lesson-telegram into a Telegram bot for grade-3 Russian:
//! commands (/start, /help, /rules), free-text topic lookup, a persistent category keyboard, and an
//! HTTP liveness probe for the hosting platform.

pub mod cli;
pub mod commands;
pub mod config;
pub mod handlers;
pub mod health;
pub mod runner;

pub use cli::{ask, load_config, Cli, Commands};
pub use commands::Command;
pub use config::BotConfig;
pub use handlers::{CommandHandler, LoggingHandler, TopicHandler};
pub use runner::{build_handler_chain, build_responder, lesson_keyboard, reply_options, run_bot};
