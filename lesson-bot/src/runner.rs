//! Assembles the bot from config and runs it: knowledge base → responder → handler chain → REPL,
//! with the liveness probe alongside.

use std::sync::Arc;

use anyhow::Result;
use handler_chain::HandlerChain;
use lesson_core::Keyboard;
use lesson_telegram::{register_commands, run_repl, ReplyOptions};
use topic_responder::{Category, KnowledgeBase, Responder, NOT_FOUND_MESSAGE};
use tracing::{info, instrument, warn};

use crate::commands::Command;
use crate::config::BotConfig;
use crate::handlers::{CommandHandler, LoggingHandler, TopicHandler};
use crate::health;

/// Responder over `knowledge_base` with the configured normalization and markup.
pub fn build_responder(config: &BotConfig, knowledge_base: Arc<KnowledgeBase>) -> Arc<Responder> {
    Arc::new(
        Responder::new(knowledge_base)
            .with_policy(config.normalize_policy())
            .with_markup(config.markup()),
    )
}

/// Logging → commands → topic lookup; not-found fallback for any text nobody answered.
pub fn build_handler_chain(responder: Arc<Responder>) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(CommandHandler::new(responder.clone())))
        .add_handler(Arc::new(TopicHandler::new(responder)))
        .with_fallback(NOT_FOUND_MESSAGE)
}

/// Persistent keyboard with one button per category.
pub fn lesson_keyboard() -> Keyboard {
    Keyboard::new(Category::keyboard_rows())
}

pub fn reply_options(config: &BotConfig) -> ReplyOptions {
    ReplyOptions {
        markup: config.markup(),
        keyboard: Some(lesson_keyboard()),
    }
}

/// Main entry: validate config, start the liveness probe, register commands, then run the REPL.
/// Expects tracing to be initialized by the caller.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;

    let knowledge_base = Arc::new(KnowledgeBase::grade_three());
    let responder = build_responder(&config, knowledge_base.clone());
    let handler_chain = build_handler_chain(responder);

    info!(
        topics = knowledge_base.len(),
        markup = ?config.markup(),
        strip_punctuation = config.strip_punctuation(),
        port = config.port(),
        "Initializing bot"
    );

    let listener = health::bind(config.port()).await?;
    let probe = health::spawn(listener);

    let bot = config.telegram().build_bot()?;
    if let Err(e) = register_commands(&bot, Command::MENU).await {
        warn!(error = %e, "Failed to register command menu");
    }

    info!("Bot started successfully");
    let result = run_repl(bot, handler_chain, reply_options(&config)).await;

    probe.abort();
    result
}
