//! REPL runner: each teloxide message becomes a core::Message, goes through the HandlerChain in its
//! own task, and a Reply is sent back with the configured markup and keyboard.

use anyhow::Result;
use handler_chain::HandlerChain;
use lesson_core::{Bot as CoreBot, HandlerResponse, Keyboard, Markup, Message, OutgoingReply, ToCoreMessage};
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::BotCommand;
use tracing::{error, info, instrument, warn};

use super::adapters::TelegramMessageWrapper;
use super::bot_adapter::TelegramBotAdapter;

/// Markup and keyboard applied to every reply the chain produces.
#[derive(Debug, Clone, Default)]
pub struct ReplyOptions {
    pub markup: Markup,
    pub keyboard: Option<Keyboard>,
}

impl ReplyOptions {
    fn reply(&self, text: String) -> OutgoingReply {
        let reply = OutgoingReply::new(text, self.markup);
        match &self.keyboard {
            Some(keyboard) => reply.with_keyboard(keyboard.clone()),
            None => reply,
        }
    }
}

/// Runs the chain for one message and sends its Reply, if any, through `bot`.
#[instrument(skip_all, fields(user_id = message.user.id, chat_id = message.chat.id))]
pub async fn process_message(
    chain: &HandlerChain,
    bot: &dyn CoreBot,
    message: &Message,
    options: &ReplyOptions,
) -> lesson_core::Result<HandlerResponse> {
    let response = chain.handle(message).await?;
    match &response {
        HandlerResponse::Reply(text) => {
            bot.reply_to(message, &options.reply(text.clone())).await?;
            info!(message_id = %message.id, reply_len = text.len(), "Sent reply");
        }
        other => {
            info!(message_id = %message.id, response = ?other, "No reply sent");
        }
    }
    Ok(response)
}

/// Publishes the command menu (name, description) shown by Telegram clients.
pub async fn register_commands(bot: &teloxide::Bot, commands: &[(&str, &str)]) -> Result<()> {
    let commands: Vec<BotCommand> = commands
        .iter()
        .map(|(name, description)| BotCommand::new(*name, *description))
        .collect();
    bot.set_my_commands(commands).await?;
    Ok(())
}

/// Starts long polling. Every message is converted and handled in a spawned task, so a slow send
/// never blocks the next update.
#[instrument(skip(bot, handler_chain, options))]
pub async fn run_repl(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    options: ReplyOptions,
) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => info!(username = ?me.user.username, "Connected to Telegram"),
        Err(e) => warn!(error = %e, "get_me failed; continuing"),
    }

    let reply_bot: Arc<dyn CoreBot> = Arc::new(TelegramBotAdapter::new(bot.clone()));
    let chain = Arc::new(handler_chain);
    let options = Arc::new(options);

    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = chain.clone();
        let reply_bot = reply_bot.clone();
        let options = options.clone();

        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();

            match msg.text() {
                Some(text) => info!(
                    user_id = core_msg.user.id,
                    chat_id = core_msg.chat.id,
                    message_content = %text,
                    "Received message"
                ),
                None => info!(
                    user_id = core_msg.user.id,
                    chat_id = core_msg.chat.id,
                    "Received non-text message"
                ),
            }

            tokio::spawn(async move {
                if let Err(e) =
                    process_message(&chain, reply_bot.as_ref(), &core_msg, &options).await
                {
                    error!(error = %e, user_id = core_msg.user.id, "Message handling failed");
                }
            });

            respond(())
        }
    })
    .await;

    Ok(())
}
