//! Binary for the Russian lesson bot. `run` starts the Telegram bot; `ask` prints an answer locally.

use anyhow::Result;
use clap::Parser;
use lesson_bot::{ask, load_config, run_bot, Cli, Commands};
use lesson_core::init_tracing;
use lesson_telegram::TelegramConfig;
use tracing::error;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            init_tracing(&TelegramConfig::log_file_from_env())?;
            let config = load_config(token).inspect_err(|e| {
                error!(error = %e, "Startup aborted: invalid configuration");
            })?;
            run_bot(config).await.inspect_err(|e| {
                error!(error = %e, "Bot stopped with error");
            })
        }
        Commands::Ask {
            text,
            strip_punctuation,
        } => {
            println!("{}", ask(&text.join(" "), strip_punctuation));
            Ok(())
        }
    }
}
