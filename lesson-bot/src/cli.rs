//! CLI parser and config loading.

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use lesson_core::Markup;
use topic_responder::{KnowledgeBase, NormalizePolicy, Responder};

use crate::config::BotConfig;

#[derive(Parser)]
#[command(name = "russian-lesson-bot")]
#[command(about = "Grade-3 Russian lesson Telegram bot", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Print the answer the bot would give to TEXT, without Telegram.
    Ask {
        #[arg(required = true)]
        text: Vec<String>,
        /// Strip punctuation and emoji before matching.
        #[arg(long)]
        strip_punctuation: bool,
    },
}

/// Load BotConfig from environment. If `token` is provided it overrides BOT_TOKEN.
pub fn load_config(token: Option<String>) -> Result<BotConfig> {
    BotConfig::load(token)
}

/// Plain-text answer from the built-in course.
pub fn ask(text: &str, strip_punctuation: bool) -> String {
    Responder::new(Arc::new(KnowledgeBase::grade_three()))
        .with_policy(NormalizePolicy { strip_punctuation })
        .with_markup(Markup::Plain)
        .respond(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use topic_responder::NOT_FOUND_MESSAGE;

    #[test]
    fn test_parse_run_with_token() {
        let cli = Cli::try_parse_from(["russian-lesson-bot", "run", "--token", "abc"]).unwrap();
        match cli.command {
            Commands::Run { token } => assert_eq!(token.as_deref(), Some("abc")),
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn test_parse_ask_joins_words() {
        let cli = Cli::try_parse_from(["russian-lesson-bot", "ask", "жи", "ши"]).unwrap();
        match cli.command {
            Commands::Ask {
                text,
                strip_punctuation,
            } => {
                assert_eq!(text.join(" "), "жи ши");
                assert!(!strip_punctuation);
            }
            _ => panic!("expected ask"),
        }
    }

    #[test]
    fn test_parse_ask_requires_text() {
        assert!(Cli::try_parse_from(["russian-lesson-bot", "ask"]).is_err());
    }

    #[test]
    fn test_ask_plain_answer() {
        let answer = ask("жи ши", false);
        assert!(answer.starts_with("✏️ Жи-ши"));
        assert!(!answer.contains("<b>"));
        assert_eq!(ask("quantum mechanics", false), NOT_FOUND_MESSAGE);
        assert!(ask("Орфография?", true).starts_with("📝 Орфография"));
    }
}
