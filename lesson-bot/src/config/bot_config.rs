//! BotConfig: loaded from env. BOT_TOKEN is required; PORT, REPLY_MARKUP and STRIP_PUNCTUATION are optional.

use anyhow::{Context, Result};
use lesson_core::Markup;
use lesson_telegram::TelegramConfig;
use std::env;
use topic_responder::NormalizePolicy;

/// Liveness probe port when PORT is unset.
pub const DEFAULT_PORT: u16 = 8080;

/// Full bot config.
#[derive(Debug, Clone)]
pub struct BotConfig {
    telegram: TelegramConfig,
    /// PORT
    port: u16,
    /// REPLY_MARKUP: html | plain
    markup: Markup,
    /// STRIP_PUNCTUATION
    strip_punctuation: bool,
}

impl BotConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let telegram = TelegramConfig::load(token)?;

        let port = match env::var("PORT").ok().filter(|s| !s.trim().is_empty()) {
            Some(s) => s
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT is not a valid port number: {}", s))?,
            None => DEFAULT_PORT,
        };

        let markup = match env::var("REPLY_MARKUP") {
            Ok(s) => s
                .parse::<Markup>()
                .map_err(|e| anyhow::anyhow!("REPLY_MARKUP: {}", e))?,
            Err(_) => Markup::default(),
        };

        let strip_punctuation = match env::var("STRIP_PUNCTUATION") {
            Ok(s) => parse_bool(&s)
                .with_context(|| format!("STRIP_PUNCTUATION is not a boolean: {}", s))?,
            Err(_) => false,
        };

        Ok(Self {
            telegram,
            port,
            markup,
            strip_punctuation,
        })
    }

    /// Validate config (e.g. telegram_api_url must be valid URL if set).
    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()
    }

    pub fn telegram(&self) -> &TelegramConfig {
        &self.telegram
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn markup(&self) -> Markup {
        self.markup
    }

    pub fn strip_punctuation(&self) -> bool {
        self.strip_punctuation
    }

    pub fn normalize_policy(&self) -> NormalizePolicy {
        NormalizePolicy {
            strip_punctuation: self.strip_punctuation,
        }
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
