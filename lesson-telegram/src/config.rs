//! Minimal Telegram config: token, optional API URL, log path. Loaded from BOT_TOKEN, TELEGRAM_API_URL, LOG_FILE.

use anyhow::Result;
use std::env;

pub const DEFAULT_LOG_FILE: &str = "logs/russian-lesson-bot.log";

/// Telegram connection and logging settings.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
    pub log_file: String,
}

impl TelegramConfig {
    /// Loads from env. `token` overrides BOT_TOKEN; a missing or blank token is an error.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = token
            .or_else(|| env::var("BOT_TOKEN").ok())
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("BOT_TOKEN not set"))?;
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let log_file = Self::log_file_from_env();
        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
        })
    }

    /// LOG_FILE or the default path. Usable before the token is known, to start logging first.
    pub fn log_file_from_env() -> String {
        env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string())
    }

    /// telegram_api_url must be a valid URL if set.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }

    /// Builds the teloxide Bot, pointing it at the custom API URL when one is set.
    pub fn build_bot(&self) -> Result<teloxide::Bot> {
        let bot = teloxide::Bot::new(self.bot_token.clone());
        match &self.telegram_api_url {
            Some(url) => Ok(bot.set_api_url(reqwest::Url::parse(url)?)),
            None => Ok(bot),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_load_defaults() {
        env::set_var("BOT_TOKEN", "test_token");
        env::remove_var("TELEGRAM_API_URL");
        env::remove_var("TELOXIDE_API_URL");
        env::remove_var("LOG_FILE");
        let config = TelegramConfig::load(None).unwrap();
        assert_eq!(config.bot_token, "test_token");
        assert!(config.telegram_api_url.is_none());
        assert_eq!(config.log_file, DEFAULT_LOG_FILE);
        env::remove_var("BOT_TOKEN");
    }

    #[test]
    #[serial]
    fn test_load_missing_token_fails() {
        env::remove_var("BOT_TOKEN");
        let err = TelegramConfig::load(None).unwrap_err();
        assert!(err.to_string().contains("BOT_TOKEN"));
    }

    #[test]
    #[serial]
    fn test_load_blank_token_fails() {
        env::set_var("BOT_TOKEN", "   ");
        assert!(TelegramConfig::load(None).is_err());
        env::remove_var("BOT_TOKEN");
    }

    #[test]
    #[serial]
    fn test_load_override_token() {
        env::set_var("BOT_TOKEN", "env_token");
        let config = TelegramConfig::load(Some("cli_token".to_string())).unwrap();
        assert_eq!(config.bot_token, "cli_token");
        env::remove_var("BOT_TOKEN");
    }

    #[test]
    #[serial]
    fn test_validate_invalid_api_url() {
        env::set_var("BOT_TOKEN", "token");
        env::set_var("TELEGRAM_API_URL", "not-a-valid-url");
        let config = TelegramConfig::load(None).unwrap();
        assert!(config.validate().is_err());
        assert!(config.build_bot().is_err());
        env::remove_var("TELEGRAM_API_URL");
        env::remove_var("BOT_TOKEN");
    }

    #[test]
    fn test_build_bot_with_api_url() {
        let config = TelegramConfig {
            bot_token: "token".to_string(),
            telegram_api_url: Some("http://localhost:8081".to_string()),
            log_file: DEFAULT_LOG_FILE.to_string(),
        };
        assert!(config.validate().is_ok());
        let bot = config.build_bot().unwrap();
        assert_eq!(bot.api_url().as_str(), "http://localhost:8081/");
    }
}
