//! Slash commands: parsing and the menu published to Telegram.

use std::str::FromStr;

use lesson_core::HandlerError;

/// Commands the bot understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    Rules,
}

impl Command {
    /// (name, description) pairs for `set_my_commands`.
    pub const MENU: &'static [(&'static str, &'static str)] = &[
        ("start", "Начать"),
        ("help", "Как пользоваться ботом"),
        ("rules", "Список всех тем"),
    ];

    /// Parses a message as a command. `None` if it does not start with `/`.
    ///
    /// The name is the first word without the slash and without an `@botname` suffix, case-insensitive.
    pub fn parse(text: &str) -> Option<Result<Command, HandlerError>> {
        let rest = text.trim().strip_prefix('/')?;
        let word = rest.split_whitespace().next().unwrap_or("");
        let name = word.split('@').next().unwrap_or("");
        Some(name.parse())
    }
}

impl FromStr for Command {
    type Err = HandlerError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_lowercase().as_str() {
            "start" => Ok(Command::Start),
            "help" => Ok(Command::Help),
            "rules" | "topics" => Ok(Command::Rules),
            other => Err(HandlerError::UnknownCommand(other.to_string())),
        }
    }
}
