//! Core types: user, chat, message, outgoing reply (markup + keyboard), handler response, and Handler trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User identity (id, username, names).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Chat (group or private) identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

/// A single inbound message: who sent it, where, and its text payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    /// Text payload; empty for stickers, photos and other non-text messages.
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// True when the message carries a non-blank text payload.
    pub fn has_text(&self) -> bool {
        !self.content.trim().is_empty()
    }
}

/// How reply text is marked up for the outbound channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Markup {
    /// `<b>` / `<i>` spans; data is HTML-escaped.
    #[default]
    Html,
    /// No markup at all.
    Plain,
}

impl std::str::FromStr for Markup {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "html" => Ok(Markup::Html),
            "plain" | "text" => Ok(Markup::Plain),
            other => Err(format!("unknown markup mode: {}", other)),
        }
    }
}

/// Persistent reply keyboard: rows of button captions. Purely presentational.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyboard {
    pub rows: Vec<Vec<String>>,
}

impl Keyboard {
    pub fn new<R, S>(rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }
}

/// A reply ready to be sent: text, how it is marked up, and an optional keyboard to attach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingReply {
    pub text: String,
    pub markup: Markup,
    pub keyboard: Option<Keyboard>,
}

impl OutgoingReply {
    pub fn new(text: impl Into<String>, markup: Markup) -> Self {
        Self {
            text: text.into(),
            markup,
            keyboard: None,
        }
    }

    pub fn with_keyboard(mut self, keyboard: Keyboard) -> Self {
        self.keyboard = Some(keyboard);
        self
    }
}

/// Handler result for the chain. `Reply(text)` carries the response body so later handlers see it in `after()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; no response body.
    Stop,
    /// Skip this handler, try next.
    Ignore,
    /// Stop the chain and attach reply text.
    Reply(String),
}

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific message type to core [`Message`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}

/// Single handler concept: optional before / handle / after. Chain runs all before → handle until Stop/Reply → all after (reverse).
#[async_trait]
pub trait Handler: Send + Sync {
    /// Runs before the handle phase. Return false to stop the chain.
    async fn before(&self, _message: &Message) -> crate::error::Result<bool> {
        Ok(true)
    }
    /// Processes the message. Return Stop or Reply to end the handle phase. Default: Continue.
    async fn handle(&self, _message: &Message) -> crate::error::Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }
    /// Runs after the handle phase (reverse order), with the final response.
    async fn after(
        &self,
        _message: &Message,
        _response: &HandlerResponse,
    ) -> crate::error::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_from_str() {
        assert_eq!("html".parse::<Markup>().unwrap(), Markup::Html);
        assert_eq!(" PLAIN ".parse::<Markup>().unwrap(), Markup::Plain);
        assert_eq!("text".parse::<Markup>().unwrap(), Markup::Plain);
        assert!("markdown".parse::<Markup>().is_err());
    }

    #[test]
    fn test_keyboard_rows_keep_order() {
        let keyboard = Keyboard::new([vec!["a", "b"], vec!["c"]]);
        assert_eq!(keyboard.rows, vec![vec!["a", "b"], vec!["c"]]);
    }

    #[test]
    fn test_outgoing_reply_with_keyboard() {
        let reply = OutgoingReply::new("hi", Markup::Plain)
            .with_keyboard(Keyboard::new([vec!["x"]]));
        assert_eq!(reply.text, "hi");
        assert_eq!(reply.keyboard.unwrap().rows, vec![vec!["x".to_string()]]);
    }
}
