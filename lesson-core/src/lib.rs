//! # lesson-core
//!
//! Core types and traits for the Russian lesson bot: [`Bot`], [`Handler`], message and user types,
//! outgoing replies with [`Markup`] and [`Keyboard`], error types, and tracing initialization.
//! Transport-agnostic; used by handler-chain, topic-responder, lesson-telegram and lesson-bot.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{HandlerError, LessonError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, Handler, HandlerResponse, Keyboard, Markup, Message, OutgoingReply,
    ToCoreMessage, ToCoreUser, User,
};
