//! Handler implementations: logging, slash commands, and free-text topic lookup.

mod command_handler;
mod logging_handler;
mod topic_handler;

pub use command_handler::{CommandHandler, GREETING, UNKNOWN_COMMAND};
pub use logging_handler::LoggingHandler;
pub use topic_handler::TopicHandler;
