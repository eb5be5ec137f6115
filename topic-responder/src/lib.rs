//! # topic-responder
//!
//! Static knowledge base of grade-3 Russian grammar topics and the responder that maps free-form
//! user text to a formatted explanation.
//!
//! Text is normalized ([`NormalizePolicy`]), checked against the closed set of [`Category`]
//! shortcuts, then scanned against topic keys in declared order; the first substring match wins.
//! Anything else gets [`NOT_FOUND_MESSAGE`].

mod catalog;
pub mod category;
pub mod format;
pub mod normalize;
pub mod responder;
pub mod topic;

pub use category::Category;
pub use format::{escape_html, format_listing, format_topic, NOT_FOUND_MESSAGE};
pub use normalize::NormalizePolicy;
pub use responder::{Resolution, Responder};
pub use topic::{KnowledgeBase, Topic};
