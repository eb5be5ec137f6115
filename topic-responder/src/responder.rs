//! Topic responder: normalized text → category shortcut, first matching topic, or not-found.

use std::sync::Arc;

use lesson_core::Markup;
use tracing::debug;

use crate::category::{Category, CATEGORY_FOOTER, HELP_LINES};
use crate::format::{format_listing, format_topic, NOT_FOUND_MESSAGE};
use crate::normalize::NormalizePolicy;
use crate::topic::{KnowledgeBase, Topic};

/// What a piece of user text resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    Category(Category),
    Topic(&'a Topic),
    NotFound,
}

impl Resolution<'_> {
    /// Short label for logs: category name, topic key, or `none`.
    pub fn label(&self) -> String {
        match self {
            Resolution::Category(category) => format!("category:{:?}", category),
            Resolution::Topic(topic) => format!("topic:{}", topic.key),
            Resolution::NotFound => "none".to_string(),
        }
    }
}

/// Stateless responder over an injected, read-only knowledge base.
#[derive(Debug, Clone)]
pub struct Responder {
    knowledge_base: Arc<KnowledgeBase>,
    policy: NormalizePolicy,
    markup: Markup,
}

impl Responder {
    /// Responder with default normalization (no punctuation stripping) and HTML markup.
    pub fn new(knowledge_base: Arc<KnowledgeBase>) -> Self {
        Self {
            knowledge_base,
            policy: NormalizePolicy::default(),
            markup: Markup::default(),
        }
    }

    pub fn with_policy(mut self, policy: NormalizePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_markup(mut self, markup: Markup) -> Self {
        self.markup = markup;
        self
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.knowledge_base
    }

    pub fn markup(&self) -> Markup {
        self.markup
    }

    /// Category labels first, then topics in declared order.
    pub fn resolve(&self, user_text: &str) -> Resolution<'_> {
        let normalized = self.policy.normalize(user_text);
        let resolution = if let Some(category) = Category::from_normalized(&normalized) {
            Resolution::Category(category)
        } else if let Some(topic) = self.knowledge_base.find(&normalized) {
            Resolution::Topic(topic)
        } else {
            Resolution::NotFound
        };
        debug!(normalized = %normalized, matched = %resolution.label(), "resolved user text");
        resolution
    }

    /// Renders a resolution in this responder's markup mode.
    pub fn render(&self, resolution: &Resolution<'_>) -> String {
        match resolution {
            Resolution::Category(category) => self.category_summary(*category),
            Resolution::Topic(topic) => format_topic(topic, self.markup),
            Resolution::NotFound => NOT_FOUND_MESSAGE.to_string(),
        }
    }

    /// Formatted explanation, category summary, or [`NOT_FOUND_MESSAGE`]. Never empty.
    pub fn respond(&self, user_text: &str) -> String {
        let resolution = self.resolve(user_text);
        self.render(&resolution)
    }

    /// Summary text for a category.
    pub fn category_summary(&self, category: Category) -> String {
        match category {
            Category::AllTopics => self.topic_list(),
            Category::Help => format_listing(
                category.heading(),
                HELP_LINES.iter().copied(),
                None,
                self.markup,
            ),
            subject => format_listing(
                subject.heading(),
                subject.topic_titles().iter().copied(),
                Some(CATEGORY_FOOTER),
                self.markup,
            ),
        }
    }

    /// Every topic title of the knowledge base, in declared order.
    pub fn topic_list(&self) -> String {
        format_listing(
            Category::AllTopics.heading(),
            self.knowledge_base.titles(),
            Some(CATEGORY_FOOTER),
            self.markup,
        )
    }

    /// Help text (same as the `Help` category).
    pub fn help(&self) -> String {
        self.category_summary(Category::Help)
    }
}
