//! Reply formatting: topic explanations and listings, in HTML or plain text.

use lesson_core::Markup;

use crate::topic::Topic;

/// Reply when neither a category nor a topic matches. Contains no markup, so it is the same in every mode.
pub const NOT_FOUND_MESSAGE: &str =
    "🤔 Правило не найдено. Используй /rules, чтобы увидеть все темы.";

const RULE_LABEL: &str = "Правило:";
const EXAMPLES_LABEL: &str = "Примеры:";
const BULLET: &str = "•";

/// Escapes the three characters Telegram's HTML mode requires.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
    out
}

fn bold(text: &str, markup: Markup) -> String {
    match markup {
        Markup::Html => format!("<b>{}</b>", escape_html(text)),
        Markup::Plain => text.to_string(),
    }
}

fn italic(text: &str, markup: Markup) -> String {
    match markup {
        Markup::Html => format!("<i>{}</i>", escape_html(text)),
        Markup::Plain => text.to_string(),
    }
}

fn body(text: &str, markup: Markup) -> String {
    match markup {
        Markup::Html => escape_html(text),
        Markup::Plain => text.to_string(),
    }
}

/// Title, labeled rule, labeled bulleted examples, in that order.
pub fn format_topic(topic: &Topic, markup: Markup) -> String {
    let mut out = String::new();
    out.push_str(&bold(&topic.title, markup));
    out.push_str("\n\n");
    out.push_str(&bold(RULE_LABEL, markup));
    out.push('\n');
    out.push_str(&body(&topic.rule, markup));
    out.push_str("\n\n");
    out.push_str(&bold(EXAMPLES_LABEL, markup));
    for example in &topic.examples {
        out.push('\n');
        out.push_str(BULLET);
        out.push(' ');
        out.push_str(&italic(example, markup));
    }
    out
}

/// Bold heading, one bulleted line per item, optional footer after a blank line.
pub fn format_listing<'a, I>(heading: &str, items: I, footer: Option<&str>, markup: Markup) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = bold(heading, markup);
    out.push('\n');
    for item in items {
        out.push('\n');
        out.push_str(BULLET);
        out.push(' ');
        out.push_str(&body(item, markup));
    }
    if let Some(footer) = footer {
        out.push_str("\n\n");
        out.push_str(&body(footer, markup));
    }
    out
}
