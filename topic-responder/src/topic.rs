//! Topic record and the ordered, read-only knowledge base.

use std::collections::HashSet;

use crate::normalize::fold_case;

/// One grammar topic: matching key, display title, rule text and examples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    /// Case-folded canonical identifier, unique in a knowledge base.
    pub key: String,
    /// Display heading, may start with an emoji marker.
    pub title: String,
    /// Rule text; may span several lines.
    pub rule: String,
    /// Ordered examples, at least one.
    pub examples: Vec<String>,
}

impl Topic {
    pub fn new<I, S>(key: &str, title: &str, rule: &str, examples: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            key: fold_case(key),
            title: title.to_string(),
            rule: rule.to_string(),
            examples: examples.into_iter().map(Into::into).collect(),
        }
    }

    /// Bidirectional containment between normalized input and the key.
    fn matches(&self, normalized: &str) -> bool {
        normalized.contains(self.key.as_str()) || self.key.contains(normalized)
    }
}

/// Ordered list of topics. Declaration order is the match tie-break, so this is a `Vec`, not a map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeBase {
    topics: Vec<Topic>,
}

impl KnowledgeBase {
    /// Builds a knowledge base from topics in the given order.
    ///
    /// Keys must be unique; a duplicate is an authoring defect and trips a debug assertion.
    pub fn new(topics: Vec<Topic>) -> Self {
        debug_assert!(
            duplicate_key(&topics).is_none(),
            "duplicate topic key: {:?}",
            duplicate_key(&topics)
        );
        Self { topics }
    }

    /// The built-in grade-3 Russian course.
    pub fn grade_three() -> Self {
        Self::new(crate::catalog::grade_three_topics())
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Titles in declared order.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.topics.iter().map(|t| t.title.as_str())
    }

    /// First topic (in declared order) whose key contains `normalized` or is contained in it.
    /// Empty input matches nothing.
    pub fn find(&self, normalized: &str) -> Option<&Topic> {
        if normalized.is_empty() {
            return None;
        }
        self.topics.iter().find(|t| t.matches(normalized))
    }
}

fn duplicate_key(topics: &[Topic]) -> Option<&str> {
    let mut seen = HashSet::new();
    topics
        .iter()
        .map(|t| t.key.as_str())
        .find(|key| !seen.insert(*key))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kb(keys: &[&str]) -> KnowledgeBase {
        KnowledgeBase::new(
            keys.iter()
                .map(|k| Topic::new(k, &k.to_uppercase(), "rule", ["example"]))
                .collect(),
        )
    }

    #[test]
    fn test_find_input_contains_key() {
        let kb = kb(&["глагол"]);
        assert_eq!(kb.find("что такое глагол").unwrap().key, "глагол");
    }

    #[test]
    fn test_find_key_contains_input() {
        let kb = kb(&["безударные гласные"]);
        assert_eq!(kb.find("гласные").unwrap().key, "безударные гласные");
    }

    #[test]
    fn test_find_first_declared_wins() {
        let forward = kb(&["вопрос", "вопросительный"]);
        assert_eq!(forward.find("вопрос").unwrap().key, "вопрос");

        let reversed = kb(&["вопросительный", "вопрос"]);
        assert_eq!(reversed.find("вопрос").unwrap().key, "вопросительный");
    }

    #[test]
    fn test_find_empty_input_matches_nothing() {
        let kb = kb(&["глагол"]);
        assert!(kb.find("").is_none());
    }

    #[test]
    fn test_topic_key_is_lowercased() {
        let topic = Topic::new("Жи Ши", "Жи-ши", "rule", ["a"]);
        assert_eq!(topic.key, "жи ши");

        let topic = Topic::new("Твёрдый знак", "Твёрдый знак", "rule", ["a"]);
        assert_eq!(topic.key, "твердый знак");
    }

    #[test]
    fn test_duplicate_key_detected() {
        let topics = vec![
            Topic::new("a", "A", "r", ["e"]),
            Topic::new("b", "B", "r", ["e"]),
            Topic::new("a", "A2", "r", ["e"]),
        ];
        assert_eq!(duplicate_key(&topics), Some("a"));
    }

    #[test]
    fn test_grade_three_keys_unique_and_examples_present() {
        let kb = KnowledgeBase::grade_three();
        assert!(duplicate_key(kb.topics()).is_none());
        assert!(!kb.is_empty());
        for topic in kb.topics() {
            assert!(!topic.examples.is_empty(), "{} has no examples", topic.key);
            assert_eq!(topic.key, fold_case(&topic.key));
        }
    }

    #[test]
    fn test_grade_three_no_key_contains_another() {
        let kb = KnowledgeBase::grade_three();
        for a in kb.topics() {
            for b in kb.topics() {
                if a.key != b.key {
                    assert!(!a.key.contains(b.key.as_str()), "{:?} contains {:?}", a.key, b.key);
                }
            }
        }
    }

    #[test]
    fn test_grade_three_every_key_resolves_to_itself() {
        let kb = KnowledgeBase::grade_three();
        for topic in kb.topics() {
            assert_eq!(kb.find(&topic.key).unwrap().key, topic.key);
        }
    }
}
