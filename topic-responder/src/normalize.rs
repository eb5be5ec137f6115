//! Input normalization: case folding (including ё → е), trimming, whitespace collapsing, optional
//! punctuation removal.

use regex::Regex;
use std::sync::LazyLock;

/// Anything that is neither a word character nor whitespace: punctuation, symbols, emoji.
/// Variation selectors and the zero-width joiner count as `\w`, so emoji like "✏️" list them explicitly.
static NON_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:[^\w\s]|[\x{FE0E}\x{FE0F}\x{200D}])+").expect("static regex is valid")
});

/// Lowercases and folds "ё" into "е". Applied to topic keys and user input alike.
pub fn fold_case(text: &str) -> String {
    text.to_lowercase().replace('ё', "е")
}

/// How user text is normalized before matching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizePolicy {
    /// Replace punctuation and emoji with spaces before matching.
    pub strip_punctuation: bool,
}

impl NormalizePolicy {
    pub fn stripping() -> Self {
        Self {
            strip_punctuation: true,
        }
    }

    /// Folds case, optionally strips punctuation, trims and collapses inner whitespace to single spaces.
    pub fn normalize(&self, text: &str) -> String {
        let lowered = fold_case(text);
        let cleaned = if self.strip_punctuation {
            NON_WORD.replace_all(&lowered, " ")
        } else {
            lowered.as_str().into()
        };
        cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lowercases_and_trims() {
        let policy = NormalizePolicy::default();
        assert_eq!(policy.normalize("  Жи  Ши \n"), "жи ши");
    }

    #[test]
    fn test_default_keeps_punctuation() {
        let policy = NormalizePolicy::default();
        assert_eq!(policy.normalize("Орфография?"), "орфография?");
        assert_eq!(policy.normalize("📝 Орфография"), "📝 орфография");
    }

    #[test]
    fn test_stripping_removes_punctuation_and_emoji() {
        let policy = NormalizePolicy::stripping();
        assert_eq!(policy.normalize("Орфография?!"), "орфография");
        assert_eq!(policy.normalize("📝 Орфография"), "орфография");
        assert_eq!(policy.normalize("жи-ши"), "жи ши");
    }

    #[test]
    fn test_yo_folds_to_ye() {
        let policy = NormalizePolicy::default();
        assert_eq!(policy.normalize("Твёрдый ЗНАК"), "твердый знак");
        assert_eq!(fold_case("Ёлка"), "елка");
    }

    #[test]
    fn test_stripping_removes_emoji_variation_selector() {
        let policy = NormalizePolicy::stripping();
        assert_eq!(policy.normalize("✏️ Жи-ши"), "жи ши");
        assert_eq!(policy.normalize("🏃\u{200D}♂️ бег"), "бег");
    }

    #[test]
    fn test_stripping_only_punctuation_yields_empty() {
        let policy = NormalizePolicy::stripping();
        assert_eq!(policy.normalize("?!..."), "");
    }
}
