//! Category shortcuts: a closed set of coarse labels checked before topic lookup.

/// A category the user can ask for by name or via the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Spelling,
    PartsOfSpeech,
    Syntax,
    Verbs,
    AllTopics,
    Help,
}

impl Category {
    /// Every category, in keyboard order.
    pub const ALL: [Category; 6] = [
        Category::Spelling,
        Category::PartsOfSpeech,
        Category::Syntax,
        Category::Verbs,
        Category::AllTopics,
        Category::Help,
    ];

    /// Keyboard button caption. Its lowercase form is also a label.
    pub fn caption(&self) -> &'static str {
        match self {
            Category::Spelling => "📝 Орфография",
            Category::PartsOfSpeech => "🔤 Части речи",
            Category::Syntax => "📖 Синтаксис",
            Category::Verbs => "🏃 Глаголы",
            Category::AllTopics => "📚 Все темы",
            Category::Help => "❓ Помощь",
        }
    }

    /// Normalized labels (besides the caption) that select this category.
    pub fn labels(&self) -> &'static [&'static str] {
        match self {
            Category::Spelling => &["орфография", "орфограммы", "spelling"],
            Category::PartsOfSpeech => &["части речи", "parts of speech"],
            Category::Syntax => &["синтаксис", "syntax"],
            Category::Verbs => &["глаголы", "verbs"],
            Category::AllTopics => &["все темы", "список тем", "темы", "all topics"],
            Category::Help => &["помощь", "справка", "help"],
        }
    }

    /// Category whose label equals the normalized text exactly.
    pub fn from_normalized(normalized: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|category| {
            category.labels().contains(&normalized) || category.caption().to_lowercase() == normalized
        })
    }

    /// Heading shown on top of the category summary.
    pub fn heading(&self) -> &'static str {
        match self {
            Category::AllTopics => "📚 Доступные темы",
            other => other.caption(),
        }
    }

    /// Titles of the topics this category groups, as they appear in the built-in course.
    /// Empty for [`Category::AllTopics`] (listed from the knowledge base) and [`Category::Help`].
    pub fn topic_titles(&self) -> &'static [&'static str] {
        match self {
            Category::Spelling => &[
                "✏️ Жи-ши",
                "✏️ Ча-ща",
                "✏️ Чу-щу",
                "✏️ Сочетания ЧК, ЧН, ЩН",
                "✏️ Безударные гласные в корне",
                "✏️ Парные согласные в корне",
                "✏️ Непроизносимые согласные",
                "✏️ Разделительный мягкий знак",
                "✏️ Разделительный твёрдый знак",
            ],
            Category::PartsOfSpeech => &[
                "🔤 Имя существительное",
                "🔤 Имя прилагательное",
                "🔤 Глагол",
                "🔤 Местоимение",
            ],
            Category::Syntax => &[
                "📖 Предложение и словосочетание",
                "📖 Виды предложений по цели высказывания",
                "📖 Главные и второстепенные члены предложения",
            ],
            Category::Verbs => &["🔤 Глагол", "🏃 Время глагола", "🏃 Число глагола"],
            Category::AllTopics | Category::Help => &[],
        }
    }

    /// Keyboard rows: two captions per row.
    pub fn keyboard_rows() -> Vec<Vec<&'static str>> {
        Category::ALL
            .chunks(2)
            .map(|row| row.iter().map(Category::caption).collect())
            .collect()
    }
}

/// Lines of the help summary.
pub(crate) const HELP_LINES: &[&str] = &[
    "Напиши название темы, например: «жи ши», «глагол», «члены предложения».",
    "Или выбери раздел на клавиатуре внизу.",
    "/start — начать сначала",
    "/rules — список всех тем",
    "/help — эта подсказка",
];

/// Footer under subject category summaries.
pub(crate) const CATEGORY_FOOTER: &str = "Напиши название темы, чтобы узнать правило.";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topic::KnowledgeBase;

    #[test]
    fn test_from_normalized_labels() {
        assert_eq!(Category::from_normalized("орфография"), Some(Category::Spelling));
        assert_eq!(Category::from_normalized("помощь"), Some(Category::Help));
        assert_eq!(Category::from_normalized("help"), Some(Category::Help));
        assert_eq!(Category::from_normalized("части речи"), Some(Category::PartsOfSpeech));
        assert_eq!(Category::from_normalized("все темы"), Some(Category::AllTopics));
    }

    #[test]
    fn test_from_normalized_caption() {
        assert_eq!(Category::from_normalized("📝 орфография"), Some(Category::Spelling));
        assert_eq!(Category::from_normalized("❓ помощь"), Some(Category::Help));
    }

    #[test]
    fn test_from_normalized_requires_exact_label() {
        assert_eq!(Category::from_normalized("орфография 3 класс"), None);
        assert_eq!(Category::from_normalized("глагол"), None);
        assert_eq!(Category::from_normalized(""), None);
    }

    #[test]
    fn test_labels_are_unique_across_categories() {
        for a in Category::ALL {
            for b in Category::ALL {
                if a != b {
                    for label in a.labels() {
                        assert!(!b.labels().contains(label), "{} is shared", label);
                    }
                }
            }
        }
    }

    #[test]
    fn test_topic_titles_exist_in_grade_three() {
        let kb = KnowledgeBase::grade_three();
        let titles: Vec<&str> = kb.titles().collect();
        for category in Category::ALL {
            for title in category.topic_titles() {
                assert!(titles.contains(title), "{:?} lists unknown {}", category, title);
            }
        }
    }

    #[test]
    fn test_keyboard_rows_cover_all_categories() {
        let rows = Category::keyboard_rows();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|row| row.len() == 2));
        assert_eq!(rows[0], vec!["📝 Орфография", "🔤 Части речи"]);
    }
}
