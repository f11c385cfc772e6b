//! BSL Keywords and Language Constructs
//!
//! Двуязычные таблицы слов для трёх диалектов. Все проверки
//! регистронезависимы: таблицы хранят слова в `to_lowercase()` форме.

use std::collections::HashSet;

pub mod bsl;
pub mod query;

pub use bsl::{classify_word, WordClass};

/// Case-insensitive set of words
#[derive(Debug, Clone, Default)]
pub struct WordSet {
    words: HashSet<String>,
}

impl WordSet {
    pub fn new(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| casefold(w)).collect(),
        }
    }

    /// Removes every word of `other`, used to keep overlapping tables disjoint
    pub fn without(mut self, other: &WordSet) -> Self {
        self.words.retain(|w| !other.words.contains(w));
        self
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&casefold(word))
    }

    /// Lookup for a word already passed through [`casefold`]
    pub fn contains_folded(&self, folded: &str) -> bool {
        self.words.contains(folded)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

pub fn casefold(word: &str) -> String {
    word.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_lookup() {
        let set = WordSet::new(&["Истина", "True"]);
        assert!(set.contains("ИСТИНА"));
        assert!(set.contains("истина"));
        assert!(set.contains("tRuE"));
        assert!(!set.contains("Ложь"));
    }

    #[test]
    fn test_without() {
        let all = WordSet::new(&["Строка", "СтрДлина", "Число"]);
        let call_only = WordSet::new(&["Строка", "Число"]);
        let rest = all.without(&call_only);
        assert_eq!(rest.len(), 1);
        assert!(rest.contains("стрдлина"));
    }

    #[test]
    fn test_tables_hold_only_identifiers() {
        let ident = regex::Regex::new(&format!("^(?:{})$", crate::lexer::modes::IDENT)).unwrap();
        let tables: Vec<(&str, &WordSet)> = vec![
            ("EXCEPTIONS", &*bsl::EXCEPTIONS),
            ("CONSTRUCTORS", &*bsl::CONSTRUCTORS),
            ("CALL_ONLY", &*bsl::CALL_ONLY),
            ("DECLARATIONS", &*bsl::DECLARATIONS),
            ("CONSTANTS", &*bsl::CONSTANTS),
            ("KEYWORDS", &*bsl::KEYWORDS),
            ("BUILTINS", &*bsl::BUILTINS),
            ("CLASSES", &*bsl::CLASSES),
            ("METADATA_ROOTS", &*bsl::METADATA_ROOTS),
            ("CONSTRUCTIBLE_TYPES", &*bsl::CONSTRUCTIBLE_TYPES),
            ("PREPROC_SYMBOLS", &*bsl::PREPROC_SYMBOLS),
            ("PREPROC_WORDS", &*bsl::PREPROC_WORDS),
            ("EXTENSION_HOOKS", &*bsl::EXTENSION_HOOKS),
            ("PARAM_MODIFIERS", &*bsl::PARAM_MODIFIERS),
            ("LOCALIZATION_CALLS", &*bsl::LOCALIZATION_CALLS),
            ("SDBL.functions", &query::SDBL.functions),
            ("SDBL.constants", &query::SDBL.constants),
            ("SDBL.declarations", &query::SDBL.declarations),
            ("SDBL.classes", &query::SDBL.classes),
            ("CONSTRAINT.functions", &query::CONSTRAINT.functions),
            ("CONSTRAINT.constants", &query::CONSTRAINT.constants),
            ("CONSTRAINT.declarations", &query::CONSTRAINT.declarations),
            ("CONSTRAINT.classes", &query::CONSTRAINT.classes),
            ("QUERY_INTRODUCERS", &*query::QUERY_INTRODUCERS),
            ("CONSTRAINT_INTRODUCERS", &*query::CONSTRAINT_INTRODUCERS),
        ];
        for (name, table) in tables {
            assert!(!table.is_empty(), "{name} is empty");
            for word in &table.words {
                assert!(ident.is_match(word), "{name} holds {word:?}");
            }
        }
        for word in query::ACCESS_PREDICATES {
            assert!(ident.is_match(word), "ACCESS_PREDICATES holds {word:?}");
        }
    }
}
