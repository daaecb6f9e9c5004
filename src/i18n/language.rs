//! Language table: translations of a single language.
//!
//! Each table maps a text key to its singular and plural text. Tables are
//! owned by a [`Locale`](crate::i18n::Locale) and only mutated through it.

use std::collections::HashMap;

use tracing::debug;

/// Singular and plural text stored for one key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct TextPair {
    value: String,
    plural: String,
}

/// Translations of one language, identified by its keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageTable {
    keyword: String,
    entries: HashMap<String, TextPair>,
}

impl LanguageTable {
    /// Create an empty table for a language keyword ("en", "lv", ...).
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            entries: HashMap::new(),
        }
    }

    /// Get the language keyword.
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Check if this table answers to `keyword` (case-insensitive).
    pub fn matches(&self, keyword: &str) -> bool {
        self.keyword.eq_ignore_ascii_case(keyword)
    }

    /// Store singular and plural text for a key.
    ///
    /// Empty keys are never stored: the call is a no-op and existing
    /// entries stay untouched.
    pub fn set_value(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
        plural: impl Into<String>,
    ) {
        let key = key.into();
        if key.is_empty() {
            debug!(language = %self.keyword, "Ignoring translation with empty key");
            return;
        }

        self.entries.insert(
            key,
            TextPair {
                value: value.into(),
                plural: plural.into(),
            },
        );
    }

    /// Get the singular text for a key.
    ///
    /// # Returns
    /// * `Some(text)` if the key exists (the text itself may be empty)
    /// * `None` if the key was never set
    pub fn value(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|pair| pair.value.as_str())
    }

    /// Get the plural text for a key.
    ///
    /// A key stored without a plural form yields `Some("")`.
    pub fn value_plural(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|pair| pair.plural.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate over all keys in unspecified order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Construction Tests ====================

    #[test]
    fn test_new_table_is_empty() {
        let table = LanguageTable::new("lv");
        assert_eq!(table.keyword(), "lv");
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let table = LanguageTable::new("en-US");
        assert!(table.matches("en-us"));
        assert!(table.matches("EN-US"));
        assert!(!table.matches("en"));
    }

    // ==================== set_value Tests ====================

    #[test]
    fn test_set_and_get_value() {
        let mut table = LanguageTable::new("en");
        table.set_value("key0", "item", "items");

        assert_eq!(table.value("key0"), Some("item"));
        assert_eq!(table.value_plural("key0"), Some("items"));
        assert!(table.contains_key("key0"));
    }

    #[test]
    fn test_set_value_overwrites() {
        let mut table = LanguageTable::new("en");
        table.set_value("key0", "old", "olds");
        table.set_value("key0", "new", "");

        assert_eq!(table.value("key0"), Some("new"));
        assert_eq!(table.value_plural("key0"), Some(""));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_empty_key_is_rejected() {
        let mut table = LanguageTable::new("en");
        table.set_value("key0", "kept", "");
        table.set_value("", "dropped", "dropped");

        assert_eq!(table.len(), 1);
        assert_eq!(table.value(""), None);
        assert_eq!(table.value("key0"), Some("kept"));
    }

    // ==================== Lookup Tests ====================

    #[test]
    fn test_missing_key_is_none() {
        let table = LanguageTable::new("en");
        assert_eq!(table.value("missing"), None);
        assert_eq!(table.value_plural("missing"), None);
        assert!(!table.contains_key("missing"));
    }

    #[test]
    fn test_empty_value_is_present() {
        let mut table = LanguageTable::new("en");
        table.set_value("blank", "", "");

        assert_eq!(table.value("blank"), Some(""));
        assert!(table.contains_key("blank"));
    }

    #[test]
    fn test_keys() {
        let mut table = LanguageTable::new("en");
        table.set_value("a", "1", "");
        table.set_value("b", "2", "");

        let mut keys: Vec<_> = table.keys().collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["a", "b"]);
    }
}
