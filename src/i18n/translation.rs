use serde::Serialize;

/// One translation unit extracted from a translation file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct TranslationEntry {
    /// Text key the translation is looked up by
    pub key: String,

    /// Language keyword ("lv", "en", ...)
    pub language: String,

    /// Singular (non-plural) text
    pub value: String,

    /// Plural text, empty when no plural form is defined
    pub plural: String,
}

impl TranslationEntry {
    pub fn new(
        key: impl Into<String>,
        language: impl Into<String>,
        value: impl Into<String>,
        plural: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            language: language.into(),
            value: value.into(),
            plural: plural.into(),
        }
    }

    /// Check if a plural form was defined
    pub fn has_plural(&self) -> bool {
        !self.plural.is_empty()
    }
}
