//! Translation completeness validation.
//!
//! Checks a loaded [`Locale`] for gaps that only show up at render time:
//! keys translated in some languages but not others, plural forms defined
//! unevenly, and templates whose printf verbs differ between languages
//! (e.g. `"%d items"` vs `"%s lietas"`).

use regex::Regex;
use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::OnceLock;
use tracing::warn;

use crate::i18n::{LanguageTable, Locale};

/// Validation report containing errors and warnings about a locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Issues that render wrong text (mismatched verbs)
    pub errors: Vec<String>,

    /// Issues served by fallback or an empty plural
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for locale completeness and placeholder consistency.
pub struct TranslationValidator;

static VERB_REGEX: OnceLock<Regex> = OnceLock::new();

impl TranslationValidator {
    /// Validate every key of every registered language.
    ///
    /// This function checks that:
    /// - every key exists in every language
    /// - plural forms are defined in all languages of a key or in none
    /// - singular and plural templates use the same verbs in the same
    ///   order across languages
    ///
    /// Keys are visited in sorted order, so the report is deterministic.
    pub fn validate(locale: &Locale) -> ValidationReport {
        let mut report = ValidationReport::new();
        let tables: Vec<&LanguageTable> = locale.tables().collect();

        let keys: BTreeSet<&str> = tables.iter().copied().flat_map(LanguageTable::keys).collect();

        for key in keys {
            let present: Vec<&LanguageTable> = tables
                .iter()
                .copied()
                .filter(|table| table.contains_key(key))
                .collect();

            for table in tables.iter().filter(|table| !table.contains_key(key)) {
                report.warnings.push(format!(
                    "Missing translation: '{}' is not defined for '{}'",
                    key,
                    table.keyword()
                ));
            }

            Self::check_plurals(key, &present, &mut report);
            Self::check_verbs(key, &present, LanguageTable::value, "singular", &mut report);
            Self::check_verbs(key, &present, LanguageTable::value_plural, "plural", &mut report);
        }

        if !report.is_clean() {
            warn!(
                errors = report.errors.len(),
                warnings = report.warnings.len(),
                "Locale validation found issues"
            );
        }

        report
    }

    fn check_plurals(key: &str, present: &[&LanguageTable], report: &mut ValidationReport) {
        let (with_plural, without_plural): (Vec<&LanguageTable>, Vec<&LanguageTable>) = present
            .iter()
            .copied()
            .partition(|table| table.value_plural(key).is_some_and(|p| !p.is_empty()));

        if !with_plural.is_empty() && !without_plural.is_empty() {
            report.warnings.push(format!(
                "Plural mismatch: '{}' has a plural form in {:?} but not in {:?}",
                key,
                keywords(&with_plural),
                keywords(&without_plural)
            ));
        }
    }

    fn check_verbs<'a>(
        key: &str,
        present: &[&'a LanguageTable],
        get: impl Fn(&'a LanguageTable, &str) -> Option<&'a str>,
        form: &str,
        report: &mut ValidationReport,
    ) {
        // Empty templates are covered by the plural check.
        let mut templates = present
            .iter()
            .filter_map(|&table| get(table, key).map(|text| (table.keyword(), text)))
            .filter(|(_, text)| !text.is_empty());

        let Some((reference_language, reference)) = templates.next() else {
            return;
        };
        let expected = Self::extract_verbs(reference);

        for (language, text) in templates {
            let verbs = Self::extract_verbs(text);
            if verbs != expected {
                report.errors.push(format!(
                    "Verb mismatch in {} '{}': '{}' has {:?}, '{}' has {:?}",
                    form, key, reference_language, expected, language, verbs
                ));
            }
        }
    }

    /// Extract printf directives (`%d`, `%-5s`, `%.2f`, ...) in order; `%%` is skipped.
    fn extract_verbs(text: &str) -> Vec<String> {
        let regex = VERB_REGEX.get_or_init(|| Regex::new(r"%(?:%|[-+ 0]*\d*(?:\.\d*)?[a-zA-Z])").unwrap());

        regex
            .find_iter(text)
            .map(|m| m.as_str())
            .filter(|verb| *verb != "%%")
            .map(str::to_string)
            .collect()
    }
}

fn keywords<'a>(tables: &[&'a LanguageTable]) -> Vec<&'a str> {
    tables.iter().map(|table| table.keyword()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locale(entries: &[(&str, &str, &str, &str)]) -> Locale {
        let mut locale = Locale::new(false, &["lv", "en"]).expect("valid languages");
        for (language, key, value, plural) in entries {
            locale.set_value(language, key, value, plural).unwrap();
        }
        locale
    }

    // ==================== Verb Extraction Tests ====================

    #[test]
    fn test_extract_verbs_in_order() {
        let verbs = TranslationValidator::extract_verbs("%d items in %s");
        assert_eq!(verbs, vec!["%d", "%s"]);
    }

    #[test]
    fn test_extract_verbs_with_precision() {
        let verbs = TranslationValidator::extract_verbs("Total: %.2f EUR");
        assert_eq!(verbs, vec!["%.2f"]);
    }

    #[test]
    fn test_extract_verbs_skips_percent_literal() {
        let verbs = TranslationValidator::extract_verbs("100%% done, %d left");
        assert_eq!(verbs, vec!["%d"]);
    }

    #[test]
    fn test_extract_verbs_with_flags_and_width() {
        let verbs = TranslationValidator::extract_verbs("%02d:%02d %-10s|%+5.1f");
        assert_eq!(verbs, vec!["%02d", "%02d", "%-10s", "%+5.1f"]);
    }

    #[test]
    fn test_extract_verbs_none() {
        assert!(TranslationValidator::extract_verbs("No verbs here").is_empty());
    }

    // ==================== Validation Tests ====================

    #[test]
    fn test_validate_complete_locale() {
        let locale = locale(&[
            ("lv", "items", "%d lieta", "%d lietas"),
            ("en", "items", "%d item", "%d items"),
            ("lv", "title", "Sākums", ""),
            ("en", "title", "Home", ""),
        ]);

        let report = TranslationValidator::validate(&locale);
        assert!(report.is_clean(), "{report:?}");
    }

    #[test]
    fn test_validate_missing_key() {
        let locale = locale(&[("en", "title", "Home", "")]);

        let report = TranslationValidator::validate(&locale);
        assert!(!report.has_errors());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("Missing translation"));
        assert!(report.warnings[0].contains("'lv'"));
    }

    #[test]
    fn test_validate_plural_mismatch() {
        let locale = locale(&[
            ("lv", "items", "%d lieta", ""),
            ("en", "items", "%d item", "%d items"),
        ]);

        let report = TranslationValidator::validate(&locale);
        assert!(report.has_warnings());
        assert!(report.warnings[0].contains("Plural mismatch"));
        assert!(!report.has_errors());
    }

    #[test]
    fn test_validate_verb_mismatch() {
        let locale = locale(&[
            ("lv", "greeting", "Sveiki, %s! Tev ir %d ziņas", ""),
            ("en", "greeting", "Hello, %s!", ""),
        ]);

        let report = TranslationValidator::validate(&locale);
        assert!(report.has_errors());
        assert!(report.errors[0].contains("Verb mismatch in singular 'greeting'"));
    }

    #[test]
    fn test_validate_verb_order_matters() {
        let locale = locale(&[
            ("lv", "summary", "%s: %d", ""),
            ("en", "summary", "%d: %s", ""),
        ]);

        let report = TranslationValidator::validate(&locale);
        assert_eq!(report.errors.len(), 1);
    }

    #[test]
    fn test_validate_plural_verb_mismatch() {
        let locale = locale(&[
            ("lv", "items", "%d lieta", "lietas"),
            ("en", "items", "%d item", "%d items"),
        ]);

        let report = TranslationValidator::validate(&locale);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("plural 'items'"));
    }

    #[test]
    fn test_validate_is_deterministic() {
        let locale = locale(&[
            ("en", "b", "B", ""),
            ("en", "a", "A", ""),
            ("en", "c", "C", ""),
        ]);

        let report = TranslationValidator::validate(&locale);
        assert_eq!(report.warnings.len(), 3);
        assert!(report.warnings[0].contains("'a'"));
        assert!(report.warnings[1].contains("'b'"));
        assert!(report.warnings[2].contains("'c'"));
        assert_eq!(report, TranslationValidator::validate(&locale));
    }

    #[test]
    fn test_validate_empty_locale() {
        let locale = Locale::default();
        assert!(TranslationValidator::validate(&locale).is_clean());
    }

    // ==================== Report Tests ====================

    #[test]
    fn test_validation_report_new() {
        let report = ValidationReport::new();
        assert!(report.is_clean());
        assert!(!report.has_errors());
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_validation_report_with_warning() {
        let mut report = ValidationReport::new();
        report.warnings.push("Test warning".to_string());

        assert!(!report.is_clean());
        assert!(!report.has_errors());
        assert!(report.has_warnings());
    }

    #[test]
    fn test_validation_report_with_error() {
        let mut report = ValidationReport::new();
        report.errors.push("Test error".to_string());

        assert!(!report.is_clean());
        assert!(report.has_errors());
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_validation_report_serializes() {
        let mut report = ValidationReport::new();
        report.errors.push("bad".to_string());

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["errors"][0], "bad");
        assert!(json["warnings"].as_array().unwrap().is_empty());
    }
}
