use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use tracing::info;

use crate::i18n::Locale;

#[derive(Debug, Clone)]
pub struct Config {
    // Languages
    pub languages: Vec<String>,
    pub default_language: String,
    pub strict_usage: bool,

    // Translation files
    pub translations_dir: PathBuf,
    pub translations_pattern: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let languages: Vec<String> = std::env::var("LOCALE_LANGUAGES")
            .context("LOCALE_LANGUAGES not set")?
            .split(',')
            .map(|language| language.trim().to_string())
            .filter(|language| !language.is_empty())
            .collect();

        let Some(first_language) = languages.first().cloned() else {
            bail!("LOCALE_LANGUAGES must list at least one language");
        };

        Ok(Self {
            // Languages
            default_language: std::env::var("LOCALE_DEFAULT_LANGUAGE")
                .unwrap_or(first_language),
            strict_usage: std::env::var("LOCALE_STRICT_USAGE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            languages,

            // Translation files
            translations_dir: std::env::var("LOCALE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("locales")),
            translations_pattern: std::env::var("LOCALE_PATTERN")
                .unwrap_or_else(|_| "**/*.{yml,yaml}".to_string()),
        })
    }

    /// Register the configured languages and load every matching
    /// translation file.
    pub fn build_locale(&self) -> Result<Locale> {
        let mut locale = Locale::new(self.strict_usage, self.languages.as_slice())
            .context("Failed to register languages")?;

        if !locale.has_language(&self.default_language) {
            bail!(
                "Default language '{}' is not one of {:?}",
                self.default_language,
                self.languages
            );
        }

        let loaded = locale
            .load_yaml_glob(
                &self.default_language,
                &self.translations_dir,
                &self.translations_pattern,
            )
            .with_context(|| {
                format!(
                    "Failed to load translations from {}",
                    self.translations_dir.display()
                )
            })?;

        info!(
            files = loaded,
            dir = %self.translations_dir.display(),
            "Locale ready"
        );

        Ok(locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    const VARS: &[&str] = &[
        "LOCALE_LANGUAGES",
        "LOCALE_DEFAULT_LANGUAGE",
        "LOCALE_STRICT_USAGE",
        "LOCALE_DIR",
        "LOCALE_PATTERN",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    // ==================== from_env Tests ====================

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        std::env::set_var("LOCALE_LANGUAGES", "lv, en");

        let config = Config::from_env().unwrap();
        assert_eq!(config.languages, vec!["lv", "en"]);
        assert_eq!(config.default_language, "lv");
        assert!(!config.strict_usage);
        assert_eq!(config.translations_dir, PathBuf::from("locales"));
        assert_eq!(config.translations_pattern, "**/*.{yml,yaml}");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("LOCALE_LANGUAGES", "lv,en,de");
        std::env::set_var("LOCALE_DEFAULT_LANGUAGE", "en");
        std::env::set_var("LOCALE_STRICT_USAGE", "true");
        std::env::set_var("LOCALE_DIR", "/srv/translations");
        std::env::set_var("LOCALE_PATTERN", "*.yml");

        let config = Config::from_env().unwrap();
        assert_eq!(config.languages, vec!["lv", "en", "de"]);
        assert_eq!(config.default_language, "en");
        assert!(config.strict_usage);
        assert_eq!(config.translations_dir, PathBuf::from("/srv/translations"));
        assert_eq!(config.translations_pattern, "*.yml");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_strict_usage_defaults_to_false() {
        clear_env();
        std::env::set_var("LOCALE_LANGUAGES", "en");
        std::env::set_var("LOCALE_STRICT_USAGE", "yes");

        let config = Config::from_env().unwrap();
        assert!(!config.strict_usage);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_missing_languages() {
        clear_env();

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("LOCALE_LANGUAGES not set"));
    }

    #[test]
    #[serial]
    fn test_from_env_empty_languages() {
        clear_env();
        std::env::set_var("LOCALE_LANGUAGES", " , ");

        assert!(Config::from_env().is_err());

        clear_env();
    }

    // ==================== build_locale Tests ====================

    fn config(dir: &TempDir) -> Config {
        Config {
            languages: vec!["lv".to_string(), "en".to_string()],
            default_language: "lv".to_string(),
            strict_usage: false,
            translations_dir: dir.path().to_path_buf(),
            translations_pattern: "**/*.{yml,yaml}".to_string(),
        }
    }

    #[test]
    fn test_build_locale_loads_files() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("home.yml"), "title: Sākums\n").unwrap();
        std::fs::write(
            dir.path().join("items.yaml"),
            "items:\n  - en:\n      - \"%d item\"\n      - \"%d items\"\n",
        )
        .unwrap();

        let locale = config(&dir).build_locale().unwrap();
        assert_eq!(locale.value("lv", "title").unwrap(), "Sākums");
        assert_eq!(locale.value_plural("en", "items").unwrap(), "%d items");
    }

    #[test]
    fn test_build_locale_unknown_default_language() {
        let dir = TempDir::new().unwrap();
        let mut config = config(&dir);
        config.default_language = "de".to_string();

        let err = config.build_locale().unwrap_err();
        assert!(err.to_string().contains("Default language 'de'"));
    }

    #[test]
    fn test_build_locale_duplicate_languages() {
        let dir = TempDir::new().unwrap();
        let mut config = config(&dir);
        config.languages = vec!["en".to_string(), "EN".to_string()];

        let err = config.build_locale().unwrap_err();
        assert!(err.to_string().contains("Failed to register languages"));
    }

    #[test]
    fn test_build_locale_reports_broken_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("broken.yml"), "key: [1, 2]\n").unwrap();

        let err = config(&dir).build_locale().unwrap_err();
        assert!(err.to_string().contains("Failed to load translations"));
    }
}
