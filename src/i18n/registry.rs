//! Locale registry: the set of registered languages and their translations.
//!
//! A [`Locale`] is an explicit value owned by the application and passed to
//! whatever renders text; there is no global instance. Build it once at
//! startup (register languages, load files), then share it read-only. For
//! writes after sharing, wrap it in `Arc<RwLock<Locale>>`.

use std::path::{Path, PathBuf};

use globset::Glob;
use ignore::WalkBuilder;
use tracing::{debug, info};

use crate::error::{LocaleError, Result};
use crate::i18n::yaml::load_yaml_file;
use crate::i18n::{AcceptLanguages, LanguageTable, LookupMetrics, TranslationEntry};

/// Registered languages with plural-aware lookup and optional fallback.
#[derive(Debug, Clone, Default)]
pub struct Locale {
    languages: Vec<LanguageTable>,

    /// When true a key missing in the requested language is an error;
    /// otherwise other languages are searched in registration order.
    strict_usage: bool,

    metrics: LookupMetrics,
}

impl Locale {
    /// Create a locale with the given languages registered.
    ///
    /// # Arguments
    /// * `strict_usage` - Restrict lookups to the requested language
    /// * `languages` - Language keywords to register ("en", "lv", ...)
    ///
    /// # Example
    /// ```ignore
    /// let locale = Locale::new(false, &["lv", "en"])?;
    /// ```
    pub fn new<S: AsRef<str>>(strict_usage: bool, languages: &[S]) -> Result<Self> {
        let mut locale = Self {
            strict_usage,
            ..Self::default()
        };
        locale.register(languages)?;
        Ok(locale)
    }

    /// Register new, empty languages.
    ///
    /// Keywords are compared case-insensitively. The whole batch is
    /// rejected, with nothing registered, if any keyword already exists or
    /// appears twice in `languages`.
    pub fn register<S: AsRef<str>>(&mut self, languages: &[S]) -> Result<()> {
        for (index, language) in languages.iter().enumerate() {
            let language = language.as_ref();

            if self.has_language(language) {
                return Err(LocaleError::LanguageExists(language.to_string()));
            }

            let repeated = languages[..index]
                .iter()
                .any(|earlier| earlier.as_ref().eq_ignore_ascii_case(language));
            if repeated {
                return Err(LocaleError::LanguageRedefined(language.to_string()));
            }
        }

        self.languages.extend(
            languages
                .iter()
                .map(|language| LanguageTable::new(language.as_ref())),
        );

        if !languages.is_empty() {
            info!(
                languages = ?self.enabled_languages().unwrap_or_default(),
                "Registered languages"
            );
        }

        Ok(())
    }

    /// Get a language table by keyword (case-insensitive).
    pub fn language(&self, language: &str) -> Result<&LanguageTable> {
        self.languages
            .iter()
            .find(|table| table.matches(language))
            .ok_or_else(|| LocaleError::UnknownLanguage(language.to_string()))
    }

    fn language_mut(&mut self, language: &str) -> Result<&mut LanguageTable> {
        self.languages
            .iter_mut()
            .find(|table| table.matches(language))
            .ok_or_else(|| LocaleError::UnknownLanguage(language.to_string()))
    }

    /// Check if a language is registered.
    pub fn has_language(&self, language: &str) -> bool {
        self.language(language).is_ok()
    }

    /// Get registered language keywords in registration order.
    ///
    /// # Returns
    /// * `Some(keywords)` if at least one language is registered
    /// * `None` if the locale has no languages
    pub fn enabled_languages(&self) -> Option<Vec<&str>> {
        if self.languages.is_empty() {
            return None;
        }

        Some(self.languages.iter().map(LanguageTable::keyword).collect())
    }

    pub fn strict_usage(&self) -> bool {
        self.strict_usage
    }

    pub fn set_strict_usage(&mut self, strict_usage: bool) {
        self.strict_usage = strict_usage;
    }

    pub fn metrics(&self) -> &LookupMetrics {
        &self.metrics
    }

    /// Iterate over language tables in registration order.
    pub fn tables(&self) -> impl Iterator<Item = &LanguageTable> {
        self.languages.iter()
    }

    /// Set singular and plural text for a key in a language.
    ///
    /// An empty `key` is silently ignored by the table; validate keys
    /// beforehand if that must be an error.
    pub fn set_value(&mut self, language: &str, key: &str, value: &str, plural: &str) -> Result<()> {
        if self.languages.is_empty() {
            return Err(LocaleError::NoLanguages);
        }

        self.language_mut(language)?.set_value(key, value, plural);
        Ok(())
    }

    /// Get the singular text for a key.
    ///
    /// Searches the requested language first and, unless strict usage is
    /// on, every other language in registration order. A key counts as
    /// missing only when it is absent from a table; a stored empty string
    /// is a valid answer.
    pub fn value(&self, language: &str, key: &str) -> Result<&str> {
        self.lookup(language, key, LanguageTable::value)
    }

    /// Get the plural text for a key, with the same search as [`Locale::value`].
    pub fn value_plural(&self, language: &str, key: &str) -> Result<&str> {
        self.lookup(language, key, LanguageTable::value_plural)
    }

    /// Like [`Locale::value`], but any failure yields an empty string.
    pub fn value_or_empty(&self, language: &str, key: &str) -> &str {
        self.value(language, key).unwrap_or_default()
    }

    /// Like [`Locale::value_plural`], but any failure yields an empty string.
    pub fn value_plural_or_empty(&self, language: &str, key: &str) -> &str {
        self.value_plural(language, key).unwrap_or_default()
    }

    fn lookup<'a>(
        &'a self,
        language: &str,
        key: &str,
        get: impl Fn(&'a LanguageTable, &str) -> Option<&'a str>,
    ) -> Result<&'a str> {
        let requested = self.language(language)?;

        if let Some(text) = get(requested, key) {
            self.metrics.record_direct_hit();
            return Ok(text);
        }

        if self.strict_usage {
            self.metrics.record_miss();
            return Err(LocaleError::KeyNotFoundInLanguage {
                language: language.to_string(),
                key: key.to_string(),
            });
        }

        let fallback = self
            .languages
            .iter()
            .filter(|table| !std::ptr::eq(*table, requested))
            .find_map(|table| get(table, key).map(|text| (table.keyword(), text)));

        match fallback {
            Some((found_in, text)) => {
                debug!(key, requested = language, found_in, "Translation served by fallback language");
                self.metrics.record_fallback_hit();
                Ok(text)
            }
            None => {
                self.metrics.record_miss();
                Err(LocaleError::KeyNotFound(key.to_string()))
            }
        }
    }

    /// Apply translation entries in order.
    ///
    /// Stops at the first entry that fails; entries applied before it are
    /// kept.
    pub fn add_translations(&mut self, entries: &[TranslationEntry]) -> Result<()> {
        for (index, entry) in entries.iter().enumerate() {
            self.set_value(&entry.language, &entry.key, &entry.value, &entry.plural)
                .map_err(|source| LocaleError::Translation {
                    index,
                    source: Box::new(source),
                })?;
        }

        Ok(())
    }

    /// Load translation files into this locale.
    ///
    /// Each file is read, decoded and applied before the next one is
    /// touched; the first failing file stops the batch.
    ///
    /// # Arguments
    /// * `default_language` - Language for plain `key: "text"` entries
    /// * `paths` - YAML files to load
    pub fn load_yaml_files<P: AsRef<Path>>(&mut self, default_language: &str, paths: &[P]) -> Result<()> {
        for path in paths {
            let file = load_yaml_file(default_language, path)?;

            self.add_translations(&file.translations)
                .map_err(|source| LocaleError::File {
                    path: file.path.clone(),
                    source: Box::new(source),
                })?;

            info!(
                path = %file.path.display(),
                count = file.translations.len(),
                "Loaded translation file"
            );
        }

        Ok(())
    }

    /// Load every file under `root` whose relative path matches `pattern`.
    ///
    /// Files are loaded in sorted path order. Examples of patterns:
    /// `"home.yml"`, `"*.yaml"`, `"**/*.{yml,yaml}"`.
    ///
    /// # Returns
    /// The number of files loaded.
    pub fn load_yaml_glob(&mut self, default_language: &str, root: &Path, pattern: &str) -> Result<usize> {
        let files = find_files(root, pattern)?;
        debug!(root = %root.display(), pattern, count = files.len(), "Matched translation files");

        self.load_yaml_files(default_language, files.as_slice())?;
        Ok(files.len())
    }

    /// Pick the registered language that best matches an `Accept-Language`
    /// header, with `*` standing for `default_language`.
    pub fn negotiate(&self, header: &str, default_language: &str) -> Option<&str> {
        let enabled = self.enabled_languages()?;
        let tag = AcceptLanguages::parse(header).resolve(&enabled, default_language)?;

        // Hand out the registry's own keyword, not the borrowed candidate.
        self.language(tag).ok().map(LanguageTable::keyword)
    }
}

fn find_files(root: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let matcher = Glob::new(pattern)
        .map_err(|source| LocaleError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?
        .compile_matcher();

    let mut files = Vec::new();
    for result in WalkBuilder::new(root)
        .hidden(false)
        .git_ignore(false)
        .follow_links(false)
        .build()
    {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                debug!(?err, "Failed to read directory entry");
                continue;
            }
        };

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let path = entry.path();
        let Ok(relative_path) = path.strip_prefix(root) else {
            continue;
        };
        if matcher.is_match(relative_path) {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}
