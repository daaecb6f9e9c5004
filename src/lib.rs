//! Localization library: YAML translation files, `Accept-Language`
//! negotiation and plural-aware text lookup.
//!
//! ```rust,ignore
//! use localization::{text_plural_from_count, Locale};
//!
//! let mut locale = Locale::new(false, &["lv", "en"])?;
//! locale.load_yaml_files("lv", &["locales/home.yaml"])?;
//!
//! let lang = locale.negotiate("en-US,en;q=0.5", "lv").unwrap_or("lv");
//! let text = text_plural_from_count(&locale, lang, "items", &[2.into()])?;
//! ```

pub mod config;
pub mod error;
pub mod i18n;

pub use error::{DecodeError, LocaleError, Result};
pub use i18n::{
    decode, load_yaml_file, load_yaml_files, sprintf, text, text_plural, text_plural_from_count,
    text_pluralf, textf, AcceptLanguages, FormatArg, LanguageTable, Locale, LookupMetrics,
    MetricsReport, PriorityGroup, TranslationEntry, TranslationValidator, ValidationReport,
    YamlFile,
};
