//! Internationalization (i18n) module: translation tables and lookup.
//!
//! # Architecture
//!
//! - `translation`: Flat translation entry produced by the decoder
//! - `yaml`: YAML document decoder and translation file loader
//! - `language`: Per-language key -> (singular, plural) table
//! - `registry`: `Locale`, the set of registered languages with fallback lookup
//! - `accept_language`: `Accept-Language` header parsing and negotiation
//! - `format`: printf-style interpolation of translated templates
//! - `text`: Lookup helpers for template rendering
//! - `validator`: Completeness and placeholder consistency checks
//! - `metrics`: Lookup hit/miss counters
//!
//! # Example
//!
//! ```rust,ignore
//! use localization::i18n::{textf, Locale};
//!
//! let mut locale = Locale::new(false, &["lv", "en"])?;
//! locale.set_value("en", "hello", "Hello, %s!", "")?;
//!
//! let greeting = textf(&locale, "lv", "hello", &["John".into()])?;
//! assert_eq!(greeting, "Hello, John!");
//! ```

mod accept_language;
mod format;
mod language;
mod metrics;
mod registry;
mod text;
mod translation;
mod validator;
mod yaml;

pub use accept_language::{AcceptLanguages, PriorityGroup};
pub use format::{sprintf, FormatArg};
pub use language::LanguageTable;
pub use metrics::{LookupMetrics, MetricsReport};
pub use registry::Locale;
pub use text::{text, text_plural, text_plural_from_count, text_pluralf, textf};
pub use translation::TranslationEntry;
pub use validator::{TranslationValidator, ValidationReport};
pub use yaml::{decode, load_yaml_file, load_yaml_files, YamlFile};
