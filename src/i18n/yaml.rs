//! YAML translation decoder and file loader.
//!
//! A translation file is a mapping from text key to one of these shapes:
//!
//! ```yaml
//! greeting: "Sveiki"          # default language
//! farewell:
//!   - en: "Bye"
//!   - lv: "Atā"
//! items:
//!   - en:
//!       - "%d item"           # singular
//!       - "%d items"          # plural
//! title: { en: "Home", lv: "Sākums" }
//! ```
//!
//! Decoding walks the parsed [`Value`] tree with a recursive `match` on the
//! value variant; anything outside these shapes fails the whole document.

use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};
use tracing::debug;

use crate::error::{DecodeError, LocaleError, Result};
use crate::i18n::TranslationEntry;

/// Translations loaded from one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YamlFile {
    /// Path the file was read from (kept for error messages)
    pub path: PathBuf,

    pub translations: Vec<TranslationEntry>,
}

/// Decode a YAML document into translation entries.
///
/// # Arguments
/// * `bytes` - Raw document content
/// * `default_language` - Language assigned to plain `key: "text"` entries
///
/// # Returns
/// Entries in document order. An empty document yields an empty list.
pub fn decode(
    bytes: &[u8],
    default_language: &str,
) -> std::result::Result<Vec<TranslationEntry>, DecodeError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }

    let document: Value = serde_yaml::from_slice(bytes)?;
    let root = match document {
        Value::Null => return Ok(Vec::new()),
        Value::Mapping(root) => root,
        other => return Err(DecodeError::RootNotMapping(kind_name(&other))),
    };

    let decoder = Decoder { default_language };
    let mut translations = Vec::new();

    for (key, value) in &root {
        let Value::String(key) = key else {
            return Err(DecodeError::KeyNotString(describe(key)));
        };
        decoder.decode_value(key, value, &mut translations)?;
    }

    Ok(translations)
}

/// Read and decode one translation file.
pub fn load_yaml_file(default_language: &str, path: impl AsRef<Path>) -> Result<YamlFile> {
    let path = path.as_ref();

    let bytes = std::fs::read(path).map_err(|source| LocaleError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let translations = decode(&bytes, default_language).map_err(|source| LocaleError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        path = %path.display(),
        count = translations.len(),
        plurals = translations.iter().filter(|entry| entry.has_plural()).count(),
        "Decoded translation file"
    );

    Ok(YamlFile {
        path: path.to_path_buf(),
        translations,
    })
}

/// Read and decode several translation files, stopping at the first failure.
pub fn load_yaml_files<P: AsRef<Path>>(default_language: &str, paths: &[P]) -> Result<Vec<YamlFile>> {
    paths
        .iter()
        .map(|path| load_yaml_file(default_language, path))
        .collect()
}

struct Decoder<'a> {
    default_language: &'a str,
}

impl Decoder<'_> {
    fn decode_value(
        &self,
        key: &str,
        value: &Value,
        out: &mut Vec<TranslationEntry>,
    ) -> std::result::Result<(), DecodeError> {
        match value {
            Value::String(text) => {
                out.push(TranslationEntry::new(key, self.default_language, text.as_str(), ""));
                Ok(())
            }
            Value::Sequence(items) => {
                for item in items {
                    match item {
                        Value::String(_) | Value::Mapping(_) => {
                            self.decode_value(key, item, out)?;
                        }
                        other => {
                            return Err(DecodeError::UnsupportedType {
                                key: key.to_string(),
                                kind: kind_name(other),
                            })
                        }
                    }
                }
                Ok(())
            }
            Value::Mapping(languages) => self.decode_languages(key, languages, out),
            other => Err(DecodeError::UnsupportedType {
                key: key.to_string(),
                kind: kind_name(other),
            }),
        }
    }

    /// Decode a `language: text` or `language: [singular, plural]` mapping.
    fn decode_languages(
        &self,
        key: &str,
        languages: &Mapping,
        out: &mut Vec<TranslationEntry>,
    ) -> std::result::Result<(), DecodeError> {
        for (language, value) in languages {
            let Value::String(language) = language else {
                return Err(DecodeError::LanguageNotString {
                    key: key.to_string(),
                    language: describe(language),
                });
            };

            let entry = match value {
                Value::String(text) => TranslationEntry::new(key, language.as_str(), text.as_str(), ""),
                Value::Sequence(forms) => {
                    let (value, plural) = plural_forms(key, language, forms)?;
                    TranslationEntry::new(key, language.as_str(), value, plural)
                }
                _ => {
                    return Err(DecodeError::ValueNotStringOrList {
                        key: key.to_string(),
                        language: language.clone(),
                    })
                }
            };
            out.push(entry);
        }

        Ok(())
    }
}

/// Split a one- or two-element list into singular and plural text.
fn plural_forms<'v>(
    key: &str,
    language: &str,
    forms: &'v [Value],
) -> std::result::Result<(&'v str, &'v str), DecodeError> {
    let as_text = |value: &'v Value| match value {
        Value::String(text) => Ok(text.as_str()),
        _ => Err(DecodeError::PluralNotString {
            key: key.to_string(),
            language: language.to_string(),
        }),
    };

    match forms {
        [] => Err(DecodeError::EmptyPlurals {
            key: key.to_string(),
            language: language.to_string(),
        }),
        [value] => Ok((as_text(value)?, "")),
        [value, plural] => Ok((as_text(value)?, as_text(plural)?)),
        _ => Err(DecodeError::TooManyPlurals {
            key: key.to_string(),
            language: language.to_string(),
        }),
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "string",
        Value::Sequence(_) => "list",
        Value::Mapping(_) => "map",
        Value::Tagged(_) => "tagged",
    }
}

/// Render a map key for error messages.
fn describe(value: &Value) -> String {
    match value {
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => kind_name(other).to_string(),
    }
}
