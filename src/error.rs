//! Error types for translation loading, lookup and formatting.

use std::path::PathBuf;

/// Result alias used across the library.
pub type Result<T> = std::result::Result<T, LocaleError>;

/// Failure to turn a YAML document into translation entries.
///
/// Any of these aborts the whole document; no partial results are kept.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("failed to unmarshal YAML: {0}")]
    Syntax(#[from] serde_yaml::Error),

    #[error("document root must be a mapping, found {0}")]
    RootNotMapping(&'static str),

    #[error("'{0}' key must be string")]
    KeyNotString(String),

    #[error("{key}: unsupported type={kind}")]
    UnsupportedType { key: String, kind: &'static str },

    #[error("'{key}' > '{language}' must be string")]
    LanguageNotString { key: String, language: String },

    #[error("'{key}' > '{language}' value must be string or list")]
    ValueNotStringOrList { key: String, language: String },

    #[error("'{key}' > '{language}': contains more than 2 plural entries")]
    TooManyPlurals { key: String, language: String },

    #[error("'{key}' > '{language}': plural list is empty")]
    EmptyPlurals { key: String, language: String },

    #[error("'{key}' > '{language}': plural entries must be strings")]
    PluralNotString { key: String, language: String },
}

#[derive(Debug, thiserror::Error)]
pub enum LocaleError {
    #[error("language '{0}' already exists")]
    LanguageExists(String),

    #[error("language '{0}' redefined in passed language list")]
    LanguageRedefined(String),

    #[error("language list is empty")]
    NoLanguages,

    #[error("language '{0}' does not exist")]
    UnknownLanguage(String),

    #[error("language '{language}' does not contain key '{key}'")]
    KeyNotFoundInLanguage { language: String, key: String },

    #[error("none of the languages contain key '{0}'")]
    KeyNotFound(String),

    #[error("plural dynamic input must be int")]
    DynamicNotInt,

    #[error("translation index={index}: {source}")]
    Translation {
        index: usize,
        #[source]
        source: Box<LocaleError>,
    },

    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },

    #[error("'{path}': {source}")]
    File {
        path: PathBuf,
        #[source]
        source: Box<LocaleError>,
    },

    #[error("invalid translation file pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },
}

impl LocaleError {
    /// True for lookup misses, as opposed to configuration or load failures.
    ///
    /// Wrapped errors are inspected, so a miss reported through a batch
    /// operation still counts.
    pub fn is_not_found(&self) -> bool {
        match self {
            LocaleError::KeyNotFoundInLanguage { .. } | LocaleError::KeyNotFound(_) => true,
            LocaleError::Translation { source, .. } | LocaleError::File { source, .. } => {
                source.is_not_found()
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_variants() {
        assert!(LocaleError::KeyNotFound("k".to_string()).is_not_found());
        assert!(LocaleError::KeyNotFoundInLanguage {
            language: "lv".to_string(),
            key: "k".to_string(),
        }
        .is_not_found());
        assert!(!LocaleError::UnknownLanguage("ee".to_string()).is_not_found());
        assert!(!LocaleError::DynamicNotInt.is_not_found());
    }

    #[test]
    fn test_not_found_through_wrappers() {
        let err = LocaleError::File {
            path: PathBuf::from("a.yaml"),
            source: Box::new(LocaleError::Translation {
                index: 2,
                source: Box::new(LocaleError::KeyNotFound("k".to_string())),
            }),
        };
        assert!(err.is_not_found());
    }

    #[test]
    fn test_error_messages() {
        let err = LocaleError::Translation {
            index: 3,
            source: Box::new(LocaleError::UnknownLanguage("ee".to_string())),
        };
        assert_eq!(
            err.to_string(),
            "translation index=3: language 'ee' does not exist"
        );

        let err = DecodeError::TooManyPlurals {
            key: "key0".to_string(),
            language: "lv".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "'key0' > 'lv': contains more than 2 plural entries"
        );
    }
}
