//! Text lookup helpers for template rendering.
//!
//! Each helper takes the [`Locale`] to read from, the language keyword and
//! the text key, and applies the locale's fallback rules.
//!
//! ```text
//! items:
//!   - en:
//!       - "%d item %s"
//!       - "%d items %s"
//!
//! text_plural_from_count(&locale, "en", "items", &[1.into(), ":)".into()])  -> "1 item :)"
//! text_plural_from_count(&locale, "en", "items", &[2.into(), ":)".into()])  -> "2 items :)"
//! ```

use crate::error::{LocaleError, Result};
use crate::i18n::{sprintf, FormatArg, Locale};

/// Get the singular text for a key.
pub fn text<'a>(locale: &'a Locale, language: &str, key: &str) -> Result<&'a str> {
    locale.value(language, key)
}

/// Get the plural text if `is_plural` is true, the singular text otherwise.
pub fn text_plural<'a>(
    locale: &'a Locale,
    language: &str,
    key: &str,
    is_plural: bool,
) -> Result<&'a str> {
    if is_plural {
        locale.value_plural(language, key)
    } else {
        locale.value(language, key)
    }
}

/// Get the singular text for a key and interpolate `args` into it.
///
/// # Example
/// ```ignore
/// // hello: "Hello, %s"
/// let text = textf(&locale, "en", "hello", &["John".into()])?;
/// assert_eq!(text, "Hello, John");
/// ```
pub fn textf(locale: &Locale, language: &str, key: &str, args: &[FormatArg]) -> Result<String> {
    let template = text(locale, language, key)?;
    Ok(sprintf(template, args))
}

/// Get the plural or singular text and interpolate `args` into it.
pub fn text_pluralf(
    locale: &Locale,
    language: &str,
    key: &str,
    is_plural: bool,
    args: &[FormatArg],
) -> Result<String> {
    let template = text_plural(locale, language, key, is_plural)?;
    Ok(sprintf(template, args))
}

/// Pick the plural form from the first argument and interpolate `args`.
///
/// The first argument must be an integer; the plural text is used when it
/// is greater than 1.
///
/// # Errors
/// * `LocaleError::DynamicNotInt` if `args` is empty or its first element
///   is not an integer
/// * Any lookup error of [`Locale::value`] / [`Locale::value_plural`]
pub fn text_plural_from_count(
    locale: &Locale,
    language: &str,
    key: &str,
    args: &[FormatArg],
) -> Result<String> {
    let count = args
        .first()
        .and_then(FormatArg::as_count)
        .ok_or(LocaleError::DynamicNotInt)?;

    text_pluralf(locale, language, key, count > 1, args)
}
