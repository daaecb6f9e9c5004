//! `Accept-Language` header parsing and language negotiation.
//!
//! A header such as `fr-CH, fr;q=0.9, en;q=0.8, *;q=0` is split into
//! priority groups: runs of language tags sharing one `q=` weight. Groups
//! are ordered by descending weight; within a group tags keep their order.
//!
//! A group without `q=` gets weight `0.0`, not the `1.0` the HTTP
//! convention implies.

use regex::Regex;
use std::sync::OnceLock;

/// Language tags sharing one weight.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriorityGroup {
    /// Group weight/priority
    pub weight: f32,

    /// Tags in order of appearance ("*", "en-US", "en", ...)
    pub languages: Vec<String>,
}

/// Parsed `Accept-Language` header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AcceptLanguages {
    /// Priority groups, highest weight first
    pub groups: Vec<PriorityGroup>,
}

// Regex patterns (cached for performance)
static GROUP_REGEX: OnceLock<Regex> = OnceLock::new();
static WEIGHT_REGEX: OnceLock<Regex> = OnceLock::new();
static LANGUAGE_REGEX: OnceLock<Regex> = OnceLock::new();

const LANGUAGE_TAG: &str = r"(?:\*|[a-z]{2}(?:-[a-zA-Z]{2,})?)";

impl AcceptLanguages {
    /// Parse an `Accept-Language` header value.
    ///
    /// Never fails: empty or unrecognizable input gives no groups.
    pub fn parse(value: &str) -> Self {
        let group_regex = GROUP_REGEX.get_or_init(|| {
            Regex::new(&format!(r"(?:{LANGUAGE_TAG},?\s*)+;?(?:q=[0-9.]+)?")).unwrap()
        });

        let mut groups: Vec<PriorityGroup> = group_regex
            .find_iter(value)
            .map(|m| PriorityGroup::parse(m.as_str()))
            .collect();

        // Stable, so equal weights keep header order.
        groups.sort_by(|a, b| b.weight.total_cmp(&a.weight));

        Self { groups }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterate over all tags in priority order (weight, then appearance).
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.groups
            .iter()
            .flat_map(|group| group.languages.iter().map(String::as_str))
    }

    /// Find the first enabled language accepted by this header.
    ///
    /// `*` stands for `default_language`. Candidates are tried in priority
    /// order and each is compared case-insensitively against `enabled` in
    /// the caller's order.
    ///
    /// # Returns
    /// * `Some(tag)` - the matching entry of `enabled`
    /// * `None` - no accepted language is enabled
    pub fn resolve<'e, S: AsRef<str>>(
        &self,
        enabled: &'e [S],
        default_language: &str,
    ) -> Option<&'e str> {
        self.languages()
            .map(|language| if language == "*" { default_language } else { language })
            .find_map(|language| {
                enabled
                    .iter()
                    .map(|candidate| -> &'e str { candidate.as_ref() })
                    .find(|candidate| candidate.eq_ignore_ascii_case(language))
            })
    }
}

impl PriorityGroup {
    fn parse(value: &str) -> Self {
        let language_regex =
            LANGUAGE_REGEX.get_or_init(|| Regex::new(LANGUAGE_TAG).unwrap());

        // The weight is cut off first so "q" can never be read as a tag.
        let (tags, _) = value.split_once(';').unwrap_or((value, ""));

        Self {
            weight: extract_weight(value),
            languages: language_regex
                .find_iter(tags)
                .map(|m| m.as_str().to_string())
                .collect(),
        }
    }
}

/// Extract the `q=` weight; missing or malformed numbers give `0.0`.
fn extract_weight(value: &str) -> f32 {
    let regex = WEIGHT_REGEX.get_or_init(|| Regex::new(r"q=([0-9.]+)").unwrap());

    regex
        .captures(value)
        .and_then(|cap| cap.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0.0)
}
