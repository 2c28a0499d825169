use super::rules::{canonicalize, rule_for_prefix};
use super::{normalize_candidate, Country, VALIDATOR};
use crate::regex_util::RegexFullMatch;
use crate::regexp_cache::RegexCache;

/// Canonical forms shorter than this (counting the `+`) are rejected before
/// any country-specific logic runs.
const MIN_CANONICAL_CHARS: usize = 9;

/// Outcome of classifying and validating one candidate.
///
/// `Invalid` keeps the best-effort canonical attempt and inferred country for
/// the manual-review output; both are `None` when classification never
/// resolved a country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    Valid {
        number: String,
        country: Country,
    },
    Invalid {
        original: String,
        attempted: Option<String>,
        country: Option<Country>,
    },
}

/// Matches canonical numbers against the rule table's mobile patterns.
pub(super) struct Validator {
    cache: RegexCache,
}

impl Validator {
    pub fn new() -> Self {
        Self {
            cache: RegexCache::with_capacity(super::rules::COUNTRY_RULES.len()),
        }
    }

    /// Exact whole-string match; prefix and superset matches are rejections.
    fn is_valid_mobile(&self, pattern: &str, number: &str) -> bool {
        let regex = self
            .cache
            .compile(pattern)
            .unwrap_or_else(|err| panic!("rule table patterns must compile; this indicates a library bug! {err}"));
        regex.full_match(number)
    }
}

/// Runs one candidate through cleanup, canonicalization and validation.
pub fn scan_candidate(candidate: &str) -> ScanOutcome {
    let cleaned = normalize_candidate(candidate);
    let canonical = canonicalize(&cleaned);

    if canonical.chars().count() < MIN_CANONICAL_CHARS {
        return ScanOutcome::Invalid {
            original: candidate.to_string(),
            attempted: None,
            country: None,
        };
    }

    let Some(rule) = rule_for_prefix(&canonical) else {
        return ScanOutcome::Invalid {
            original: candidate.to_string(),
            attempted: None,
            country: None,
        };
    };

    let mut canonical = canonical.into_owned();
    if let Some(max_chars) = rule.max_chars {
        if let Some((boundary, _)) = canonical.char_indices().nth(max_chars) {
            canonical.truncate(boundary);
        }
    }

    if VALIDATOR.is_valid_mobile(rule.mobile_pattern, &canonical) {
        ScanOutcome::Valid {
            number: canonical,
            country: rule.country,
        }
    } else {
        ScanOutcome::Invalid {
            original: candidate.to_string(),
            attempted: Some(canonical),
            country: Some(rule.country),
        }
    }
}
