use std::borrow::Cow;

use super::{Country, SCAN_REGEXPS};

/// One row of the per-country grammar table.
///
/// `max_chars` caps the canonical form (counting the leading `+`); trailing
/// digits beyond it are truncated before validation. `mobile_pattern` is
/// unanchored and applied as an exact whole-string match.
pub struct CountryRule {
    pub country: Country,
    pub prefix: &'static str,
    pub max_chars: Option<usize>,
    pub mobile_pattern: &'static str,
}

/// Dispatch order matters: a canonical number is classified by the first
/// entry whose prefix it starts with.
pub const COUNTRY_RULES: &[CountryRule] = &[
    CountryRule {
        country: Country::Cz,
        prefix: "+420",
        max_chars: Some(13),
        mobile_pattern: r"\+420[6-7][0-9]{8}",
    },
    CountryRule {
        country: Country::De,
        prefix: "+49",
        max_chars: Some(14),
        mobile_pattern: r"\+49[1][5-7][0-9]{7,10}",
    },
    CountryRule {
        country: Country::Pl,
        prefix: "+48",
        max_chars: Some(12),
        mobile_pattern: r"\+48[4-8][0-9]{8}",
    },
    CountryRule {
        country: Country::Nl,
        prefix: "+31",
        max_chars: Some(12),
        mobile_pattern: r"\+31[6][0-9]{8}",
    },
    CountryRule {
        country: Country::Ie,
        prefix: "+353",
        max_chars: None,
        mobile_pattern: r"\+353[8][0-9]{8}",
    },
    CountryRule {
        country: Country::Il,
        prefix: "+972",
        max_chars: None,
        mobile_pattern: r"\+972[5][0-9]{8}",
    },
    CountryRule {
        country: Country::At,
        prefix: "+43",
        max_chars: None,
        mobile_pattern: r"\+43[6][0-9]{9,10}",
    },
];

/// Bare calling codes tested in priority order when no `+` survived cleanup.
/// `420` must precede `49`/`48`/`43` so Czech numbers win the shared `4`.
const BARE_CODES: &[&str] = &["420", "49", "48", "31", "353", "972", "43"];

/// Rewrites a cleaned candidate into `+<calling code><national number>` form.
///
/// Rules apply in strict order, each on the output of the one before:
/// `00` becomes `+`; redundant zeros right after a German, Polish or Czech
/// calling code are consumed; a bare calling-code prefix gains a `+`; a bare
/// 9-digit run starting with 6 or 7 is assumed to be a domestic Czech mobile.
/// Returns `Cow::Borrowed` when the candidate was already canonical.
pub fn canonicalize(cleaned: &str) -> Cow<'_, str> {
    let mut value: Cow<'_, str> = Cow::Borrowed(cleaned);

    if let Some(rest) = value.strip_prefix("00") {
        value = Cow::Owned(format!("+{rest}"));
    }

    for (regex, replacement) in &SCAN_REGEXPS.redundant_zeros {
        let rewritten = match regex.replace(&value, *replacement) {
            Cow::Owned(rewritten) => rewritten,
            Cow::Borrowed(_) => continue,
        };
        value = Cow::Owned(rewritten);
        break;
    }

    if !value.starts_with('+') {
        if BARE_CODES.iter().any(|code| value.starts_with(code)) {
            value = Cow::Owned(format!("+{value}"));
        } else if value.chars().count() == 9 && matches!(value.chars().next(), Some('6' | '7')) {
            value = Cow::Owned(format!("+420{value}"));
        }
    }

    value
}

/// First rule-table entry whose prefix matches the canonical form.
pub fn rule_for_prefix(canonical: &str) -> Option<&'static CountryRule> {
    COUNTRY_RULES
        .iter()
        .find(|rule| canonical.starts_with(rule.prefix))
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn every_country_has_exactly_one_rule() {
        for country in Country::iter() {
            assert_eq!(
                COUNTRY_RULES
                    .iter()
                    .filter(|rule| rule.country == country)
                    .count(),
                1,
                "rule table entry for {country}"
            );
        }
    }

    #[test]
    fn double_zero_prefix_becomes_plus() {
        assert_eq!(canonicalize("00420601234567"), "+420601234567");
        assert_eq!(canonicalize("00491511234567"), "+491511234567");
    }

    #[test]
    fn redundant_zeros_after_calling_code_are_consumed() {
        assert_eq!(canonicalize("+4901511234567"), "+491511234567");
        assert_eq!(canonicalize("+480501234567"), "+48501234567");
        assert_eq!(canonicalize("+4200601234567"), "+420601234567");
        // zeros elsewhere are data, not padding
        assert_eq!(canonicalize("+48501234560"), "+48501234560");
    }

    #[test]
    fn bare_calling_codes_gain_a_plus_in_priority_order() {
        assert_eq!(canonicalize("420601234567"), "+420601234567");
        assert_eq!(canonicalize("491511234567"), "+491511234567");
        assert_eq!(canonicalize("436601234567"), "+436601234567");
        assert_eq!(canonicalize("31612345678"), "+31612345678");
    }

    #[test]
    fn bare_nine_digit_czech_mobile_gets_the_default_prefix() {
        assert_eq!(canonicalize("603123456"), "+420603123456");
        assert_eq!(canonicalize("721123456"), "+420721123456");
        // wrong leading digit or wrong length stays as-is
        assert_eq!(canonicalize("123456789"), "123456789");
        assert_eq!(canonicalize("60312345"), "60312345");
    }

    #[test]
    fn already_canonical_input_borrows() {
        assert!(matches!(
            canonicalize("+420601234567"),
            Cow::Borrowed("+420601234567")
        ));
    }

    #[test]
    fn prefix_dispatch_order() {
        assert_eq!(rule_for_prefix("+420601234567").unwrap().country, Country::Cz);
        assert_eq!(rule_for_prefix("+436601234567").unwrap().country, Country::At);
        assert_eq!(rule_for_prefix("+353861234567").unwrap().country, Country::Ie);
        assert!(rule_for_prefix("+1555123456").is_none());
        assert!(rule_for_prefix("601234567").is_none());
    }
}
