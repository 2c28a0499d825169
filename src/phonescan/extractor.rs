use std::collections::HashSet;

use super::SCAN_REGEXPS;

/// Scans a free-text note for substrings that plausibly encode phone numbers.
///
/// The note is split on comma/semicolon/newline boundaries, since notes
/// typically list contacts separated by those characters. Within each part
/// the domestic 9-digit heuristic runs first, then the international
/// patterns. Extraction is deliberately separate from validation: a malformed
/// number still becomes a candidate so it can be surfaced for manual review
/// instead of being silently discarded.
///
/// Returned candidates are in first-seen order with exact-string duplicates
/// removed. Differently formatted captures of the same number (with and
/// without spaces, say) are distinct candidates at this stage.
pub fn extract_candidates(note: &str) -> Vec<String> {
    let regexps = &*SCAN_REGEXPS;
    let mut found: Vec<String> = Vec::new();

    for part in regexps.part_separator.split(note) {
        if !regexps.has_digit.is_match(part) {
            continue;
        }

        for caps in regexps.domestic.captures_iter(part) {
            let number = &caps[1];
            if digit_count(number) == 9 {
                found.push(number.to_string());
            }
        }

        for pattern in &regexps.international {
            for matched in pattern.find_iter(part) {
                // The bare-prefix pattern captures its non-digit delimiters.
                let number = matched
                    .as_str()
                    .trim_matches(|c: char| !c.is_ascii_digit() && c != '+');
                if digit_count(number) >= 9 {
                    found.push(number.to_string());
                }
            }
        }
    }

    let mut seen = HashSet::new();
    found.retain(|number| seen.insert(number.clone()));
    found
}

fn digit_count(s: &str) -> usize {
    s.chars().filter(char::is_ascii_digit).count()
}
