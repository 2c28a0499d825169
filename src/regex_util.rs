use regex::Regex;

/// Exact whole-string matching. The rule-table patterns are stored without
/// anchors; validation must never accept a partial or superset match.
pub trait RegexFullMatch {
    fn full_match(&self, s: &str) -> bool;
}

impl RegexFullMatch for Regex {
    fn full_match(&self, s: &str) -> bool {
        if let Some(matched) = self.find(s) {
            return matched.start() == 0 && matched.end() == s.len();
        }
        false
    }
}
