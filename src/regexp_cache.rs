use std::sync::Arc;

use dashmap::DashMap;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("could not compile regex: {0}")]
pub struct InvalidRegexError(#[from] regex::Error);

/// Compile-once cache for patterns that come from the rule table rather than
/// from source code, so callers can treat rule entries as plain data.
pub struct RegexCache {
    cache: DashMap<String, Arc<regex::Regex>>,
}

impl RegexCache {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: DashMap::with_capacity(capacity),
        }
    }

    pub fn compile(&self, pattern: &str) -> Result<Arc<regex::Regex>, InvalidRegexError> {
        if let Some(regex) = self.cache.get(pattern) {
            return Ok(regex.value().clone());
        }
        let entry = self
            .cache
            .entry(pattern.to_string())
            .or_try_insert_with(|| regex::Regex::new(pattern).map(Arc::new))?;
        Ok(entry.value().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiles_once_and_reports_bad_patterns() {
        let cache = RegexCache::with_capacity(4);
        let first = cache.compile(r"\d{9}").unwrap();
        let second = cache.compile(r"\d{9}").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert!(cache.compile(r"[").is_err());
    }
}
