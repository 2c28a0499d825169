//! The parsing core: candidate extraction from free-text notes, lexical
//! normalization, the ordered country rule table and exact mobile-pattern
//! validation. Every stage is a pure function over its input; nothing here
//! touches I/O.

pub mod country;
pub mod extractor;
pub mod normalizer;
pub mod rules;
pub mod validator;
mod scan_regexps;

use std::sync::LazyLock;

pub use country::Country;
pub use extractor::extract_candidates;
pub use normalizer::normalize_candidate;
pub use rules::{CountryRule, COUNTRY_RULES};
pub use validator::{scan_candidate, ScanOutcome};

use scan_regexps::ScanRegexps;
use validator::Validator;

pub(crate) static SCAN_REGEXPS: LazyLock<ScanRegexps> = LazyLock::new(ScanRegexps::new);

static VALIDATOR: LazyLock<Validator> = LazyLock::new(Validator::new);
