use std::fmt;

use serde::{Serialize, Serializer};
use strum::EnumIter;

/// The markets the outreach campaign dials. Fixed set; adding a country is a
/// rule-table change in `rules.rs`, not a code change elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
pub enum Country {
    Cz,
    De,
    Pl,
    Nl,
    Ie,
    Il,
    At,
}

impl Country {
    pub fn iso_code(self) -> &'static str {
        match self {
            Country::Cz => "CZ",
            Country::De => "DE",
            Country::Pl => "PL",
            Country::Nl => "NL",
            Country::Ie => "IE",
            Country::Il => "IL",
            Country::At => "AT",
        }
    }

    pub fn calling_code(self) -> u16 {
        match self {
            Country::Cz => 420,
            Country::De => 49,
            Country::Pl => 48,
            Country::Nl => 31,
            Country::Ie => 353,
            Country::Il => 972,
            Country::At => 43,
        }
    }

    /// Campaign language for a number. Decided by country alone; any language
    /// recorded on the source row is overridden.
    pub fn language(self) -> &'static str {
        match self {
            Country::Cz => "cs",
            Country::De | Country::At => "de",
            Country::Pl => "pl",
            _ => "en",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.iso_code())
    }
}

impl Serialize for Country {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.iso_code())
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn calling_codes_are_unique() {
        let codes: Vec<u16> = Country::iter().map(Country::calling_code).collect();
        let mut deduped = codes.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(codes.len(), deduped.len());
    }

    #[test]
    fn language_overrides() {
        assert_eq!(Country::Cz.language(), "cs");
        assert_eq!(Country::De.language(), "de");
        assert_eq!(Country::At.language(), "de");
        assert_eq!(Country::Pl.language(), "pl");
        assert_eq!(Country::Nl.language(), "en");
        assert_eq!(Country::Ie.language(), "en");
        assert_eq!(Country::Il.language(), "en");
    }
}
