use serde::{Deserialize, Serialize, Serializer};

use crate::phonescan::Country;

/// One row of the tab-separated order export. `language` and `name_sponsor`
/// are optional columns; the campaign language is decided by the number's
/// country, so a recorded language is carried but never trusted.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderRow {
    pub id_order: i64,
    pub date_order: String,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub name_sponsor: Option<String>,
}

/// A validated phone number tied to its originating order.
///
/// Field order doubles as the sort key: `(id_order, date_order,
/// phone_number)` leads, so deriving `Ord` gives the output sort contract.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct PhoneRecord {
    pub id_order: i64,
    pub date_order: String,
    pub phone_number: String,
    pub country: Country,
    pub language: String,
    pub name_sponsor: String,
}

/// A candidate that failed classification or validation, kept for manual
/// review with its best-effort canonical attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvalidRecord {
    pub id_order: i64,
    pub date_order: String,
    pub original_number: String,
    #[serde(serialize_with = "none_literal")]
    pub attempted_clean: Option<String>,
    #[serde(serialize_with = "none_literal_country")]
    pub attempted_country: Option<Country>,
}

// The historical review files spell absent attempts as the literal `None`;
// downstream tooling greps for it.
fn none_literal<S: Serializer>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(value.as_deref().unwrap_or("None"))
}

fn none_literal_country<S: Serializer>(
    value: &Option<Country>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(value.map(Country::iso_code).unwrap_or("None"))
}
