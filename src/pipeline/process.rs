use std::collections::HashSet;

use log::debug;

use super::records::{InvalidRecord, OrderRow, PhoneRecord};
use crate::phonescan::{extract_candidates, scan_candidate, ScanOutcome};

/// The three tables the pipeline produces. `unique` is derived from `valid`
/// and is what the downstream batcher consumes.
#[derive(Debug, Default)]
pub struct PipelineOutput {
    /// Sorted by `(id_order, date_order, phone_number)`, exact duplicates
    /// removed.
    pub valid: Vec<PhoneRecord>,
    /// Insertion order; one row per rejected candidate.
    pub invalid: Vec<InvalidRecord>,
    /// First occurrence per distinct phone number, in `valid`'s sort order.
    pub unique: Vec<PhoneRecord>,
}

/// Runs extraction, classification and validation over every row, then
/// deduplicates. Pure with respect to its input; rows without a note
/// contribute nothing.
pub fn run_pipeline(rows: &[OrderRow]) -> PipelineOutput {
    let mut valid: Vec<PhoneRecord> = Vec::new();
    let mut invalid: Vec<InvalidRecord> = Vec::new();

    for row in rows {
        let Some(note) = row.note.as_deref() else {
            continue;
        };
        for candidate in extract_candidates(note) {
            match scan_candidate(&candidate) {
                ScanOutcome::Valid { number, country } => valid.push(PhoneRecord {
                    id_order: row.id_order,
                    date_order: row.date_order.clone(),
                    phone_number: number,
                    country,
                    language: country.language().to_string(),
                    name_sponsor: row.name_sponsor.clone().unwrap_or_default(),
                }),
                ScanOutcome::Invalid {
                    original,
                    attempted,
                    country,
                } => invalid.push(InvalidRecord {
                    id_order: row.id_order,
                    date_order: row.date_order.clone(),
                    original_number: original,
                    attempted_clean: attempted,
                    attempted_country: country,
                }),
            }
        }
    }

    valid.sort();
    valid.dedup();
    debug!(
        "pipeline produced {} valid and {} invalid records",
        valid.len(),
        invalid.len()
    );

    let unique = first_per_number(&valid);
    PipelineOutput {
        valid,
        invalid,
        unique,
    }
}

fn first_per_number(valid: &[PhoneRecord]) -> Vec<PhoneRecord> {
    let mut seen = HashSet::new();
    valid
        .iter()
        .filter(|record| seen.insert(record.phone_number.clone()))
        .cloned()
        .collect()
}
