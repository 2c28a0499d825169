//! Phone-number harvesting for outreach campaigns: scans free-text order
//! notes for mobile numbers, canonicalizes and validates them per country,
//! deduplicates the results and splits the unique-number dataset into
//! date-preserving batches.

pub mod batch;
pub mod etl;
pub mod phonescan;
pub mod pipeline;

pub(crate) mod regex_util;
pub(crate) mod regexp_cache;
