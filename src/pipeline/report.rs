use std::collections::HashSet;
use std::fmt::Write as _;
use std::path::Path;

use strum::IntoEnumIterator;

use super::process::PipelineOutput;
use super::records::OrderRow;
use crate::phonescan::Country;

/// Counts derived from the pipeline tables. A pure function of its inputs;
/// building the summary never alters the tables.
#[derive(Debug, PartialEq, Eq)]
pub struct Summary {
    pub total_orders: usize,
    pub valid: usize,
    pub unique: usize,
    pub invalid: usize,
    /// Descending by count, ties broken by ISO code.
    pub by_country: Vec<(Country, usize)>,
    /// Descending by count, ties broken by language tag.
    pub by_language: Vec<(&'static str, usize)>,
}

impl Summary {
    pub fn from_tables(rows: &[OrderRow], output: &PipelineOutput) -> Self {
        let total_orders = rows
            .iter()
            .map(|row| row.id_order)
            .collect::<HashSet<_>>()
            .len();

        let mut by_country: Vec<(Country, usize)> = Country::iter()
            .map(|country| {
                let count = output
                    .valid
                    .iter()
                    .filter(|record| record.country == country)
                    .count();
                (country, count)
            })
            .filter(|(_, count)| *count > 0)
            .collect();
        by_country.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.iso_code().cmp(b.0.iso_code())));

        let mut by_language: Vec<(&'static str, usize)> = Vec::new();
        for (country, count) in &by_country {
            let language = country.language();
            match by_language.iter_mut().find(|(tag, _)| *tag == language) {
                Some(entry) => entry.1 += count,
                None => by_language.push((language, *count)),
            }
        }
        by_language.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));

        Self {
            total_orders,
            valid: output.valid.len(),
            unique: output.unique.len(),
            invalid: output.invalid.len(),
            by_country,
            by_language,
        }
    }

    /// Plain-text report written next to the CSV artifacts.
    pub fn render(&self, input_path: &Path, date_range: &str) -> String {
        let completed_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        let mut text = String::new();
        let _ = writeln!(text, "Processing completed at: {completed_at}");
        let _ = writeln!(text, "Input file: {}", input_path.display());
        let _ = writeln!(text, "Date range: {date_range}");
        let _ = writeln!(text, "Total unique orders processed: {}", self.total_orders);
        let _ = writeln!(text, "Total valid phone numbers found: {}", self.valid);
        let _ = writeln!(text, "Total unique phone numbers: {}", self.unique);
        let _ = writeln!(text, "Total invalid phone numbers: {}", self.invalid);

        if !self.by_country.is_empty() {
            let _ = writeln!(text, "\nPhone numbers by country:");
            for (country, count) in &self.by_country {
                let _ = writeln!(text, "  {country}: {count}");
            }
        }
        if !self.by_language.is_empty() {
            let _ = writeln!(text, "\nPhone numbers by language:");
            for (language, count) in &self.by_language {
                let _ = writeln!(text, "  {language}: {count}");
            }
        }
        text
    }
}
