//! Date-preserving batching of the unique-numbers dataset.
//!
//! The downstream messaging campaign works through one file at a time and
//! must always see a calendar date's whole cohort together. Batches are
//! therefore cut on date-group boundaries: a group is never split, even when
//! that makes a single-date batch larger than the configured maximum.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use csv::StringRecord;
use log::info;
use thiserror::Error;

/// Substituted with the zero-padded 1-based batch index.
pub const INDEX_PLACEHOLDER: &str = "{}";

pub const DEFAULT_MAX_BATCH_SIZE: usize = 80;

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("could not create {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("input file has no data rows")]
    EmptyInput,
    #[error("input file has no `date_order` column")]
    MissingDateColumn,
    #[error("output pattern {0:?} does not contain the `{{}}` placeholder")]
    MissingPlaceholder(String),
}

/// Cuts date groups into batches of at most `max_batch_size` records without
/// splitting any group. `date_groups` must already be in ascending date
/// order; batches come out in the same order.
///
/// A group that alone exceeds the maximum forms one oversized batch.
pub fn plan_batches<T>(date_groups: Vec<(String, Vec<T>)>, max_batch_size: usize) -> Vec<Vec<T>> {
    let mut batches: Vec<Vec<T>> = Vec::new();
    let mut current: Vec<T> = Vec::new();

    for (_date, group) in date_groups {
        if !current.is_empty() && current.len() + group.len() > max_batch_size {
            batches.push(std::mem::take(&mut current));
        }
        current.extend(group);
        if current.len() >= max_batch_size {
            batches.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        batches.push(current);
    }
    batches
}

/// Splits a numbers CSV into per-batch files, preserving the input's header
/// and column order. Returns the number of batches written.
pub fn batch_csv_by_date(
    input_path: &Path,
    output_pattern: &str,
    max_batch_size: usize,
) -> Result<usize, BatchError> {
    if !output_pattern.contains(INDEX_PLACEHOLDER) {
        return Err(BatchError::MissingPlaceholder(output_pattern.to_string()));
    }

    let read_err = |source: csv::Error| BatchError::Read {
        path: input_path.to_path_buf(),
        source,
    };
    let mut reader = csv::Reader::from_path(input_path).map_err(read_err)?;
    let header = reader.headers().map_err(read_err)?.clone();
    let date_index = header
        .iter()
        .position(|column| column == "date_order")
        .ok_or(BatchError::MissingDateColumn)?;

    // BTreeMap keys give the ascending date order the planner expects.
    let mut date_groups: BTreeMap<String, Vec<StringRecord>> = BTreeMap::new();
    for record in reader.records() {
        let record = record.map_err(read_err)?;
        let date = record.get(date_index).unwrap_or_default().to_string();
        date_groups.entry(date).or_default().push(record);
    }
    if date_groups.is_empty() {
        return Err(BatchError::EmptyInput);
    }

    let batches = plan_batches(date_groups.into_iter().collect(), max_batch_size);
    for (index, batch) in batches.iter().enumerate() {
        let output_path = PathBuf::from(output_pattern.replacen(
            INDEX_PLACEHOLDER,
            &format!("{:02}", index + 1),
            1,
        ));
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| BatchError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let write_err = |source: csv::Error| BatchError::Write {
            path: output_path.clone(),
            source,
        };
        let mut writer = csv::Writer::from_path(&output_path).map_err(&write_err)?;
        writer.write_record(&header).map_err(&write_err)?;
        for record in batch {
            writer.write_record(record).map_err(&write_err)?;
        }
        writer.flush().map_err(|source| BatchError::Io {
            path: output_path.clone(),
            source,
        })?;
        info!(
            "wrote batch {} with {} records to {}",
            index + 1,
            batch.len(),
            output_path.display()
        );
    }

    Ok(batches.len())
}
