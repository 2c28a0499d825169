use std::path::{Path, PathBuf};

use log::{info, warn};
use thiserror::Error;

use crate::pipeline::OrderRow;

/// Columns the order export must carry. `language` and `name_sponsor` are
/// consumed when present and defaulted otherwise.
pub const REQUIRED_COLUMNS: &[&str] = &["id_order", "date_order", "note"];

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("{path} is missing the required column `{column}`")]
    MissingColumn { path: PathBuf, column: &'static str },
}

/// Reads a tab-separated order export into memory.
///
/// A missing required column is fatal for the file. A row that fails to
/// deserialize (unparseable id, ragged line) is logged and skipped so one
/// malformed row cannot abort the rest of the dataset.
pub fn read_orders(path: &Path) -> Result<Vec<OrderRow>, SourceError> {
    info!("reading input file: {}", path.display());
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .from_path(path)
        .map_err(|source| SourceError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let headers = reader.headers().map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == *column) {
            return Err(SourceError::MissingColumn {
                path: path.to_path_buf(),
                column,
            });
        }
    }

    let mut rows = Vec::new();
    for (index, result) in reader.deserialize::<OrderRow>().enumerate() {
        match result {
            Ok(row) => rows.push(row),
            // +2: one for the header line, one for 1-based numbering
            Err(err) => warn!(
                "skipping malformed row {} of {}: {}",
                index + 2,
                path.display(),
                err
            ),
        }
    }
    Ok(rows)
}
