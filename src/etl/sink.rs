use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use log::{info, warn};
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::pipeline::{PipelineOutput, Summary};

/// `YYYY-MM-DD_YYYY-MM-DD` token carried in export filenames.
static DATE_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}-\d{2}-\d{2}_\d{4}-\d{2}-\d{2}").unwrap());

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("could not write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Where one run's artifacts ended up.
#[derive(Debug)]
pub struct ArtifactPaths {
    pub valid: PathBuf,
    pub invalid: PathBuf,
    pub unique: PathBuf,
    pub log: PathBuf,
}

/// Date-range token for output naming, taken from the input filename.
///
/// When the token is absent the current date is substituted for both bounds.
/// That mislabels reruns of old exports, so the fallback is logged loudly;
/// changing the behavior needs an explicit contract change with downstream.
pub fn date_range_from_filename(input_path: &Path) -> String {
    let filename = input_path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    if let Some(found) = DATE_RANGE.find(&filename) {
        return found.as_str().to_string();
    }
    let today = chrono::Local::now().format("%Y-%m-%d");
    let range = format!("{today}_{today}");
    warn!(
        "no date-range token in input filename {filename:?}; output will be labeled {range}"
    );
    range
}

/// Writes the three CSV artifacts and the summary log. Any write failure is
/// fatal; nothing tries to clean up a partially written file silently.
pub fn write_artifacts(
    output_dir: &Path,
    input_path: &Path,
    output: &PipelineOutput,
    summary: &Summary,
) -> Result<ArtifactPaths, SinkError> {
    fs::create_dir_all(output_dir).map_err(|source| SinkError::Io {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let date_range = date_range_from_filename(input_path);
    let paths = ArtifactPaths {
        valid: output_dir.join(format!("phone_numbers_{date_range}.csv")),
        invalid: output_dir.join(format!("invalid_numbers_{date_range}.csv")),
        unique: output_dir.join(format!("phone_numbers_unique_{date_range}.csv")),
        log: output_dir.join(format!("phone_numbers_{date_range}.log")),
    };

    info!(
        "saving {} valid numbers to: {}",
        output.valid.len(),
        paths.valid.display()
    );
    write_csv(&paths.valid, &output.valid)?;

    info!(
        "saving {} invalid numbers to: {}",
        output.invalid.len(),
        paths.invalid.display()
    );
    write_csv(&paths.invalid, &output.invalid)?;

    info!(
        "saving {} unique numbers to: {}",
        output.unique.len(),
        paths.unique.display()
    );
    write_csv(&paths.unique, &output.unique)?;

    fs::write(&paths.log, summary.render(input_path, &date_range)).map_err(|source| {
        SinkError::Io {
            path: paths.log.clone(),
            source,
        }
    })?;
    info!("detailed log saved to: {}", paths.log.display());

    Ok(paths)
}

fn write_csv<T: Serialize>(path: &Path, records: &[T]) -> Result<(), SinkError> {
    let wrap = |source: csv::Error| SinkError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = csv::Writer::from_path(path).map_err(wrap)?;
    for record in records {
        writer.serialize(record).map_err(wrap)?;
    }
    writer.flush().map_err(|source| SinkError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::pipeline::{run_pipeline, OrderRow};

    #[test]
    fn date_range_comes_from_the_filename() {
        assert_eq!(
            date_range_from_filename(Path::new("data/orders_2024-12-01_2025-03-31.tsv")),
            "2024-12-01_2025-03-31"
        );
    }

    #[test]
    fn missing_token_falls_back_to_today() {
        let range = date_range_from_filename(Path::new("orders.tsv"));
        let today = chrono::Local::now().format("%Y-%m-%d").to_string();
        assert_eq!(range, format!("{today}_{today}"));
    }

    #[test]
    fn writes_all_four_artifacts() {
        let rows = vec![OrderRow {
            id_order: 1,
            date_order: "2025-01-02".to_string(),
            note: Some("603 123 456, 12345x".to_string()),
            language: None,
            name_sponsor: None,
        }];
        let output = run_pipeline(&rows);
        let summary = Summary::from_tables(&rows, &output);

        let dir = tempdir().unwrap();
        let paths = write_artifacts(
            dir.path(),
            Path::new("orders_2025-01-01_2025-01-31.tsv"),
            &output,
            &summary,
        )
        .unwrap();

        let valid = fs::read_to_string(&paths.valid).unwrap();
        assert!(valid.starts_with(
            "id_order,date_order,phone_number,country,language,name_sponsor\n"
        ));
        assert!(valid.contains("1,2025-01-02,+420603123456,CZ,cs,\n"));

        let unique = fs::read_to_string(&paths.unique).unwrap();
        assert_eq!(valid, unique);

        let log = fs::read_to_string(&paths.log).unwrap();
        assert!(log.contains("Date range: 2025-01-01_2025-01-31"));

        assert!(paths.invalid.exists());
    }

    #[test]
    fn invalid_artifact_spells_absent_attempts_as_none() {
        let rows = vec![OrderRow {
            id_order: 5,
            date_order: "2025-01-02".to_string(),
            note: Some("+420 801 234 567".to_string()),
            language: None,
            name_sponsor: None,
        }];
        let output = run_pipeline(&rows);
        let summary = Summary::from_tables(&rows, &output);

        let dir = tempdir().unwrap();
        let paths = write_artifacts(
            dir.path(),
            Path::new("orders_2025-01-01_2025-01-31.tsv"),
            &output,
            &summary,
        )
        .unwrap();

        let invalid = fs::read_to_string(&paths.invalid).unwrap();
        assert!(invalid.starts_with(
            "id_order,date_order,original_number,attempted_clean,attempted_country\n"
        ));
        assert!(invalid.contains("5,2025-01-02,+420 801 234 567,+420801234567,CZ\n"));
    }

    #[test]
    fn unwritable_directory_is_fatal() {
        let rows: Vec<OrderRow> = Vec::new();
        let output = run_pipeline(&rows);
        let summary = Summary::from_tables(&rows, &output);
        assert!(write_artifacts(
            Path::new("/proc/no-such-dir/out"),
            Path::new("orders_2025-01-01_2025-01-31.tsv"),
            &output,
            &summary,
        )
        .is_err());
    }
}
