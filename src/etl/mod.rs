//! Blocking I/O boundaries of the batch job: the tab-separated order-export
//! source and the CSV/report sinks.

pub mod sink;
pub mod source;

pub use sink::{date_range_from_filename, write_artifacts, ArtifactPaths, SinkError};
pub use source::{read_orders, SourceError, REQUIRED_COLUMNS};
