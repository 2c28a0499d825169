//! Dedup/aggregation over the scan results of a whole order export, plus the
//! summary report derived from the valid table.

pub mod process;
pub mod records;
pub mod report;

pub use process::{run_pipeline, PipelineOutput};
pub use records::{InvalidRecord, OrderRow, PhoneRecord};
pub use report::Summary;
