//! Flood relief ingestion pipeline
//!
//! Reads an untrusted district table, validates it, and derives the
//! severity-weighted relief resource estimates for every row.

mod error;
mod coerce;
mod table;
mod validator;
mod calculator;
mod process;
mod sample;

pub use error::{TableError, ValidationError, SeverityOffender, ValidationReport, VALID_MESSAGE};
pub use coerce::{coerce_count, coerce_count_or_zero};
pub use table::RawTable;
pub use validator::{validate, validate_path};
pub use calculator::{calculate, compute_resources, EnrichedRow, EnrichedTable};
pub use process::{process_path, save_processed};
pub use sample::{sample_table, SAMPLE_CSV, SAMPLE_FILE_NAME};
