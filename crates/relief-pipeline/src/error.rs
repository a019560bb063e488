use std::path::PathBuf;
use thiserror::Error;

/// Returned by `validate` when a table passes every check.
pub const VALID_MESSAGE: &str = "CSV is valid";

/// How many offending severity rows are spelled out in the diagnostic.
const MAX_REPORTED_OFFENDERS: usize = 3;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Expected {expected} fields in line {line}, saw {found}")]
    RowTooLong { line: u64, expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, TableError>;

/// A data row whose severity label is missing or not one of the four levels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeverityOffender {
    /// 1-indexed data row, header excluded.
    pub row: usize,
    pub value: String,
}

impl std::fmt::Display for SeverityOffender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Row {}: '{}'", self.row, self.value)
    }
}

/// Why a table was refused. Checks run in declaration order and stop at the
/// first failing category.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("File does not exist")]
    FileMissing { path: PathBuf },

    #[error("Error reading file: {reason}")]
    Unreadable { reason: String },

    #[error("CSV file is empty")]
    EmptyInput,

    #[error("Missing columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("{column} must contain valid numbers only")]
    NonNumericField { column: String },

    #[error(
        "Invalid Severity_Level values. Must be Low, Medium, High, or Critical. Found: {}",
        format_offenders(.0)
    )]
    InvalidSeverity(Vec<SeverityOffender>),
}

impl ValidationError {
    /// Stable machine-readable tag for API consumers.
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::FileMissing { .. } => "file_missing",
            ValidationError::Unreadable { .. } => "unreadable",
            ValidationError::EmptyInput => "empty_input",
            ValidationError::MissingColumns(_) => "missing_columns",
            ValidationError::NonNumericField { .. } => "non_numeric_field",
            ValidationError::InvalidSeverity(_) => "invalid_severity",
        }
    }
}

fn format_offenders(offenders: &[SeverityOffender]) -> String {
    offenders
        .iter()
        .take(MAX_REPORTED_OFFENDERS)
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Pass/fail flag plus the human-readable diagnostic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationReport {
    pub valid: bool,
    pub message: String,
}

impl<T> From<&std::result::Result<T, ValidationError>> for ValidationReport {
    fn from(res: &std::result::Result<T, ValidationError>) -> Self {
        match res {
            Ok(_) => Self { valid: true, message: VALID_MESSAGE.to_string() },
            Err(e) => Self { valid: false, message: e.to_string() },
        }
    }
}
