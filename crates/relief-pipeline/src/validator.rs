use std::path::Path;

use relief_model::{Severity, COL_FAMILIES, COL_POPULATION, COL_SEVERITY, REQUIRED_COLUMNS};
use tracing::debug;

use crate::coerce::coerce_count;
use crate::error::{SeverityOffender, ValidationError};
use crate::table::RawTable;

/// Check an already-parsed table. Order: emptiness, missing columns,
/// population numeric, families numeric, severity labels.
pub fn validate(table: &RawTable) -> Result<(), ValidationError> {
    if table.is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|c| !table.has_column(c))
        .map(|c| c.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ValidationError::MissingColumns(missing));
    }

    for column in [COL_POPULATION, COL_FAMILIES] {
        check_numeric(table, column)?;
    }

    let offenders = severity_offenders(table);
    if !offenders.is_empty() {
        debug!(count = offenders.len(), "rows with invalid severity");
        return Err(ValidationError::InvalidSeverity(offenders));
    }

    Ok(())
}

/// Existence and readability checks, then `validate`. Hands back the parsed
/// table so callers never read the file twice.
pub fn validate_path(path: &Path) -> Result<RawTable, ValidationError> {
    if !path.exists() {
        return Err(ValidationError::FileMissing { path: path.to_path_buf() });
    }

    let table = RawTable::read_path(path)
        .map_err(|e| ValidationError::Unreadable { reason: e.to_string() })?;
    validate(&table)?;
    Ok(table)
}

fn check_numeric(table: &RawTable, column: &str) -> Result<(), ValidationError> {
    let Some(idx) = table.column_index(column) else {
        return Err(ValidationError::MissingColumns(vec![column.to_string()]));
    };

    if let Some(row) = table.column(idx).position(|cell| coerce_count(cell).is_none()) {
        debug!(column, row = row + 1, "non-numeric cell");
        return Err(ValidationError::NonNumericField { column: column.to_string() });
    }
    Ok(())
}

fn severity_offenders(table: &RawTable) -> Vec<SeverityOffender> {
    let Some(idx) = table.column_index(COL_SEVERITY) else {
        return vec![];
    };

    table
        .column(idx)
        .enumerate()
        .filter(|(_, label)| Severity::parse(label).is_none())
        .map(|(i, label)| SeverityOffender { row: i + 1, value: label.to_string() })
        .collect()
}
