use std::path::Path;

use tracing::{info, warn};

use crate::calculator::{calculate, EnrichedTable};
use crate::error::{Result, ValidationError};
use crate::validator::validate_path;

/// Validate the file at `path` and, if it passes, derive its resource
/// columns. Nothing is calculated for a table that fails validation.
pub fn process_path(path: &Path) -> std::result::Result<EnrichedTable, ValidationError> {
    let table = validate_path(path).map_err(|e| {
        warn!(path = %path.display(), kind = e.kind(), "validation failed: {e}");
        e
    })?;

    let enriched = calculate(&table);
    info!(path = %path.display(), rows = enriched.len(), "table processed");
    Ok(enriched)
}

/// Write the enriched table next to its source, in the upload format.
pub fn save_processed(table: &EnrichedTable, output: &Path) -> Result<()> {
    table.save(output)?;
    info!(path = %output.display(), rows = table.len(), "processed table saved");
    Ok(())
}
