//! Command helper utilities

use std::path::Path;

use tracing::debug;

use crate::cli::FeatureSelection;
use crate::common::csv_codec::{read_table, write_table};
use crate::domain::{CombinedTable, FeatureSet, SourceId};
use crate::error::Result;

/// Resolve a source identifier: the explicit name if given, else the file name
pub fn resolve_source_id(name: Option<&str>, path: &Path) -> Result<SourceId> {
    match name {
        Some(name) => SourceId::new(name),
        None => SourceId::from_path(path),
    }
}

/// Resolve the requested features. No list (or `--all-features`) means all.
pub fn resolve_features(selection: &FeatureSelection) -> Result<FeatureSet> {
    if selection.all_features || selection.features.is_empty() {
        return Ok(FeatureSet::all());
    }
    FeatureSet::parse(&selection.features)
}

/// Load a previously saved combined file
pub fn load_combined(path: &Path) -> Result<CombinedTable> {
    let table = read_table(path)?;
    let combined = CombinedTable::from_table(table)?;
    debug!(
        path = %path.display(),
        rows = combined.row_count(),
        sources = combined.domain().len(),
        "loaded combined table"
    );
    Ok(combined)
}

/// Save a combined table with the provenance column last
pub fn save_combined(path: &Path, combined: &CombinedTable) -> Result<()> {
    write_table(path, &combined.to_table())
}
