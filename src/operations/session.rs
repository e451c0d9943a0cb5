//! Explicit session state threaded between the three stages
//!
//! A [`Session`] holds at most one combined table. Merge sets it, feature
//! generation replaces it only when it succeeds, split reads it. A failing
//! stage leaves the held table exactly as it was, so the caller can retry
//! with corrected parameters without re-reading any input.

use tracing::debug;

use super::features::generate;
use super::merge::{MergeInput, merge};
use super::split::{Split, split};
use crate::advisory::SchemaMismatch;
use crate::domain::{CombinedTable, FeatureSet};
use crate::error::Result;

/// In-memory state of one interactive session
#[derive(Debug, Clone, Default)]
pub struct Session {
    combined: Option<CombinedTable>,
}

impl Session {
    /// A fresh session with nothing merged yet
    pub fn new() -> Self {
        Self::default()
    }

    /// The table currently held, if any
    pub fn combined(&self) -> Option<&CombinedTable> {
        self.combined.as_ref()
    }

    /// Merge two inputs and hold the result. Returns the schema advisory, if any.
    pub fn merge(
        &mut self,
        first: MergeInput<'_>,
        second: MergeInput<'_>,
        label_column: Option<&str>,
    ) -> Result<Option<SchemaMismatch>> {
        let merged = merge(first, second, label_column)?;
        self.combined = Some(merged.table);
        debug!("session holds merged table");
        Ok(merged.schema_mismatch)
    }

    /// Generate date features on the held table.
    ///
    /// Returns `Ok(false)` when nothing has been merged yet.
    pub fn generate_features(&mut self, datetime_column: &str, features: &FeatureSet) -> Result<bool> {
        let Some(current) = self.combined.as_ref() else {
            return Ok(false);
        };
        let updated = generate(current, datetime_column, features)?;
        self.combined = Some(updated);
        Ok(true)
    }

    /// Split the held table, if any
    pub fn split(&self) -> Option<Split> {
        self.combined.as_ref().map(split)
    }
}
