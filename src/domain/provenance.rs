//! Provenance tagging
//!
//! Every row of a combined table records which original input it came from.
//! The tag is kept as a categorical column: a [`SourceDomain`] listing the
//! known identifiers, plus one domain index per row. Grouping by tag at split
//! time is therefore total: every row maps to exactly one known source.
//!
//! On disk the tag is an ordinary column named
//! [`PROVENANCE_COLUMN`](crate::config::PROVENANCE_COLUMN), appended after all
//! data columns.

use std::fmt;
use std::path::Path;

use serde::Serialize;

use super::table::{Column, Table};
use crate::config::PROVENANCE_COLUMN;
use crate::error::Result;
use crate::error::merge::invalid_source_id;
use crate::error::split::{missing_provenance_column, missing_provenance_value};

/// Identifier of an original input table (a file name or a role such as `train`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SourceId(String);

impl SourceId {
    /// Create an identifier; empty or whitespace-only names are rejected
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(invalid_source_id("identifier must not be empty"));
        }
        Ok(Self(id))
    }

    /// Identifier derived from an input path: its file name
    pub fn from_path(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        if name.is_empty() {
            return Err(invalid_source_id(format!(
                "cannot derive a name from '{}'",
                path.display()
            )));
        }
        Self::new(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SourceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Ordered, duplicate-free set of source identifiers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceDomain {
    ids: Vec<SourceId>,
}

impl SourceDomain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an identifier if new; returns its index either way
    pub fn insert(&mut self, id: SourceId) -> usize {
        if let Some(index) = self.index_of(id.as_str()) {
            return index;
        }
        self.ids.push(id);
        self.ids.len() - 1
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.ids.iter().position(|known| known.as_str() == id)
    }

    pub fn get(&self, index: usize) -> Option<&SourceId> {
        self.ids.get(index)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SourceId> {
        self.ids.iter()
    }
}

/// A table whose rows carry provenance tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinedTable {
    data: Table,
    domain: SourceDomain,
    tags: Vec<usize>,
}

impl CombinedTable {
    /// Assemble from parts. Every tag must index into `domain` and there must
    /// be one tag per data row.
    pub(crate) fn from_parts(data: Table, domain: SourceDomain, tags: Vec<usize>) -> Self {
        debug_assert_eq!(data.row_count(), tags.len());
        debug_assert!(tags.iter().all(|&t| t < domain.len()));
        debug_assert!(!data.contains_column(PROVENANCE_COLUMN));
        Self { data, domain, tags }
    }

    /// Recover the provenance tag from a loaded table.
    ///
    /// The domain is built from the distinct tag values in first-seen order.
    /// Fails if the provenance column is absent or any row has no tag.
    pub fn from_table(mut table: Table) -> Result<Self> {
        let tag_column = table
            .remove_column(PROVENANCE_COLUMN)
            .ok_or_else(|| missing_provenance_column(PROVENANCE_COLUMN))?;

        let mut domain = SourceDomain::new();
        let mut tags = Vec::with_capacity(tag_column.len());
        for (row, cell) in tag_column.into_cells().into_iter().enumerate() {
            let value = cell.ok_or_else(|| missing_provenance_value(PROVENANCE_COLUMN, row + 1))?;
            let id = SourceId::new(value)
                .map_err(|_| missing_provenance_value(PROVENANCE_COLUMN, row + 1))?;
            tags.push(domain.insert(id));
        }

        Ok(Self::from_parts(table, domain, tags))
    }

    /// Flatten back into a plain table with the provenance column last
    pub fn to_table(&self) -> Table {
        let mut table = self.data.clone();
        let cells = self
            .tags
            .iter()
            .map(|&t| self.domain.get(t).map(|id| id.as_str().to_string()))
            .collect();
        let pushed = table.push_column(Column::new(PROVENANCE_COLUMN, cells));
        debug_assert!(pushed.is_ok(), "data table holds the provenance column");
        table
    }

    /// First `n` rows with their tags, for previews
    pub fn head(&self, n: usize) -> Self {
        let n = n.min(self.row_count());
        Self::from_parts(self.data.head(n), self.domain.clone(), self.tags[..n].to_vec())
    }

    /// Data columns, without the provenance tag
    pub fn data(&self) -> &Table {
        &self.data
    }

    pub fn domain(&self) -> &SourceDomain {
        &self.domain
    }

    /// Per-row domain indices
    pub fn tags(&self) -> &[usize] {
        &self.tags
    }

    pub fn row_count(&self) -> usize {
        self.data.row_count()
    }

    /// Tag of one row
    pub fn source_of(&self, row: usize) -> Option<&SourceId> {
        self.tags.get(row).and_then(|&t| self.domain.get(t))
    }

    /// Number of rows tagged with `id`
    pub fn rows_from(&self, id: &str) -> usize {
        match self.domain.index_of(id) {
            Some(index) => self.tags.iter().filter(|&&t| t == index).count(),
            None => 0,
        }
    }

    /// Distinct tags that actually occur, in first-seen row order
    pub fn observed_sources(&self) -> Vec<&SourceId> {
        let mut seen = vec![false; self.domain.len()];
        let mut observed = Vec::new();
        for &tag in &self.tags {
            if !seen[tag] {
                seen[tag] = true;
                if let Some(id) = self.domain.get(tag) {
                    observed.push(id);
                }
            }
        }
        observed
    }

    /// Replace the data columns, keeping tags. Row counts must match.
    pub(crate) fn with_data(self, data: Table) -> Self {
        Self::from_parts(data, self.domain, self.tags)
    }
}
