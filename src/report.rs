//! Machine-readable summaries of each command
//!
//! Every command builds one of these reports. Text output renders them through
//! `ui::display`; `--json` serializes them as-is.

use std::path::Path;

use serde::Serialize;

use crate::advisory::{SchemaMismatch, UnexpectedGroupCount};
use crate::config::PROVENANCE_COLUMN;
use crate::domain::{CombinedTable, SourceId, Table};

/// Row count contributed by one source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceCount {
    pub source: String,
    pub rows: usize,
}

impl SourceCount {
    fn of(table: &CombinedTable, id: &SourceId) -> Self {
        Self {
            source: id.as_str().to_string(),
            rows: table.rows_from(id.as_str()),
        }
    }

    /// Counts for every declared source, including ones with no rows
    pub fn declared(table: &CombinedTable) -> Vec<Self> {
        table.domain().iter().map(|id| Self::of(table, id)).collect()
    }

    /// Counts for the sources that actually occur, in first-seen order
    pub fn observed(table: &CombinedTable) -> Vec<Self> {
        table
            .observed_sources()
            .into_iter()
            .map(|id| Self::of(table, id))
            .collect()
    }
}

/// Result of `rejoin merge`
#[derive(Debug, Clone, Serialize)]
pub struct MergeReport {
    pub output: String,
    pub rows: usize,
    pub columns: Vec<String>,
    pub sources: Vec<SourceCount>,
    pub label_column: Option<String>,
    /// Source whose rows carry an empty label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlabelled_source: Option<String>,
    pub schema_mismatch: Option<SchemaMismatch>,
    /// Present when features were generated as part of the merge
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<FeatureReport>,
}

impl MergeReport {
    pub fn new(
        output: &Path,
        combined: &CombinedTable,
        label_column: Option<&str>,
        schema_mismatch: Option<SchemaMismatch>,
    ) -> Self {
        let unlabelled_source = label_column
            .and(combined.domain().get(1))
            .map(|id| id.as_str().to_string());
        Self {
            output: output.display().to_string(),
            rows: combined.row_count(),
            columns: combined_columns(combined),
            sources: SourceCount::declared(combined),
            label_column: label_column.map(ToString::to_string),
            unlabelled_source,
            schema_mismatch,
            features: None,
        }
    }

    pub fn with_features(mut self, features: FeatureReport) -> Self {
        self.columns.clone_from(&features.columns);
        self.features = Some(features);
        self
    }
}

/// Result of `rejoin features` (or the feature step of `rejoin merge`)
#[derive(Debug, Clone, Serialize)]
pub struct FeatureReport {
    pub output: String,
    pub datetime_column: String,
    pub added_columns: Vec<String>,
    pub rows: usize,
    pub columns: Vec<String>,
}

impl FeatureReport {
    pub fn new(
        output: &Path,
        datetime_column: &str,
        before: &CombinedTable,
        after: &CombinedTable,
    ) -> Self {
        let added_columns = after
            .data()
            .column_names()
            .filter(|name| !before.data().contains_column(name))
            .map(ToString::to_string)
            .collect();
        Self {
            output: output.display().to_string(),
            datetime_column: datetime_column.to_string(),
            added_columns,
            rows: after.row_count(),
            columns: combined_columns(after),
        }
    }
}

/// One file written by `rejoin split`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitFile {
    pub source: String,
    pub path: String,
    pub rows: usize,
    pub columns: usize,
}

/// Result of `rejoin split`
#[derive(Debug, Clone, Serialize)]
pub struct SplitReport {
    pub input: String,
    pub files: Vec<SplitFile>,
    pub group_count: Option<UnexpectedGroupCount>,
}

/// Result of `rejoin preview`
#[derive(Debug, Clone, Serialize)]
pub struct PreviewReport {
    pub path: String,
    pub columns: Vec<String>,
    /// First rows, missing cells as `null`
    pub head: Vec<Vec<Option<String>>>,
    pub rows: usize,
    /// Distinct provenance values, if the file carries the provenance column
    pub sources: Option<Vec<SourceCount>>,
}

impl PreviewReport {
    pub fn new(path: &Path, table: &Table, head_rows: usize, sources: Option<Vec<SourceCount>>) -> Self {
        let head = table
            .head(head_rows)
            .rows()
            .map(|row| row.into_iter().map(|cell| cell.map(ToString::to_string)).collect())
            .collect();
        Self {
            path: path.display().to_string(),
            columns: table.column_names().map(ToString::to_string).collect(),
            head,
            rows: table.row_count(),
            sources,
        }
    }
}

impl PreviewReport {
    /// Preview of an in-memory combined table, provenance column included.
    /// `label` stands in for the path in the heading.
    pub fn combined(label: &str, combined: &CombinedTable, head_rows: usize) -> Self {
        Self::new(
            Path::new(label),
            &combined.head(head_rows).to_table(),
            head_rows,
            Some(SourceCount::observed(combined)),
        )
        .with_rows(combined.row_count())
    }

    fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }
}

/// Column names as written to disk, provenance last
fn combined_columns(combined: &CombinedTable) -> Vec<String> {
    combined
        .data()
        .column_names()
        .map(ToString::to_string)
        .chain(std::iter::once(PROVENANCE_COLUMN.to_string()))
        .collect()
}
