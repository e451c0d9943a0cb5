//! Merge two tables into one provenance-tagged table
//!
//! Rows of the first input come first, then rows of the second, each keeping
//! its original order. The combined column order is the first input's columns
//! followed by the second input's columns that the first lacks. Cells for a
//! column the row's own table did not have are left missing, so a declared
//! label column shows up empty for every row of the second input.

use tracing::{debug, info, warn};

use crate::advisory::SchemaMismatch;
use crate::config::PROVENANCE_COLUMN;
use crate::domain::{Column, ColumnSchema, CombinedTable, SourceDomain, SourceId, Table};
use crate::error::Result;
use crate::error::merge::{empty_schema, invalid_label_column, invalid_source_id, reserved_column};

/// One merge input: a table and the identifier its rows will be tagged with
#[derive(Debug, Clone, Copy)]
pub struct MergeInput<'a> {
    pub table: &'a Table,
    pub id: &'a SourceId,
}

impl<'a> MergeInput<'a> {
    pub fn new(table: &'a Table, id: &'a SourceId) -> Self {
        Self { table, id }
    }
}

/// Result of a merge: the combined table and an optional schema advisory
#[derive(Debug, Clone)]
pub struct Merged {
    pub table: CombinedTable,
    pub schema_mismatch: Option<SchemaMismatch>,
}

/// Compare `schema(first) \ {label}` with `schema(second)`.
///
/// Pure function of the two column-name sets.
pub fn check_schemas(
    first: MergeInput<'_>,
    second: MergeInput<'_>,
    label_column: Option<&str>,
) -> Option<SchemaMismatch> {
    let first_schema = ColumnSchema::of(first.table, label_column);
    let second_schema = ColumnSchema::of(second.table, None);

    if first_schema.same_names(&second_schema) {
        return None;
    }

    Some(SchemaMismatch {
        first: first.id.to_string(),
        second: second.id.to_string(),
        only_in_first: first_schema.difference(&second_schema),
        only_in_second: second_schema.difference(&first_schema),
    })
}

/// Merge `first` and `second`, tagging rows with their input's identifier.
///
/// Blocking failures: an input without columns, empty or equal identifiers, an
/// input already carrying the provenance column, or a label column missing
/// from `first`. A schema difference is only an advisory.
pub fn merge(
    first: MergeInput<'_>,
    second: MergeInput<'_>,
    label_column: Option<&str>,
) -> Result<Merged> {
    validate_inputs(first, second, label_column)?;

    let schema_mismatch = check_schemas(first, second, label_column);
    if let Some(ref mismatch) = schema_mismatch {
        warn!(
            only_in_first = ?mismatch.only_in_first,
            only_in_second = ?mismatch.only_in_second,
            "column names differ between merge inputs"
        );
    }

    let first_rows = first.table.row_count();
    let second_rows = second.table.row_count();
    let total_rows = first_rows + second_rows;

    let mut names: Vec<&str> = first.table.column_names().collect();
    for name in second.table.column_names() {
        if !first.table.contains_column(name) {
            names.push(name);
        }
    }

    let columns = names
        .into_iter()
        .map(|name| {
            let mut column = match first.table.column(name) {
                Some(existing) => existing.clone(),
                None => Column::missing(name, first_rows),
            };
            match second.table.column(name) {
                Some(other) => column.extend(other.cells().iter().cloned()),
                None => column.extend(std::iter::repeat_n(None, second_rows)),
            }
            column
        })
        .collect();

    let data = Table::with_row_count(columns, total_rows)?;

    let mut domain = SourceDomain::new();
    let first_tag = domain.insert(first.id.clone());
    let second_tag = domain.insert(second.id.clone());
    let mut tags = Vec::with_capacity(total_rows);
    tags.extend(std::iter::repeat_n(first_tag, first_rows));
    tags.extend(std::iter::repeat_n(second_tag, second_rows));

    debug!(
        first = %first.id,
        second = %second.id,
        columns = data.column_count(),
        "merged column layout"
    );
    info!(rows = total_rows, first_rows, second_rows, "merge complete");

    Ok(Merged {
        table: CombinedTable::from_parts(data, domain, tags),
        schema_mismatch,
    })
}

fn validate_inputs(
    first: MergeInput<'_>,
    second: MergeInput<'_>,
    label_column: Option<&str>,
) -> Result<()> {
    if first.id == second.id {
        return Err(invalid_source_id(format!(
            "both inputs are named '{}'",
            first.id
        )));
    }

    for input in [first, second] {
        if input.table.column_count() == 0 {
            return Err(empty_schema(input.id.as_str()));
        }
        if input.table.contains_column(PROVENANCE_COLUMN) {
            return Err(reserved_column(PROVENANCE_COLUMN, input.id.as_str()));
        }
    }

    if let Some(label) = label_column {
        if !first.table.contains_column(label) {
            return Err(invalid_label_column(label, first.id.as_str()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RejoinError;
    use crate::test_fixtures::{column_values, table};

    fn ids() -> (SourceId, SourceId) {
        (
            SourceId::new("train.csv").unwrap(),
            SourceId::new("test.csv").unwrap(),
        )
    }

    #[test]
    fn test_row_count_is_sum_of_inputs() {
        let (a_id, b_id) = ids();
        let a = table(&["x"], &[&["1"], &["2"], &["3"]]);
        let b = table(&["x"], &[&["4"], &["5"]]);
        let merged = merge(MergeInput::new(&a, &a_id), MergeInput::new(&b, &b_id), None).unwrap();
        assert_eq!(merged.table.row_count(), 5);
        assert!(merged.schema_mismatch.is_none());
        assert_eq!(
            column_values(merged.table.data(), "x"),
            vec!["1", "2", "3", "4", "5"]
        );
    }

    #[test]
    fn test_tags_cover_exactly_both_ids() {
        let (a_id, b_id) = ids();
        let a = table(&["x"], &[&["1"]]);
        let b = table(&["x"], &[&["2"], &["3"]]);
        let merged = merge(MergeInput::new(&a, &a_id), MergeInput::new(&b, &b_id), None).unwrap();
        let observed: Vec<&str> = merged
            .table
            .observed_sources()
            .into_iter()
            .map(SourceId::as_str)
            .collect();
        assert_eq!(observed, vec!["train.csv", "test.csv"]);
        assert_eq!(merged.table.rows_from("train.csv"), 1);
        assert_eq!(merged.table.rows_from("test.csv"), 2);
    }

    #[test]
    fn test_schema_mismatch_names_unique_columns() {
        let (a_id, b_id) = ids();
        let a = table(&["x", "y"], &[&["1", "2"]]);
        let b = table(&["x", "z"], &[&["3", "4"]]);
        let merged = merge(MergeInput::new(&a, &a_id), MergeInput::new(&b, &b_id), None).unwrap();
        let mismatch = merged.schema_mismatch.unwrap();
        assert_eq!(mismatch.only_in_first, vec!["y"]);
        assert_eq!(mismatch.only_in_second, vec!["z"]);

        // Both sides' columns survive, filled with missing values
        let data = merged.table.data();
        assert_eq!(data.column_names().collect::<Vec<_>>(), vec!["x", "y", "z"]);
        assert_eq!(column_values(data, "y"), vec!["2", ""]);
        assert_eq!(column_values(data, "z"), vec!["", "4"]);
    }

    #[test]
    fn test_label_column_is_missing_for_second_input() {
        let (a_id, b_id) = ids();
        let a = table(&["x", "label"], &[&["1", "yes"], &["2", "no"]]);
        let b = table(&["x"], &[&["3"], &["4"]]);
        let merged = merge(
            MergeInput::new(&a, &a_id),
            MergeInput::new(&b, &b_id),
            Some("label"),
        )
        .unwrap();
        assert!(merged.schema_mismatch.is_none());
        let label = merged.table.data().column("label").unwrap();
        assert_eq!(label.cells()[2], None);
        assert_eq!(label.cells()[3], None);
        assert_eq!(label.get(0), Some("yes"));
    }

    #[test]
    fn test_undeclared_label_column_is_reported() {
        let (a_id, b_id) = ids();
        let a = table(&["x", "label"], &[&["1", "yes"]]);
        let b = table(&["x"], &[&["3"]]);
        let merged = merge(MergeInput::new(&a, &a_id), MergeInput::new(&b, &b_id), None).unwrap();
        assert_eq!(merged.schema_mismatch.unwrap().only_in_first, vec!["label"]);
    }

    #[test]
    fn test_label_column_must_exist_in_first_input() {
        let (a_id, b_id) = ids();
        let a = table(&["x"], &[&["1"]]);
        let b = table(&["x", "label"], &[&["3", "y"]]);
        let err = merge(
            MergeInput::new(&a, &a_id),
            MergeInput::new(&b, &b_id),
            Some("label"),
        )
        .unwrap_err();
        assert!(matches!(err, RejoinError::InvalidLabelColumn { ref column, .. } if column == "label"));
    }

    #[test]
    fn test_equal_ids_rejected() {
        let id = SourceId::new("data.csv").unwrap();
        let a = table(&["x"], &[&["1"]]);
        let err = merge(MergeInput::new(&a, &id), MergeInput::new(&a, &id), None).unwrap_err();
        assert!(matches!(err, RejoinError::InvalidSourceId { .. }));
    }

    #[test]
    fn test_input_without_columns_rejected() {
        let (a_id, b_id) = ids();
        let a = table(&["x"], &[&["1"]]);
        let b = Table::default();
        let err = merge(MergeInput::new(&a, &a_id), MergeInput::new(&b, &b_id), None).unwrap_err();
        assert!(matches!(err, RejoinError::EmptySchema { ref source_id } if source_id == "test.csv"));
    }

    #[test]
    fn test_existing_provenance_column_rejected() {
        let (a_id, b_id) = ids();
        let a = table(&["x", PROVENANCE_COLUMN], &[&["1", "old"]]);
        let b = table(&["x"], &[&["2"]]);
        let err = merge(MergeInput::new(&a, &a_id), MergeInput::new(&b, &b_id), None).unwrap_err();
        assert!(matches!(err, RejoinError::ReservedColumn { .. }));
    }

    #[test]
    fn test_check_schemas_is_order_insensitive() {
        let (a_id, b_id) = ids();
        let a = table(&["x", "y"], &[]);
        let b = table(&["y", "x"], &[]);
        assert!(
            check_schemas(MergeInput::new(&a, &a_id), MergeInput::new(&b, &b_id), None).is_none()
        );
    }

    #[test]
    fn test_merge_does_not_touch_inputs() {
        let (a_id, b_id) = ids();
        let a = table(&["x"], &[&["1"]]);
        let b = table(&["y"], &[&["2"]]);
        let before = (a.clone(), b.clone());
        let _ = merge(MergeInput::new(&a, &a_id), MergeInput::new(&b, &b_id), None).unwrap();
        assert_eq!((a, b), before);
    }
}
