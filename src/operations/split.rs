//! Split a provenance-tagged table back into its source tables
//!
//! Rows are grouped by tag in first-seen order; within a group rows keep their
//! order. Each output carries every data column (engineered ones included) and
//! never the provenance column.

use tracing::{info, warn};

use crate::advisory::UnexpectedGroupCount;
use crate::config::EXPECTED_GROUP_COUNT;
use crate::domain::{CombinedTable, SourceId, Table};

/// One recovered table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitPart {
    pub source: SourceId,
    pub table: Table,
}

/// Result of a split
#[derive(Debug, Clone)]
pub struct Split {
    /// One part per distinct tag found, in first-seen order
    pub parts: Vec<SplitPart>,
    /// Set when the number of parts is not the expected two
    pub group_count: Option<UnexpectedGroupCount>,
}

impl Split {
    /// The distinct provenance values found, in output order
    pub fn sources(&self) -> Vec<&SourceId> {
        self.parts.iter().map(|p| &p.source).collect()
    }

    pub fn part(&self, source: &str) -> Option<&Table> {
        self.parts
            .iter()
            .find(|p| p.source.as_str() == source)
            .map(|p| &p.table)
    }
}

/// Partition `table` by provenance tag
pub fn split(table: &CombinedTable) -> Split {
    let mut groups: Vec<(usize, Vec<usize>)> = Vec::new();
    for (row, &tag) in table.tags().iter().enumerate() {
        match groups.iter_mut().find(|(t, _)| *t == tag) {
            Some((_, rows)) => rows.push(row),
            None => groups.push((tag, vec![row])),
        }
    }

    let parts: Vec<SplitPart> = groups
        .into_iter()
        .filter_map(|(tag, rows)| {
            let source = table.domain().get(tag)?.clone();
            Some(SplitPart {
                source,
                table: table.data().select_rows(&rows),
            })
        })
        .collect();

    let group_count = (parts.len() != EXPECTED_GROUP_COUNT).then(|| UnexpectedGroupCount {
        expected: EXPECTED_GROUP_COUNT,
        found: parts.len(),
        sources: parts.iter().map(|p| p.source.to_string()).collect(),
    });
    if let Some(ref advisory) = group_count {
        warn!(found = advisory.found, "unexpected number of source datasets");
    }

    info!(parts = parts.len(), rows = table.row_count(), "split complete");

    Split { parts, group_count }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PROVENANCE_COLUMN;
    use crate::test_fixtures::{column_values, table};

    fn combined(rows: &[&[&str]]) -> CombinedTable {
        CombinedTable::from_table(table(&["x", "y", PROVENANCE_COLUMN], rows)).unwrap()
    }

    #[test]
    fn test_two_way_split() {
        let t = combined(&[
            &["1", "a", "train.csv"],
            &["2", "b", "test.csv"],
            &["3", "c", "train.csv"],
        ]);
        let result = split(&t);
        assert!(result.group_count.is_none());
        assert_eq!(
            result.sources().iter().map(|s| s.as_str()).collect::<Vec<_>>(),
            vec!["train.csv", "test.csv"]
        );
        let train = result.part("train.csv").unwrap();
        assert_eq!(column_values(train, "x"), vec!["1", "3"]);
        assert!(!train.contains_column(PROVENANCE_COLUMN));
        assert_eq!(train.column_names().collect::<Vec<_>>(), vec!["x", "y"]);
    }

    #[test]
    fn test_three_groups_reports_advisory() {
        let t = combined(&[&["1", "a", "a"], &["2", "b", "b"], &["3", "c", "c"], &["4", "d", "a"]]);
        let result = split(&t);
        assert_eq!(result.parts.len(), 3);
        let advisory = result.group_count.unwrap();
        assert_eq!(advisory.found, 3);
        assert_eq!(advisory.sources, vec!["a", "b", "c"]);
        for part in &result.parts {
            assert!(!part.table.contains_column(PROVENANCE_COLUMN));
            let expected_rows = t.rows_from(part.source.as_str());
            assert_eq!(part.table.row_count(), expected_rows);
        }
    }

    #[test]
    fn test_single_group_still_splits() {
        let t = combined(&[&["1", "a", "only"], &["2", "b", "only"]]);
        let result = split(&t);
        assert_eq!(result.parts.len(), 1);
        assert_eq!(result.group_count.unwrap().found, 1);
        assert_eq!(result.parts[0].table.row_count(), 2);
    }

    #[test]
    fn test_empty_table_has_no_groups() {
        let t = combined(&[]);
        let result = split(&t);
        assert!(result.parts.is_empty());
        assert_eq!(result.group_count.unwrap().found, 0);
    }

    #[test]
    fn test_split_preserves_row_multiset() {
        let t = combined(&[
            &["1", "a", "p"],
            &["2", "", "q"],
            &["3", "c", "p"],
            &["4", "d", "q"],
        ]);
        let result = split(&t);
        let total: usize = result.parts.iter().map(|p| p.table.row_count()).sum();
        assert_eq!(total, t.row_count());
        assert_eq!(column_values(result.part("q").unwrap(), "y"), vec!["", "d"]);
    }

    #[test]
    fn test_table_with_only_provenance_column() {
        let t = CombinedTable::from_table(table(&[PROVENANCE_COLUMN], &[&["a"], &["b"], &["a"]]))
            .unwrap();
        let result = split(&t);
        assert_eq!(result.part("a").unwrap().row_count(), 2);
        assert_eq!(result.part("a").unwrap().column_count(), 0);
    }
}
