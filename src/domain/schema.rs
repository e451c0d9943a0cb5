//! Column schemas: the set of column names of a table, provenance excluded

use std::collections::HashSet;

use super::table::Table;
use crate::config::PROVENANCE_COLUMN;

/// Ordered set of column names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSchema<'a> {
    names: Vec<&'a str>,
}

impl<'a> ColumnSchema<'a> {
    /// Schema of `table`, leaving out the provenance column and `excluded`
    pub fn of(table: &'a Table, excluded: Option<&str>) -> Self {
        let names = table
            .column_names()
            .filter(|name| *name != PROVENANCE_COLUMN && Some(*name) != excluded)
            .collect();
        Self { names }
    }

    pub fn names(&self) -> &[&'a str] {
        &self.names
    }

    /// Names in `self` but not in `other`, in `self`'s column order
    pub fn difference(&self, other: &ColumnSchema<'_>) -> Vec<String> {
        let theirs: HashSet<&str> = other.names.iter().copied().collect();
        self.names
            .iter()
            .filter(|name| !theirs.contains(*name))
            .map(ToString::to_string)
            .collect()
    }

    /// Set equality, ignoring order
    pub fn same_names(&self, other: &ColumnSchema<'_>) -> bool {
        self.difference(other).is_empty() && other.difference(self).is_empty()
    }
}
