//! Column-oriented table model
//!
//! A [`Table`] is an ordered list of uniquely named [`Column`]s whose cells are
//! aligned by row position. Rows have no identity of their own.

use std::collections::HashSet;

use crate::error::Result;
use crate::error::table::{column_not_found, duplicate_column, ragged_column};

/// A single cell. `None` is the missing-value marker.
pub type Cell = Option<String>;

/// A named column of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    name: String,
    cells: Vec<Cell>,
}

impl Column {
    pub fn new(name: impl Into<String>, cells: Vec<Cell>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }

    /// A column holding the missing-value marker in every row
    pub fn missing(name: impl Into<String>, rows: usize) -> Self {
        Self::new(name, vec![None; rows])
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn get(&self, row: usize) -> Option<&str> {
        self.cells.get(row).and_then(|c| c.as_deref())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Append cells from another column of the same logical field
    pub(crate) fn extend(&mut self, cells: impl IntoIterator<Item = Cell>) {
        self.cells.extend(cells);
    }

    pub fn into_cells(self) -> Vec<Cell> {
        self.cells
    }
}

/// Ordered collection of equally long, uniquely named columns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    columns: Vec<Column>,
    rows: usize,
}

impl Table {
    /// Build a table from columns, checking names are unique and lengths agree
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let rows = columns.first().map_or(0, Column::len);
        Self::with_row_count(columns, rows)
    }

    /// Build a table with an explicit row count.
    ///
    /// Needed for tables whose only column was removed (e.g. a split group
    /// that had nothing besides its provenance tag) but still have rows.
    pub fn with_row_count(columns: Vec<Column>, rows: usize) -> Result<Self> {
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.name()) {
                return Err(duplicate_column(column.name()));
            }
            if column.len() != rows {
                return Err(ragged_column(column.name(), rows, column.len()));
            }
        }
        Ok(Self { columns, rows })
    }

    /// Build a table from a header and row-major records
    pub fn from_rows(headers: Vec<String>, records: Vec<Vec<Cell>>) -> Result<Self> {
        let rows = records.len();
        let mut columns: Vec<Column> = headers
            .into_iter()
            .map(|name| Column::new(name, Vec::with_capacity(rows)))
            .collect();

        for (index, record) in records.into_iter().enumerate() {
            // Record length is counted against the header width here
            if record.len() != columns.len() {
                return Err(ragged_column(
                    format!("row {}", index + 1),
                    columns.len(),
                    record.len(),
                ));
            }
            for (column, cell) in columns.iter_mut().zip(record) {
                column.cells.push(cell);
            }
        }

        Self::with_row_count(columns, rows)
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(Column::name)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    /// Like [`Table::column`], but a missing column is an error naming it
    pub fn require_column(&self, name: &str) -> Result<&Column> {
        self.column(name).ok_or_else(|| column_not_found(name))
    }

    pub fn contains_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Append a column at the end.
    ///
    /// A table without columns adopts the new column's length.
    pub fn push_column(&mut self, column: Column) -> Result<()> {
        if self.contains_column(column.name()) {
            return Err(duplicate_column(column.name()));
        }
        if self.columns.is_empty() && self.rows == 0 {
            self.rows = column.len();
        }
        if column.len() != self.rows {
            return Err(ragged_column(column.name(), self.rows, column.len()));
        }
        self.columns.push(column);
        Ok(())
    }

    /// Remove a column by name, keeping the row count
    pub fn remove_column(&mut self, name: &str) -> Option<Column> {
        let index = self.columns.iter().position(|c| c.name() == name)?;
        Some(self.columns.remove(index))
    }

    /// Cells of one row, in column order
    pub fn row(&self, index: usize) -> Vec<Option<&str>> {
        self.columns.iter().map(|c| c.get(index)).collect()
    }

    /// Iterate over rows as borrowed cells
    pub fn rows(&self) -> impl Iterator<Item = Vec<Option<&str>>> + '_ {
        (0..self.rows).map(|index| self.row(index))
    }

    /// New table holding the given rows, in the given order
    pub fn select_rows(&self, indices: &[usize]) -> Table {
        let columns = self
            .columns
            .iter()
            .map(|column| {
                let cells = indices
                    .iter()
                    .map(|&i| column.cells.get(i).cloned().flatten())
                    .collect();
                Column::new(column.name(), cells)
            })
            .collect();
        Table {
            columns,
            rows: indices.len(),
        }
    }

    /// First `n` rows, for previews
    pub fn head(&self, n: usize) -> Table {
        let indices: Vec<usize> = (0..self.rows.min(n)).collect();
        self.select_rows(&indices)
    }
}
