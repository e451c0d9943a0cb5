//! Test fixtures for building tables without CSV round-trips.
//!
//! ```ignore
//! use crate::test_fixtures::table;
//!
//! let train = table(&["id", "target"], &[&["1", "0.5"], &["2", ""]]);
//! ```
//!
//! Empty strings become the missing-value marker, exactly as the CSV reader
//! treats empty fields.

use crate::domain::Table;

/// Build a table from a header and string rows.
///
/// # Panics
///
/// Panics if the rows do not match the header width.
#[must_use]
pub fn table(headers: &[&str], rows: &[&[&str]]) -> Table {
    let headers = headers.iter().map(ToString::to_string).collect();
    let records = rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| (!cell.is_empty()).then(|| (*cell).to_string()))
                .collect()
        })
        .collect();
    Table::from_rows(headers, records).expect("Failed to build fixture table")
}

/// Values of one column as plain strings (`""` for missing cells).
///
/// # Panics
///
/// Panics if the column does not exist.
#[must_use]
pub fn column_values(table: &Table, name: &str) -> Vec<String> {
    table
        .column(name)
        .expect("Fixture column missing")
        .cells()
        .iter()
        .map(|c| c.clone().unwrap_or_default())
        .collect()
}
