//! Advisory diagnostics
//!
//! These conditions are reported alongside a successful result and never abort
//! an operation. They implement [`miette::Diagnostic`] with warning severity so
//! the CLI renders them the same way it renders errors.

use miette::Diagnostic;
use serde::Serialize;
use thiserror::Error;

/// The two merge inputs do not share the same column names (label column excluded)
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq, Serialize)]
#[error(
    "Column names differ between '{first}' and '{second}': only in '{first}': [{}]; only in '{second}': [{}]",
    .only_in_first.join(", "),
    .only_in_second.join(", ")
)]
#[diagnostic(
    code(rejoin::merge::schema_mismatch),
    severity(Warning),
    help("The merge still ran; missing columns are left empty for rows from the other file")
)]
pub struct SchemaMismatch {
    pub first: String,
    pub second: String,
    /// Columns of the first input (label excluded) absent from the second
    pub only_in_first: Vec<String>,
    /// Columns of the second input absent from the first (label excluded)
    pub only_in_second: Vec<String>,
}

/// A split found a number of provenance groups other than two
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("Expected {expected} source datasets, found {found}: [{}]", .sources.join(", "))]
#[diagnostic(
    code(rejoin::split::unexpected_group_count),
    severity(Warning),
    help("One output was still written per source found")
)]
pub struct UnexpectedGroupCount {
    pub expected: usize,
    pub found: usize,
    pub sources: Vec<String>,
}
