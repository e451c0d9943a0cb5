//! Error types and handling for rejoin
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Blocking failures live here. Advisory conditions (schema mismatch, unexpected
//! group count) are not errors; see [`crate::advisory`].
//!
//! This module is organized into sub-modules by error domain:
//! - [`table`]: Table construction errors
//! - [`merge`]: Merge input validation errors
//! - [`features`]: Date-feature generation errors
//! - [`split`]: Split errors
//! - [`fs`]: File system and CSV codec errors

pub mod features;
pub mod fs;
pub mod merge;
pub mod split;
pub mod table;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for rejoin operations
#[derive(Error, Diagnostic, Debug)]
pub enum RejoinError {
    // Table errors
    #[error("Duplicate column name '{column}'")]
    #[diagnostic(
        code(rejoin::table::duplicate_column),
        help("Column names must be unique within a table")
    )]
    DuplicateColumn { column: String },

    #[error("Column '{column}' has {found} values, expected {expected}")]
    #[diagnostic(code(rejoin::table::ragged_column))]
    RaggedColumn {
        column: String,
        expected: usize,
        found: usize,
    },

    #[error("Column '{column}' not found")]
    #[diagnostic(code(rejoin::table::column_not_found))]
    ColumnNotFound { column: String },

    // Merge errors
    #[error("Label column '{column}' not found in '{source_id}'")]
    #[diagnostic(
        code(rejoin::merge::invalid_label_column),
        help("The label column must exist in the first input (usually the training set)")
    )]
    InvalidLabelColumn { column: String, source_id: String },

    #[error("Input '{source_id}' has no columns")]
    #[diagnostic(code(rejoin::merge::empty_schema))]
    EmptySchema { source_id: String },

    #[error("Invalid source identifier: {message}")]
    #[diagnostic(
        code(rejoin::merge::invalid_source_id),
        help("Use --name-a/--name-b to give each input a distinct, non-empty name")
    )]
    InvalidSourceId { message: String },

    #[error("Input '{source_id}' already has a column named '{column}'")]
    #[diagnostic(
        code(rejoin::merge::reserved_column),
        help("This column name is reserved for the provenance tag; rename it before merging")
    )]
    ReservedColumn { column: String, source_id: String },

    // Feature errors
    #[error("Cannot parse timestamp in column '{column}', row {row}: '{value}'")]
    #[diagnostic(
        code(rejoin::features::unparseable_timestamp),
        help(
            "Supported formats: 2024-01-31, 2024/01/31, 01/31/2024, 20240131, 2024-01-31T13, \
             2024-01-31 13:45[:30[.123]], 2024-01-31T13:45:30+09:00, 2024-01-31 13:45:30 +0900"
        )
    )]
    UnparseableTimestamp {
        column: String,
        row: usize,
        value: String,
    },

    #[error("Unknown date feature '{name}'")]
    #[diagnostic(
        code(rejoin::features::unknown_feature),
        help(
            "Supported features: year, month, day, hour, minute, second, day_of_week, day_of_year, iso_week_of_year, quarter"
        )
    )]
    UnknownFeature { name: String },

    #[error("Column '{column}' already exists")]
    #[diagnostic(
        code(rejoin::features::column_exists),
        help("Features were probably generated already; start again from the merged file")
    )]
    FeatureColumnExists { column: String },

    #[error("No date features selected")]
    #[diagnostic(
        code(rejoin::features::empty_feature_set),
        help("Pass --features year,month,... or --all-features")
    )]
    EmptyFeatureSet,

    // Split errors
    #[error("Provenance column '{column}' not found")]
    #[diagnostic(
        code(rejoin::split::missing_provenance_column),
        help("Only files produced by 'rejoin merge' can be split")
    )]
    MissingProvenanceColumn { column: String },

    #[error("Row {row} has no value in provenance column '{column}'")]
    #[diagnostic(code(rejoin::split::missing_provenance_value))]
    MissingProvenanceValue { column: String, row: usize },

    #[error("Source '{tag}' cannot be used as a file name")]
    #[diagnostic(
        code(rejoin::split::unsafe_output_name),
        help("Provenance values must not contain path separators or be '.' or '..'")
    )]
    UnsafeOutputName { tag: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(rejoin::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(rejoin::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to parse CSV: {path}: {reason}")]
    #[diagnostic(
        code(rejoin::fs::csv_parse_failed),
        help("Input must be comma-separated UTF-8 with a header line")
    )]
    CsvParseFailed { path: String, reason: String },

    #[error("Failed to serialize report: {reason}")]
    #[diagnostic(code(rejoin::report::serialize_failed))]
    ReportFailed { reason: String },

    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(rejoin::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(rejoin::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for RejoinError {
    fn from(err: std::io::Error) -> Self {
        RejoinError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<csv::Error> for RejoinError {
    fn from(err: csv::Error) -> Self {
        RejoinError::CsvParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for RejoinError {
    fn from(err: serde_json::Error) -> Self {
        RejoinError::ReportFailed {
            reason: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for RejoinError {
    fn from(err: inquire::InquireError) -> Self {
        RejoinError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, RejoinError>;
