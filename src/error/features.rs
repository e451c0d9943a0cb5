//! Date-feature generation errors

use super::RejoinError;

/// Creates an unparseable timestamp error (`row` is 1-based)
pub fn unparseable_timestamp(
    column: impl Into<String>,
    row: usize,
    value: impl Into<String>,
) -> RejoinError {
    RejoinError::UnparseableTimestamp {
        column: column.into(),
        row,
        value: value.into(),
    }
}

/// Creates an unknown feature error
pub fn unknown_feature(name: impl Into<String>) -> RejoinError {
    RejoinError::UnknownFeature { name: name.into() }
}

/// Creates a feature column exists error
pub fn column_exists(column: impl Into<String>) -> RejoinError {
    RejoinError::FeatureColumnExists {
        column: column.into(),
    }
}
