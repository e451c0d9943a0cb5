//! Table construction errors

use super::RejoinError;

/// Creates a duplicate column error
pub fn duplicate_column(column: impl Into<String>) -> RejoinError {
    RejoinError::DuplicateColumn {
        column: column.into(),
    }
}

/// Creates a ragged column error
pub fn ragged_column(column: impl Into<String>, expected: usize, found: usize) -> RejoinError {
    RejoinError::RaggedColumn {
        column: column.into(),
        expected,
        found,
    }
}

/// Creates a column not found error
pub fn column_not_found(column: impl Into<String>) -> RejoinError {
    RejoinError::ColumnNotFound {
        column: column.into(),
    }
}
