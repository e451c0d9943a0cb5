//! Merge input validation errors

use super::RejoinError;

/// Creates an invalid label column error
pub fn invalid_label_column(column: impl Into<String>, source_id: impl Into<String>) -> RejoinError {
    RejoinError::InvalidLabelColumn {
        column: column.into(),
        source_id: source_id.into(),
    }
}

/// Creates an empty schema error
pub fn empty_schema(source_id: impl Into<String>) -> RejoinError {
    RejoinError::EmptySchema {
        source_id: source_id.into(),
    }
}

/// Creates an invalid source identifier error
pub fn invalid_source_id(message: impl Into<String>) -> RejoinError {
    RejoinError::InvalidSourceId {
        message: message.into(),
    }
}

/// Creates a reserved column error
pub fn reserved_column(column: impl Into<String>, source_id: impl Into<String>) -> RejoinError {
    RejoinError::ReservedColumn {
        column: column.into(),
        source_id: source_id.into(),
    }
}
