//! Split errors

use super::RejoinError;

/// Creates a missing provenance column error
pub fn missing_provenance_column(column: impl Into<String>) -> RejoinError {
    RejoinError::MissingProvenanceColumn {
        column: column.into(),
    }
}

/// Creates a missing provenance value error (`row` is 1-based)
pub fn missing_provenance_value(column: impl Into<String>, row: usize) -> RejoinError {
    RejoinError::MissingProvenanceValue {
        column: column.into(),
        row,
    }
}

/// Creates an unsafe output name error
pub fn unsafe_output_name(tag: impl Into<String>) -> RejoinError {
    RejoinError::UnsafeOutputName { tag: tag.into() }
}
