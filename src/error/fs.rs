//! File system and CSV codec errors

use std::path::Path;

use super::RejoinError;

/// Creates a file read failed error
pub fn read_failed(path: &Path, reason: impl ToString) -> RejoinError {
    RejoinError::FileReadFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a file write failed error
pub fn write_failed(path: &Path, reason: impl ToString) -> RejoinError {
    RejoinError::FileWriteFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a CSV parse failed error
pub fn csv_parse_failed(path: impl Into<String>, reason: impl ToString) -> RejoinError {
    RejoinError::CsvParseFailed {
        path: path.into(),
        reason: reason.to_string(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> RejoinError {
    RejoinError::IoError {
        message: message.into(),
    }
}
