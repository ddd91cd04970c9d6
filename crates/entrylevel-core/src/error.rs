//! Error types for EntryLevel core operations.
//!
//! Validation problems are not errors: the validation functions return their
//! messages as data. The variants here abort a single operation and leave the
//! previously persisted state untouched.

use thiserror::Error;

/// Result type alias for EntryLevel operations.
pub type Result<T> = std::result::Result<T, EntryLevelError>;

/// Core error type for EntryLevel operations.
#[derive(Debug, Error)]
pub enum EntryLevelError {
    /// Referenced template, record or entry does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Name collision on create or rename
    #[error("Duplicate name: {0}")]
    DuplicateName(String),

    /// Entry index outside the record's entry list
    #[error("Entry index {index} is out of range (record has {len} entries)")]
    IndexOutOfRange { index: i64, len: usize },

    /// Record has no entries where at least one is required
    #[error("Record has no entries to export")]
    EmptyRecord,

    /// Unparseable CSV or JSON input
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// Invalid caller-supplied argument (file names, drafts)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Underlying filesystem failure
    #[error("Storage error: {0}")]
    Storage(String),
}

impl EntryLevelError {
    pub fn not_found(what: impl Into<String>) -> Self {
        EntryLevelError::NotFound(what.into())
    }

    pub fn duplicate(name: impl Into<String>) -> Self {
        EntryLevelError::DuplicateName(name.into())
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        EntryLevelError::MalformedInput(message.into())
    }
}

impl From<std::io::Error> for EntryLevelError {
    fn from(err: std::io::Error) -> Self {
        EntryLevelError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for EntryLevelError {
    fn from(err: serde_json::Error) -> Self {
        EntryLevelError::MalformedInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_out_of_range_message() {
        let err = EntryLevelError::IndexOutOfRange { index: 5, len: 3 };
        assert_eq!(
            err.to_string(),
            "Entry index 5 is out of range (record has 3 entries)"
        );
    }

    #[test]
    fn test_io_error_maps_to_storage() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: EntryLevelError = io.into();
        assert!(matches!(err, EntryLevelError::Storage(_)));
    }

    #[test]
    fn test_json_error_maps_to_malformed() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: EntryLevelError = parse.into();
        assert!(matches!(err, EntryLevelError::MalformedInput(_)));
    }
}
