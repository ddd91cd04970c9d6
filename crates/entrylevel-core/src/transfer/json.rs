use serde_json::Value;

use super::{export_name, safe_file_name, ExportedFile};
use crate::error::{EntryLevelError, Result};
use crate::schema::Record;

/// Pretty-printed JSON of the whole record document.
pub fn export_as_json(record: &Record) -> Result<ExportedFile> {
    let content = serde_json::to_string_pretty(record)?;
    Ok(ExportedFile {
        file_name: format!("{}.json", safe_file_name(export_name(record))),
        content,
    })
}

/// Parse a record document, requiring an `entries` array.
pub(super) fn parse_record_document(content: &str) -> Result<Record> {
    let value: Value = serde_json::from_str(content)
        .map_err(|e| EntryLevelError::malformed(format!("Invalid JSON: {}", e)))?;

    let has_entries = value
        .get("entries")
        .map(Value::is_array)
        .unwrap_or(false);
    if !has_entries {
        return Err(EntryLevelError::malformed(
            "JSON import must be a record document with an entries array",
        ));
    }

    serde_json::from_value(value)
        .map_err(|e| EntryLevelError::malformed(format!("Invalid record document: {}", e)))
}
