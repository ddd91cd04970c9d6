//! Import and export of record documents.
//!
//! Exports never touch the data directory: they produce an [`ExportedFile`]
//! that the caller writes wherever it wants. Imports produce an unsaved
//! [`Record`]; the caller validates and saves it.

mod csv;
mod json;

use std::fs;
use std::io;
use std::path::Path;

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::error::{EntryLevelError, Result};
use crate::fs::write_atomic;
use crate::schema::values::coerce_value;
use crate::schema::Record;

pub use self::csv::{export_as_csv, export_as_csv_at, parse_csv_line, parse_csv_to_record};
pub use self::json::export_as_json;

/// Name used for exports of records whose template has no name.
const UNNAMED_RECORD: &str = "record";

/// Content of an export plus the file name it should be saved under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportedFile {
    pub file_name: String,
    pub content: String,
}

impl ExportedFile {
    /// Write the content to `path` atomically.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        write_atomic(path, self.content.as_bytes())
    }
}

/// Formats accepted by [`import_from_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    Csv,
    Json,
}

impl ImportFormat {
    /// Pick the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(ImportFormat::Csv),
            "json" => Some(ImportFormat::Json),
            _ => None,
        }
    }
}

/// Replace every character outside `[A-Za-z0-9-_]` with `_`.
pub fn safe_file_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// The name an export of `record` is labelled with.
pub(crate) fn export_name(record: &Record) -> &str {
    if record.template.name.is_empty() {
        UNNAMED_RECORD
    } else {
        &record.template.name
    }
}

/// Conventional record file name: `<slug>_<YYYY-MM-DD>_<HH-MM-SS>.json`.
pub fn record_file_name(template_name: &str, at: NaiveDateTime) -> String {
    let slug = match safe_file_name(template_name) {
        slug if slug.is_empty() => UNNAMED_RECORD.to_string(),
        slug => slug,
    };
    format!("{}_{}.json", slug, at.format("%Y-%m-%d_%H-%M-%S"))
}

/// Convert string values back into typed values per the template's fields.
///
/// Only string values of fields with a recognized type are touched.
pub fn coerce_entries(record: &mut Record) {
    let kinds: Vec<_> = record
        .template
        .fields
        .iter()
        .filter_map(|f| f.kind().map(|kind| (f.name.clone(), kind)))
        .collect();

    for entry in &mut record.entries {
        for (name, kind) in &kinds {
            if let Some(value) = entry.get_mut(name) {
                if let Some(raw) = value.as_str() {
                    *value = coerce_value(*kind, raw);
                }
            }
        }
    }
}

/// Parse in-memory content as a record.
///
/// CSV values are coerced to their field types. `fallback_name` names the
/// record when the content does not carry a name of its own.
pub fn import_from_str(content: &str, format: ImportFormat, fallback_name: &str) -> Result<Record> {
    let record = match format {
        ImportFormat::Csv => {
            let mut record = parse_csv_to_record(content, fallback_name)?;
            coerce_entries(&mut record);
            record
        }
        ImportFormat::Json => {
            let mut record = json::parse_record_document(content)?;
            if record.template.name.trim().is_empty() {
                record.template.name = fallback_name.to_string();
            }
            record
        }
    };
    tracing::debug!(
        name = %record.template.name,
        entries = record.entries.len(),
        "imported record"
    );
    Ok(record)
}

/// Read and parse a `.csv` or `.json` file as a record.
///
/// The file stem names the record unless `fallback_name` is given or the
/// content carries its own name.
pub fn import_from_file(path: &Path, fallback_name: Option<&str>) -> Result<Record> {
    let format = ImportFormat::from_path(path).ok_or_else(|| {
        EntryLevelError::InvalidInput(format!(
            "Unsupported import file '{}': expected .csv or .json",
            path.display()
        ))
    })?;

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(EntryLevelError::not_found(format!(
                "Import file '{}' not found",
                path.display()
            )))
        }
        Err(e) => return Err(e.into()),
    };

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(UNNAMED_RECORD);
    import_from_str(&content, format, fallback_name.unwrap_or(stem))
}
