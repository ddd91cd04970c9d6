//! Text output formatting for templates and records.

use entrylevel_core::schema::values::value_to_string;
use entrylevel_core::{Field, Record, Template, TemplateSource};

/// Fields as `Name (type), ...`.
pub fn field_summary(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| format!("{} ({})", f.name, f.field_type))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `Default` / `User`, or `-` for an untagged template.
pub fn source_label(template: &Template) -> String {
    template
        .source
        .map(|s: TemplateSource| s.to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Table columns for a record's entries: position, then one per field.
pub fn entry_columns(record: &Record) -> Vec<String> {
    std::iter::once("#".to_string())
        .chain(record.template.fields.iter().map(|f| f.name.clone()))
        .collect()
}

/// One row per entry, 1-based position first; missing values render empty.
pub fn entry_rows(record: &Record) -> Vec<Vec<String>> {
    record
        .entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            std::iter::once((i + 1).to_string())
                .chain(record.template.fields.iter().map(|f| {
                    entry.get(&f.name).map(value_to_string).unwrap_or_default()
                }))
                .collect()
        })
        .collect()
}
