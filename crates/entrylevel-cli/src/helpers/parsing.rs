//! Parsing helpers for field definitions, field values and file names.

use std::collections::HashMap;

use entrylevel_core::schema::values::coerce_value;
use entrylevel_core::storage::layout::RECORD_SUFFIX;
use entrylevel_core::{Entry, Field, Template};

use crate::errors::CliError;

/// Parse `NAME:TYPE` into a field.
///
/// The type is kept as written; template validation reports unknown types.
pub fn parse_field_spec(spec: &str) -> anyhow::Result<Field> {
    let (name, kind) = spec.split_once(':').ok_or_else(|| {
        CliError::invalid_input(format!(
            "Invalid field '{}' (expected NAME:TYPE, e.g. Miles:number)",
            spec
        ))
    })?;
    Ok(Field {
        name: name.trim().to_string(),
        field_type: kind.trim().to_string(),
    })
}

/// Parse every `--field` value.
pub fn parse_field_specs(specs: &[String]) -> anyhow::Result<Vec<Field>> {
    specs.iter().map(|spec| parse_field_spec(spec)).collect()
}

/// Build an entry from `FIELD=VALUE` assignments against a template.
///
/// Values are coerced to the field's type. Keys follow the template's field
/// order; fields without an assignment are left out so that validation
/// reports them as required. A repeated field keeps the last value.
pub fn parse_assignments(template: &Template, assignments: &[String]) -> anyhow::Result<Entry> {
    let mut raw: HashMap<&str, &str> = HashMap::new();
    for assignment in assignments {
        let (name, value) = assignment.split_once('=').ok_or_else(|| {
            CliError::invalid_input(format!(
                "Invalid value '{}' (expected FIELD=VALUE)",
                assignment
            ))
        })?;
        let name = name.trim();
        if template.field(name).is_none() {
            return Err(CliError::invalid_input(format!(
                "Unknown field '{}' for template '{}' (fields: {})",
                name,
                template.name,
                template.field_names().join(", ")
            ))
            .into());
        }
        raw.insert(name, value);
    }

    let mut entry = Entry::new();
    for field in &template.fields {
        if let Some(value) = raw.get(field.name.as_str()) {
            let typed = match field.kind() {
                Some(kind) => coerce_value(kind, value),
                None => serde_json::Value::String(value.to_string()),
            };
            entry.insert(field.name.clone(), typed);
        }
    }
    Ok(entry)
}

/// Accept `trips` or `trips.json` as a record file name.
pub fn normalize_record_file(name: &str) -> String {
    let name = name.trim();
    if name.ends_with(RECORD_SUFFIX) {
        name.to_string()
    } else {
        format!("{}{}", name, RECORD_SUFFIX)
    }
}
