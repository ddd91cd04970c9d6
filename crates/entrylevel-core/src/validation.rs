//! Name, field-list and entry validation.
//!
//! Every function here is pure and accumulative: it walks the whole input and
//! returns every violation as a message, in input order. An empty list means
//! the input is valid. Nothing here fails fast or touches storage.

use std::collections::HashSet;

use serde::Serialize;
use serde_json::Value;

use crate::error::{EntryLevelError, Result};
use crate::schema::values::parse_calendar_date;
use crate::schema::{Entry, Field, FieldType, Record};

/// Maximum characters in a field name.
pub const MAX_FIELD_NAME_CHARS: usize = 30;

/// Maximum characters in a template name.
pub const MAX_TEMPLATE_NAME_CHARS: usize = 50;

const FIELD_NAME_FORBIDDEN: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '*'];
const TEMPLATE_NAME_FORBIDDEN: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Shared shape of the two name checks.
fn validate_name(label: &str, name: &str, max_chars: usize, forbidden: &[char]) -> Vec<String> {
    let mut errors = Vec::new();

    if name.is_empty() {
        errors.push(format!("{} is required", label));
        return errors;
    }

    let trimmed = name.trim();
    if trimmed.is_empty() {
        errors.push(format!("{} cannot be empty", label));
    }
    if trimmed.chars().count() > max_chars {
        errors.push(format!("{} must be {} characters or less", label, max_chars));
    }
    // Control characters would break the line-based CSV metadata.
    if trimmed.contains(forbidden) || name.chars().any(char::is_control) {
        errors.push(format!("{} contains invalid characters", label));
    }

    errors
}

/// Validate a single field name.
pub fn validate_field_name(name: &str) -> Vec<String> {
    validate_name(
        "Field name",
        name,
        MAX_FIELD_NAME_CHARS,
        FIELD_NAME_FORBIDDEN,
    )
}

/// Validate a template name.
pub fn validate_template_name(name: &str) -> Vec<String> {
    validate_name(
        "Template name",
        name,
        MAX_TEMPLATE_NAME_CHARS,
        TEMPLATE_NAME_FORBIDDEN,
    )
}

/// Validate a template's field list.
///
/// The first occurrence of a name is checked normally; every later repeat
/// produces exactly one duplicate error and nothing else.
pub fn validate_template_fields(fields: &[Field]) -> Vec<String> {
    let mut errors = Vec::new();

    if fields.is_empty() {
        errors.push("At least one field is required".to_string());
        return errors;
    }

    let mut seen: HashSet<&str> = HashSet::with_capacity(fields.len());

    for (index, field) in fields.iter().enumerate() {
        let position = index + 1;

        if field.name.is_empty() {
            errors.push(format!("Field {}: Name is required", position));
            continue;
        }
        if field.field_type.is_empty() {
            errors.push(format!("Field {}: Type is required", position));
            continue;
        }
        if !seen.insert(field.name.as_str()) {
            errors.push(format!(
                "Field name '{}' is used more than once",
                field.name
            ));
            continue;
        }

        errors.extend(
            validate_field_name(&field.name)
                .into_iter()
                .map(|err| format!("Field {}: {}", position, err)),
        );

        if field.kind().is_none() {
            errors.push(format!(
                "Field {}: Invalid type '{}'",
                position, field.field_type
            ));
        }
    }

    errors
}

/// Type check for one present, non-empty value. Returns the error message on failure.
type ValueRule = fn(&str, &Value) -> Option<String>;

fn check_text(_name: &str, _value: &Value) -> Option<String> {
    None
}

fn check_numeric(name: &str, value: &Value) -> Option<String> {
    // serde_json numbers are always finite
    match value {
        Value::Number(_) => None,
        _ => Some(format!("{} must be a valid number", name)),
    }
}

fn check_date(name: &str, value: &Value) -> Option<String> {
    match value.as_str().and_then(parse_calendar_date) {
        Some(_) => None,
        None => Some(format!("{} must be a valid date", name)),
    }
}

fn check_boolean(name: &str, value: &Value) -> Option<String> {
    match value {
        Value::Bool(_) => None,
        _ => Some(format!("{} must be a boolean value", name)),
    }
}

/// The one place a field kind maps to its value check.
fn value_rule(kind: FieldType) -> ValueRule {
    match kind {
        FieldType::Text => check_text,
        FieldType::Number | FieldType::Money | FieldType::Decimal => check_numeric,
        FieldType::Date => check_date,
        FieldType::Boolean => check_boolean,
    }
}

fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

/// Validate one entry against a field list.
///
/// Every field is mandatory. Fields with an unrecognized type get the
/// presence check only; the type itself is reported by
/// [`validate_template_fields`].
pub fn validate_form_data(fields: &[Field], entry: &Entry) -> Vec<String> {
    let mut errors = Vec::new();

    for field in fields {
        let value = entry.get(&field.name);
        if is_missing(value) {
            errors.push(format!("{} is required", field.name));
            continue;
        }
        if let (Some(kind), Some(value)) = (field.kind(), value) {
            if let Some(err) = value_rule(kind)(&field.name, value) {
                errors.push(err);
            }
        }
    }

    errors
}

/// Check that every entry's keys are exactly the field names.
pub fn validate_entry_keys(fields: &[Field], entries: &[Entry]) -> Vec<String> {
    let mut errors = Vec::new();

    for (index, entry) in entries.iter().enumerate() {
        let position = index + 1;
        for field in fields {
            if !entry.contains_key(&field.name) {
                errors.push(format!(
                    "Entry {}: Missing field '{}'",
                    position, field.name
                ));
            }
        }
        for key in entry.keys() {
            if !fields.iter().any(|f| &f.name == key) {
                errors.push(format!("Entry {}: Unknown field '{}'", position, key));
            }
        }
    }

    errors
}

/// Validate a whole record: its template's field list, then every entry.
///
/// Entry messages are prefixed with the entry's 1-based position.
pub fn validate_record_data(record: &Record) -> Vec<String> {
    let mut errors = Vec::new();

    if record.template.name.trim().is_empty() {
        errors.push("Template must have name and fields".to_string());
        return errors;
    }

    errors.extend(validate_template_fields(&record.template.fields));

    for (index, entry) in record.entries.iter().enumerate() {
        errors.extend(
            validate_form_data(&record.template.fields, entry)
                .into_iter()
                .map(|err| format!("Entry {}: {}", index + 1, err)),
        );
    }

    errors
}

/// Check that a record can be exported at all.
pub fn validate_record_for_export(record: &Record) -> Result<()> {
    if record.name().trim().is_empty() {
        return Err(EntryLevelError::InvalidInput(
            "Record has no name".to_string(),
        ));
    }
    if record.entries.is_empty() {
        return Err(EntryLevelError::EmptyRecord);
    }
    Ok(())
}

/// Outcome of a validation pass, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationSummary {
    pub is_valid: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

/// Summarize a list of validation messages.
pub fn validation_summary(errors: Vec<String>) -> ValidationSummary {
    if errors.is_empty() {
        return ValidationSummary {
            is_valid: true,
            message: "Validation passed".to_string(),
            errors,
        };
    }
    ValidationSummary {
        is_valid: false,
        message: format!("Validation failed: {} error(s)", errors.len()),
        errors,
    }
}
