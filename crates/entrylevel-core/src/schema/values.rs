//! Conversions between typed entry values and their string forms.
//!
//! CSV flattens every value to a string; [`coerce_value`] is the inverse used
//! on import and when values arrive as text from the command line.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::{Number, Value};

use super::types::FieldType;

/// Date formats accepted for `date` fields, tried in order.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Date-time formats accepted for `date` fields (the date part is kept).
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

/// Parse a string into a calendar date.
///
/// Accepts ISO dates, RFC 3339 timestamps and a few common date-time layouts.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.date_naive());
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return Some(date);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt.date());
        }
    }
    None
}

/// Parse a numeric string into a JSON number.
///
/// Integers stay integers so that `"3"` comes back as the same JSON value
/// that produced it.
pub fn parse_number(raw: &str) -> Option<Number> {
    let raw = raw.trim();
    if let Ok(i) = raw.parse::<i64>() {
        return Some(Number::from(i));
    }
    if let Ok(u) = raw.parse::<u64>() {
        return Some(Number::from(u));
    }
    raw.parse::<f64>().ok().and_then(Number::from_f64)
}

/// Convert the string form of a value back into its typed JSON value.
///
/// Strings that do not convert are returned unchanged so that validation
/// can report them against the field.
pub fn coerce_value(kind: FieldType, raw: &str) -> Value {
    match kind {
        FieldType::Text => Value::String(raw.to_string()),
        FieldType::Number | FieldType::Money | FieldType::Decimal => parse_number(raw)
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(raw.to_string())),
        FieldType::Boolean => match raw.trim() {
            "true" => Value::Bool(true),
            "false" => Value::Bool(false),
            _ => Value::String(raw.to_string()),
        },
        FieldType::Date => {
            if raw.trim().is_empty() {
                Value::Null
            } else {
                Value::String(raw.to_string())
            }
        }
    }
}

/// The string form of a value as written into a CSV cell.
///
/// `null` becomes the empty string; scalars use their natural spelling.
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items
            .iter()
            .map(value_to_string)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_calendar_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(parse_calendar_date("2024-03-09"), Some(expected));
        assert_eq!(parse_calendar_date("2024-03-09T10:15:00Z"), Some(expected));
        assert_eq!(parse_calendar_date("2024-03-09T10:15"), Some(expected));
        assert_eq!(parse_calendar_date("03/09/2024"), Some(expected));
        assert_eq!(parse_calendar_date("2024-02-30"), None);
        assert_eq!(parse_calendar_date("yesterday"), None);
        assert_eq!(parse_calendar_date("  "), None);
    }

    #[test]
    fn test_coerce_numbers_keep_integer_shape() {
        assert_eq!(coerce_value(FieldType::Number, "3"), json!(3));
        assert_eq!(coerce_value(FieldType::Money, "12.5"), json!(12.5));
        assert_eq!(coerce_value(FieldType::Decimal, "abc"), json!("abc"));
    }

    #[test]
    fn test_coerce_boolean_is_strict() {
        assert_eq!(coerce_value(FieldType::Boolean, "true"), json!(true));
        assert_eq!(coerce_value(FieldType::Boolean, "false"), json!(false));
        assert_eq!(coerce_value(FieldType::Boolean, "yes"), json!("yes"));
    }

    #[test]
    fn test_coerce_empty_date_is_null() {
        assert_eq!(coerce_value(FieldType::Date, ""), Value::Null);
        assert_eq!(coerce_value(FieldType::Date, "2024-01-01"), json!("2024-01-01"));
    }

    #[test]
    fn test_value_to_string_round_trips_through_coerce() {
        for (kind, value) in [
            (FieldType::Number, json!(42)),
            (FieldType::Money, json!(19.99)),
            (FieldType::Boolean, json!(false)),
            (FieldType::Text, json!("A,B \"quoted\"")),
            (FieldType::Date, Value::Null),
        ] {
            assert_eq!(coerce_value(kind, &value_to_string(&value)), value);
        }
    }
}
