//! CSV export and import.
//!
//! Exported files carry a `#` metadata block, a blank line, a quoted header
//! row and one quoted row per entry. Every value is wrapped in double quotes
//! with inner quotes doubled.

use chrono::{DateTime, SecondsFormat, Utc};

use super::{export_name, safe_file_name, ExportedFile};
use crate::error::{EntryLevelError, Result};
use crate::schema::values::value_to_string;
use crate::schema::{Entry, Field, FieldType, Record, Template};

const RECORD_PREFIX: &str = "# Record:";
const FIELDS_PREFIX: &str = "# Fields:";

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Export the record as CSV, stamped with the current time.
pub fn export_as_csv(record: &Record) -> Result<ExportedFile> {
    export_as_csv_at(record, Utc::now())
}

/// Export the record as CSV with an explicit export timestamp.
///
/// Columns follow the template's field list; a template without fields falls
/// back to the keys of the first entry.
///
/// # Errors
///
/// Returns `EntryLevelError::EmptyRecord` if the record has no entries.
pub fn export_as_csv_at(record: &Record, exported_at: DateTime<Utc>) -> Result<ExportedFile> {
    if record.entries.is_empty() {
        return Err(EntryLevelError::EmptyRecord);
    }

    let columns: Vec<&str> = if record.template.fields.is_empty() {
        record.entries[0].keys().map(String::as_str).collect()
    } else {
        record.template.field_names()
    };

    let fields_meta = if record.template.fields.is_empty() {
        columns.join(", ")
    } else {
        record
            .template
            .fields
            .iter()
            .map(|f| format!("{} ({})", f.name, f.field_type))
            .collect::<Vec<_>>()
            .join(", ")
    };

    let name = export_name(record);
    let mut lines = vec![
        format!("{} {}", RECORD_PREFIX, name),
        format!("{} {}", FIELDS_PREFIX, fields_meta),
        format!(
            "# Exported: {}",
            exported_at.to_rfc3339_opts(SecondsFormat::Millis, true)
        ),
        String::new(),
        columns.iter().map(|c| quote(c)).collect::<Vec<_>>().join(","),
    ];

    for entry in &record.entries {
        let row = columns
            .iter()
            .map(|column| quote(&entry.get(*column).map(value_to_string).unwrap_or_default()))
            .collect::<Vec<_>>()
            .join(",");
        lines.push(row);
    }

    Ok(ExportedFile {
        file_name: format!("{}.csv", safe_file_name(name)),
        content: lines.join("\n"),
    })
}

/// Split one CSV line into trimmed values.
///
/// A `"` toggles quoting, except that `""` inside quotes is a literal quote.
/// A `,` outside quotes ends a value. The last value is always emitted.
pub fn parse_csv_line(line: &str) -> Vec<String> {
    let mut values = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                values.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    values.push(current.trim().to_string());
    values
}

/// Declared types of `columns` from a `# Fields:` annotation such as
/// `Miles (number), Unit Cost (money)`.
///
/// Exports list fields in header order, so the annotation is first read
/// positionally, one `<column> (<type>)` per header. Hand-edited annotations
/// that do not line up fall back to a per-column lookup.
fn declared_types(fields_meta: &str, columns: &[String]) -> Vec<Option<String>> {
    positional_types(fields_meta, columns)
        .map(|kinds| kinds.into_iter().map(Some).collect())
        .unwrap_or_else(|| {
        columns
            .iter()
            .map(|column| declared_type(fields_meta, column))
            .collect()
    })
}

fn positional_types(fields_meta: &str, columns: &[String]) -> Option<Vec<String>> {
    let mut rest = fields_meta;
    let mut kinds = Vec::with_capacity(columns.len());
    for (i, column) in columns.iter().enumerate() {
        let after_name = rest.strip_prefix(column.as_str())?.strip_prefix(" (")?;
        let end = after_name.find(')')?;
        kinds.push(after_name[..end].trim().to_string());
        let after_type = &after_name[end + 1..];
        rest = if i + 1 == columns.len() {
            after_type.is_empty().then_some(after_type)?
        } else {
            after_type.strip_prefix(", ")?
        };
    }
    Some(kinds)
}

/// Declared type of one `column`, matching a whole `<column> (<type>)` item.
///
/// The item must start the annotation or follow `, ` and must end it or be
/// followed by `, `, so a name never matches inside a longer one.
fn declared_type(fields_meta: &str, column: &str) -> Option<String> {
    let needle = format!("{} (", column);
    fields_meta.match_indices(&needle).find_map(|(start, _)| {
        if start != 0 && !fields_meta[..start].ends_with(", ") {
            return None;
        }
        let rest = &fields_meta[start + needle.len()..];
        let end = rest.find(')')?;
        let after = &rest[end + 1..];
        if !(after.is_empty() || after.starts_with(", ")) {
            return None;
        }
        let kind = rest[..end].trim();
        (!kind.is_empty()).then(|| kind.to_string())
    })
}

/// Parse exported CSV text back into a record.
///
/// Values stay strings; see `coerce_entries` to type them. The `# Record:`
/// annotation names the record, else `fallback_name` does.
///
/// # Errors
///
/// Returns `EntryLevelError::MalformedInput` when there are fewer than two
/// lines, no header row, or no data rows.
pub fn parse_csv_to_record(content: &str, fallback_name: &str) -> Result<Record> {
    let lines: Vec<&str> = content.trim().split('\n').collect();
    if lines.len() < 2 {
        return Err(EntryLevelError::malformed(
            "CSV must have at least a header row and one data row",
        ));
    }

    let mut record_name: Option<String> = None;
    let mut fields_meta: Option<String> = None;
    let mut header_index = 0;

    for (i, raw) in lines.iter().enumerate() {
        let line = raw.trim();
        if line.starts_with('#') {
            if let Some(rest) = line.strip_prefix(RECORD_PREFIX) {
                record_name = Some(rest.trim().to_string());
            } else if let Some(rest) = line.strip_prefix(FIELDS_PREFIX) {
                fields_meta = Some(rest.trim().to_string());
            }
            header_index = i + 1;
        } else if line.is_empty() {
            header_index = i + 1;
        } else {
            break;
        }
    }

    let header_line = lines
        .get(header_index)
        .filter(|line| !line.is_empty())
        .ok_or_else(|| EntryLevelError::malformed("No header row found in CSV"))?;
    let headers = parse_csv_line(header_line);

    let mut entries = Vec::new();
    for raw in &lines[header_index + 1..] {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let values = parse_csv_line(line);
        let entry: Entry = headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                let value = values.get(i).cloned().unwrap_or_default();
                (header.clone(), serde_json::Value::String(value))
            })
            .collect();
        entries.push(entry);
    }

    if entries.is_empty() {
        return Err(EntryLevelError::malformed("No valid data rows found in CSV"));
    }

    let name = record_name
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| fallback_name.to_string());

    let kinds = match fields_meta.as_deref() {
        Some(meta) => declared_types(meta, &headers),
        None => vec![None; headers.len()],
    };
    let fields = headers
        .iter()
        .zip(kinds)
        .map(|(header, kind)| Field {
            name: header.clone(),
            field_type: kind
                .filter(|kind| !kind.is_empty())
                .unwrap_or_else(|| FieldType::Text.as_str().to_string()),
        })
        .collect();

    Ok(Record::new(&Template::new(name, fields)).with_entries(entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transfer::coerce_entries;
    use chrono::TimeZone;
    use serde_json::{json, Value};

    fn entry(pairs: &[(&str, Value)]) -> Entry {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    fn trip_log() -> Template {
        Template::new(
            "Trip Log",
            vec![
                Field::new("Miles", FieldType::Number),
                Field::new("Paid", FieldType::Boolean),
                Field::new("Trip Date", FieldType::Date),
                Field::new("Note", FieldType::Text),
            ],
        )
    }

    #[test]
    fn test_parse_csv_line_quotes_and_commas() {
        assert_eq!(parse_csv_line(r#""A,B","x""y",plain"#), vec!["A,B", "x\"y", "plain"]);
        assert_eq!(parse_csv_line("a,,"), vec!["a", "", ""]);
        assert_eq!(parse_csv_line(r#"" padded ",b"#), vec!["padded", "b"]);
        assert_eq!(parse_csv_line(""), vec![""]);
    }

    #[test]
    fn test_export_layout() {
        let record = Record::new(&trip_log()).with_entries(vec![entry(&[
            ("Miles", json!(12.5)),
            ("Paid", json!(true)),
            ("Trip Date", Value::Null),
            ("Note", json!("say \"hi\"")),
        ])]);
        let at = Utc.with_ymd_and_hms(2024, 2, 3, 4, 5, 6).unwrap();

        let exported = export_as_csv_at(&record, at).unwrap();
        assert_eq!(exported.file_name, "Trip_Log.csv");

        let lines: Vec<&str> = exported.content.split('\n').collect();
        assert_eq!(lines[0], "# Record: Trip Log");
        assert_eq!(
            lines[1],
            "# Fields: Miles (number), Paid (boolean), Trip Date (date), Note (text)"
        );
        assert_eq!(lines[2], "# Exported: 2024-02-03T04:05:06.000Z");
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], r#""Miles","Paid","Trip Date","Note""#);
        assert_eq!(lines[5], r#""12.5","true","","say ""hi""""#);
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_export_empty_record_fails() {
        let record = Record::new(&trip_log());
        assert!(matches!(
            export_as_csv(&record),
            Err(EntryLevelError::EmptyRecord)
        ));
    }

    #[test]
    fn test_export_columns_follow_template_fields() {
        let template = Template::new(
            "T",
            vec![
                Field::new("A", FieldType::Text),
                Field::new("B", FieldType::Text),
            ],
        );
        let record = Record::new(&template)
            .with_entries(vec![entry(&[("B", json!("b"))]), entry(&[("A", json!("a"))])]);

        let content = export_as_csv(&record).unwrap().content;
        assert!(content.ends_with("\"A\",\"B\"\n\"\",\"b\"\n\"a\",\"\""));
    }

    #[test]
    fn test_export_without_fields_uses_first_entry_keys() {
        let record = Record::default().with_entries(vec![entry(&[("X", json!(1)), ("Y", json!(2))])]);
        let content = export_as_csv(&record).unwrap().content;
        assert!(content.starts_with("# Record: record\n# Fields: X, Y\n"));
        assert!(content.ends_with("\"X\",\"Y\"\n\"1\",\"2\""));
    }

    #[test]
    fn test_comma_inside_value_survives() {
        let template = Template::new(
            "People",
            vec![
                Field::new("Name", FieldType::Text),
                Field::new("Active", FieldType::Boolean),
            ],
        );
        let record = Record::new(&template)
            .with_entries(vec![entry(&[("Name", json!("A,B")), ("Active", json!(true))])]);

        let content = export_as_csv(&record).unwrap().content;
        let parsed = parse_csv_to_record(&content, "ignored").unwrap();

        assert_eq!(parsed.entries[0]["Name"], json!("A,B"));
        assert_eq!(parsed.entries[0]["Active"], json!("true"));
    }

    #[test]
    fn test_round_trip_recovers_typed_entries() {
        let record = Record::new(&trip_log()).with_entries(vec![
            entry(&[
                ("Miles", json!(12.5)),
                ("Paid", json!(true)),
                ("Trip Date", json!("2024-01-02")),
                ("Note", json!("lunch, \"client\"")),
            ]),
            entry(&[
                ("Miles", json!(7)),
                ("Paid", json!(false)),
                ("Trip Date", json!("2024-01-03")),
                ("Note", json!("")),
            ]),
        ]);

        let content = export_as_csv(&record).unwrap().content;
        let mut parsed = parse_csv_to_record(&content, "fallback").unwrap();
        coerce_entries(&mut parsed);

        assert_eq!(parsed.template, record.template);
        assert_eq!(parsed.entries, record.entries);
    }

    #[test]
    fn test_parse_without_metadata_defaults_to_text() {
        let parsed = parse_csv_to_record("Item,Qty\nbolt,4\n\nnut\n", "Parts").unwrap();
        assert_eq!(parsed.template.name, "Parts");
        assert_eq!(parsed.template.fields[1], Field::new("Qty", FieldType::Text));
        assert_eq!(parsed.entries.len(), 2);
        assert_eq!(parsed.entries[1]["Qty"], json!(""));
    }

    #[test]
    fn test_parse_skips_comment_rows_and_crlf() {
        let parsed =
            parse_csv_to_record("# Record:   Fuel  \r\n\"Gallons\"\r\n# note\r\n\"9\"\r\n", "x").unwrap();
        assert_eq!(parsed.template.name, "Fuel");
        assert_eq!(parsed.entries.len(), 1);
        assert_eq!(parsed.entries[0]["Gallons"], json!("9"));
    }

    #[test]
    fn test_parse_errors() {
        for bad in ["", "only,a,header", "# Record: x\n# Fields: y", "\"A\"\n# just a comment"] {
            assert!(
                matches!(
                    parse_csv_to_record(bad, "x"),
                    Err(EntryLevelError::MalformedInput(_))
                ),
                "{:?} should fail",
                bad
            );
        }
    }

    #[test]
    fn test_declared_type_matches_whole_names() {
        let meta = "Cost (number), Unit Cost (money)";
        assert_eq!(declared_type(meta, "Unit Cost").as_deref(), Some("money"));
        assert_eq!(declared_type(meta, "Cost").as_deref(), Some("number"));
        assert_eq!(declared_type(meta, "Missing"), None);
    }

    #[test]
    fn test_declared_type_ignores_parenthesized_prefix() {
        let meta = "Cost (USD) (money), Cost (number)";
        assert_eq!(declared_type(meta, "Cost").as_deref(), Some("number"));
        assert_eq!(declared_type(meta, "Cost (USD)").as_deref(), Some("money"));
    }

    #[test]
    fn test_declared_types_positional_then_lookup() {
        let columns = vec!["Cost (USD)".to_string(), "Cost".to_string()];
        assert_eq!(
            declared_types("Cost (USD) (money), Cost (number)", &columns),
            vec![Some("money".to_string()), Some("number".to_string())]
        );

        // Reordered annotation no longer lines up with the header.
        assert_eq!(
            declared_types("Cost (number), Cost (USD) (money)", &columns),
            vec![Some("money".to_string()), Some("number".to_string())]
        );

        // Field-less exports annotate bare names.
        let bare = vec!["X".to_string(), "Y".to_string()];
        assert_eq!(declared_types("X, Y", &bare), vec![None, None]);
    }

    #[test]
    fn test_round_trip_with_parentheses_in_field_names() {
        let template = Template::new(
            "Costs",
            vec![
                Field::new("Cost (USD)", FieldType::Money),
                Field::new("Cost", FieldType::Number),
            ],
        );
        let record = Record::new(&template)
            .with_entries(vec![entry(&[("Cost (USD)", json!(5)), ("Cost", json!(7))])]);

        let content = export_as_csv(&record).unwrap().content;
        let mut parsed = parse_csv_to_record(&content, "fallback").unwrap();
        coerce_entries(&mut parsed);

        assert_eq!(parsed.template, record.template);
        assert_eq!(parsed.entries, record.entries);
    }
}
