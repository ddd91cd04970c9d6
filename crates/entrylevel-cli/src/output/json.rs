//! JSON output formatting.

use serde::Serialize;

use entrylevel_core::Record;

/// Print any serializable value as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// A record together with the file it lives in.
pub fn record_json(file_name: &str, record: &Record) -> serde_json::Value {
    serde_json::json!({
        "file": file_name,
        "template": record.template,
        "entries": record.entries,
    })
}
