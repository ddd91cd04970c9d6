//! Lines and tables for each output mode.
//!
//! Plain output is `key=value` lines and tab-separated rows so scripts can
//! parse it; pretty output is for people.

use comfy_table::{presets, Attribute, Cell, ContentArrangement, Table};
use serde_json::{Map, Value};

use super::style::{bold, dim, paint, Badge};
use super::terminal::{OutputMode, UiContext};

/// Plain-mode key: `Data Dir` becomes `data_dir`.
fn plain_key(label: &str) -> String {
    label.to_lowercase().replace(' ', "_")
}

fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    format!(
        "{} {}",
        paint(kind.label(ctx.unicode), kind.style(), ctx.color),
        message
    )
}

/// Title for a `show` command, e.g. `EntryLevel · template (Trip Log)`.
pub fn header(ctx: &UiContext, command: &str, subject: &str) -> String {
    if !ctx.mode.is_pretty() {
        return format!("entrylevel {} {}", command, subject);
    }
    let sep = if ctx.unicode { "\u{00B7}" } else { "-" };
    format!(
        "{} {} {} ({})",
        paint("EntryLevel", bold(), ctx.color),
        sep,
        command,
        subject
    )
}

pub fn kv(ctx: &UiContext, label: &str, value: &str) -> String {
    if ctx.mode.is_pretty() {
        format!("{} {}", paint(&format!("{}:", label), dim(), ctx.color), value)
    } else {
        format!("{}={}", plain_key(label), value)
    }
}

pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.mode.is_pretty() {
        format!("{} {}", paint("Hint:", dim(), ctx.color), text)
    } else {
        format!("hint={}", text)
    }
}

/// Summary of a completed action. JSON mode yields one object with `status`.
pub fn receipt(ctx: &UiContext, title: &str, items: &[(&str, String)]) -> String {
    if ctx.mode.is_json() {
        let mut object = Map::new();
        object.insert("status".to_string(), Value::from("ok"));
        object.extend(
            items
                .iter()
                .map(|(label, value)| (plain_key(label), Value::from(value.as_str()))),
        );
        return Value::Object(object).to_string();
    }

    let (first, indent) = if ctx.mode.is_pretty() {
        (badge(ctx, Badge::Ok, title), "  ")
    } else {
        ("status=ok".to_string(), "")
    };
    std::iter::once(first)
        .chain(
            items
                .iter()
                .map(|(label, value)| format!("{}{}", indent, kv(ctx, label, value))),
        )
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn print_receipt(ctx: &UiContext, title: &str, items: &[(&str, String)]) {
    println!("{}", receipt(ctx, title, items));
}

/// Reported when a confirmation prompt is declined.
pub fn print_cancelled(ctx: &UiContext) {
    match ctx.mode {
        OutputMode::Pretty => println!("{}", badge(ctx, Badge::Info, "Cancelled")),
        OutputMode::Plain => println!("status=cancelled"),
        OutputMode::Json => println!("{}", serde_json::json!({ "status": "cancelled" })),
    }
}

/// Aligned columns under a dim header; plain mode drops the header.
pub fn simple_table<H: AsRef<str>>(ctx: &UiContext, headers: &[H], rows: &[Vec<String>]) -> String {
    if !ctx.mode.is_pretty() {
        return rows
            .iter()
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>()
            .join("\n");
    }

    let mut table = Table::new();
    table
        .load_preset(presets::NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(u16::try_from(ctx.width).unwrap_or(u16::MAX));
    table.set_header(headers.iter().map(|h| {
        let cell = Cell::new(h.as_ref());
        if ctx.color {
            cell.add_attribute(Attribute::Dim)
        } else {
            cell
        }
    }));
    table.add_rows(rows);
    for column in table.column_iter_mut() {
        column.set_padding((0, 2));
    }
    table.to_string()
}

/// Write a line unless the command is producing JSON.
pub fn print(ctx: &UiContext, line: &str) {
    if !ctx.mode.is_json() {
        println!("{}", line);
    }
}

pub fn blank_line(ctx: &UiContext) {
    if ctx.mode.is_pretty() {
        println!();
    }
}

fn error_lines(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    if ctx.mode.is_pretty() {
        let mut out = badge(ctx, Badge::Err, message);
        if let Some(h) = error_hint {
            out.push('\n');
            out.push_str(&paint(h, dim(), ctx.color));
        }
        out
    } else {
        let mut out = format!("error={}", message);
        if let Some(h) = error_hint {
            out.push_str("\nhint=");
            out.push_str(h.trim_start_matches("Hint: "));
        }
        out
    }
}

pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    eprintln!("{}", error_lines(ctx, message, error_hint));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> UiContext {
        UiContext::fixed(OutputMode::Plain)
    }

    fn pretty() -> UiContext {
        UiContext::fixed(OutputMode::Pretty)
    }

    #[test]
    fn test_kv_key_depends_on_mode() {
        assert_eq!(kv(&plain(), "Data Dir", "/x"), "data_dir=/x");
        assert_eq!(kv(&pretty(), "Data Dir", "/x"), "Data Dir: /x");
    }

    #[test]
    fn test_receipt_in_each_mode() {
        let items = [("File", "a.json".to_string()), ("Entries", "2".to_string())];

        assert_eq!(
            receipt(&plain(), "Saved", &items),
            "status=ok\nfile=a.json\nentries=2"
        );
        assert_eq!(
            receipt(&pretty(), "Saved", &items),
            "[OK] Saved\n  File: a.json\n  Entries: 2"
        );

        let json: Value =
            serde_json::from_str(&receipt(&UiContext::fixed(OutputMode::Json), "Saved", &items))
                .unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["entries"], "2");
    }

    #[test]
    fn test_header_ascii_separator() {
        assert_eq!(
            header(&pretty(), "record", "trips.json"),
            "EntryLevel - record (trips.json)"
        );
    }

    #[test]
    fn test_table_plain_rows_are_tab_separated() {
        let rows = vec![
            vec!["1".to_string(), "x y".to_string()],
            vec!["2".to_string(), "z".to_string()],
        ];
        assert_eq!(simple_table(&plain(), &["A", "B"], &rows), "1\tx y\n2\tz");
    }

    #[test]
    fn test_table_pretty_shows_header() {
        let rows = vec![vec!["Trip Log".to_string(), "2".to_string()]];
        let out = simple_table(&pretty(), &["Name", "Fields"], &rows);
        assert!(out.contains("Name"));
        assert!(out.contains("Trip Log"));
    }

    #[test]
    fn test_plain_error_drops_hint_label() {
        assert_eq!(
            error_lines(
                &plain(),
                "Template 'x' not found",
                Some("Hint: Run `entrylevel template list`.")
            ),
            "error=Template 'x' not found\nhint=Run `entrylevel template list`."
        );
    }
}
