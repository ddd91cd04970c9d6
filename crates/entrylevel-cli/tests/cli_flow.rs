use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_entrylevel"))
}

/// Temp config and data homes, removed when dropped.
struct Sandbox {
    _root: TempDir,
    config_home: PathBuf,
    data_home: PathBuf,
}

impl Sandbox {
    fn new() -> Self {
        let root = tempfile::tempdir().expect("tempdir should succeed");
        let config_home = root.path().join("c");
        let data_home = root.path().join("d");
        std::fs::create_dir_all(&config_home).expect("create config dir");
        std::fs::create_dir_all(&data_home).expect("create data dir");
        Self {
            _root: root,
            config_home,
            data_home,
        }
    }

    fn data_dir(&self) -> PathBuf {
        self.data_home.join("entrylevel")
    }

    fn run(&self, args: &[&str]) -> Output {
        let mut cmd = Command::new(bin());
        cmd.args(args)
            .env("XDG_CONFIG_HOME", &self.config_home)
            .env("XDG_DATA_HOME", &self.data_home)
            .env_remove("ENTRYLEVEL_DATA_DIR")
            .env_remove("ENTRYLEVEL_CONFIG")
            .env_remove("ENTRYLEVEL_LOG");
        cmd.output().expect("run entrylevel")
    }

    fn run_ok(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "{:?} failed: stdout={}, stderr={}",
            args,
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    fn init(&self) {
        self.run_ok(&["init"]);
    }
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_cli_init_seeds_defaults_and_writes_config() {
    let sandbox = Sandbox::new();
    let stdout = sandbox.run_ok(&["init"]);
    assert!(stdout.contains("status=ok"));

    let data_dir = sandbox.data_dir();
    assert!(data_dir.join("templates").join("defaultTemplates.json").exists());
    assert!(data_dir.join("records").is_dir());

    let config_path = sandbox.config_home.join("entrylevel").join("config.toml");
    let contents = std::fs::read_to_string(&config_path).expect("read config");
    let value: toml::Value = toml::from_str(&contents).expect("parse config");
    assert_eq!(
        value["storage"]["data_dir"].as_str(),
        Some(&*data_dir.to_string_lossy())
    );

    let list = sandbox.run_ok(&["template", "list", "--json"]);
    let templates: serde_json::Value = serde_json::from_str(&list).expect("parse list json");
    let names: Vec<&str> = templates
        .as_array()
        .expect("template array")
        .iter()
        .filter_map(|t| t["name"].as_str())
        .collect();
    assert_eq!(names, vec!["Expense Log", "Inventory", "Mileage"]);
    assert_eq!(templates[0]["source"], "Default");
}

#[test]
fn test_cli_init_no_defaults_and_quiet() {
    let sandbox = Sandbox::new();
    let stdout = sandbox.run_ok(&["init", "--no-defaults", "--quiet"]);
    assert!(stdout.trim().is_empty());

    let list = sandbox.run_ok(&["template", "list"]);
    assert!(list.contains("No templates found."));
}

#[test]
fn test_cli_missing_data_message() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["template", "list"]);

    assert_eq!(output.status.code(), Some(3));
    let stderr = stderr_of(&output);
    assert!(stderr.contains("No EntryLevel data found at"));
    assert!(stderr.contains(&*sandbox.data_dir().to_string_lossy()));
    assert!(stderr.contains("entrylevel init"));
}

#[test]
fn test_cli_data_dir_flag_overrides_config() {
    let sandbox = Sandbox::new();
    sandbox.init();

    let other = sandbox.data_home.join("elsewhere");
    let other_arg = other.to_string_lossy().to_string();
    sandbox.run_ok(&["--data-dir", &other_arg, "init", "--no-defaults"]);
    sandbox.run_ok(&["--data-dir", &other_arg, "template", "create", "Only Here", "-f", "A:text"]);

    let here = sandbox.run_ok(&["--data-dir", &other_arg, "template", "exists", "Only Here"]);
    assert_eq!(here.trim(), "true");

    let output = sandbox.run(&["template", "exists", "Only Here"]);
    assert_eq!(output.status.code(), Some(3));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "false");
}

#[test]
fn test_cli_template_lifecycle() {
    let sandbox = Sandbox::new();
    sandbox.init();

    let created = sandbox.run_ok(&[
        "template",
        "create",
        "Trip Log",
        "--field",
        "Miles:number",
        "--field",
        "Paid:boolean",
    ]);
    assert!(created.contains("name=Trip Log"));
    assert!(created.contains("fields=2"));

    let duplicate = sandbox.run(&["template", "create", "Trip Log", "-f", "X:text"]);
    assert_eq!(duplicate.status.code(), Some(5));

    let builtin_clash = sandbox.run(&["template", "create", "Mileage", "-f", "X:text"]);
    assert_eq!(builtin_clash.status.code(), Some(5));

    sandbox.run_ok(&["template", "update", "Trip Log", "--rename", "Trips"]);
    let show = sandbox.run_ok(&["template", "show", "Trips", "--json"]);
    let template: serde_json::Value = serde_json::from_str(&show).expect("parse show json");
    assert_eq!(template["name"], "Trips");
    assert_eq!(template["fields"][0]["name"], "Miles");
    assert_eq!(template["fields"][0]["type"], "number");

    let builtin_update = sandbox.run(&["template", "update", "Mileage", "--rename", "Km"]);
    assert_eq!(builtin_update.status.code(), Some(4));

    let refuse = sandbox.run(&["template", "delete", "Trips"]);
    assert!(!refuse.status.success());
    assert!(stderr_of(&refuse).contains("--force"));

    sandbox.run_ok(&["template", "delete", "Trips", "--force"]);
    let missing = sandbox.run(&["template", "show", "Trips"]);
    assert_eq!(missing.status.code(), Some(3));
    assert!(stderr_of(&missing).contains("entrylevel template list"));
}

#[test]
fn test_cli_template_create_reports_every_validation_error() {
    let sandbox = Sandbox::new();
    sandbox.init();

    let output = sandbox.run(&[
        "template",
        "create",
        "Bad",
        "-f",
        "Color:colour",
        "-f",
        "Color:text",
    ]);
    assert_eq!(output.status.code(), Some(6));
    let stderr = stderr_of(&output);
    assert!(stderr.contains("Validation failed: 2 error(s)"));
    assert!(stderr.contains("Invalid type 'colour'"));
    assert!(stderr.contains("used more than once"));

    let exists = sandbox.run(&["template", "exists", "Bad"]);
    assert_eq!(exists.status.code(), Some(3));
}

#[test]
fn test_cli_template_update_replaces_fields_and_validates() {
    let sandbox = Sandbox::new();
    sandbox.init();
    sandbox.run_ok(&["template", "create", "Fuel", "-f", "Gallons:decimal"]);

    let rejected = sandbox.run(&[
        "template", "update", "Fuel", "--rename", "Fuel?", "-f", "Liters:litres",
    ]);
    assert_eq!(rejected.status.code(), Some(6));
    assert!(stderr_of(&rejected).contains("Validation failed: 2 error(s)"));

    sandbox.run_ok(&["template", "update", "Fuel", "-f", "Liters:decimal", "-f", "Cost:money"]);
    let show = sandbox.run_ok(&["template", "show", "Fuel", "--json"]);
    let template: serde_json::Value = serde_json::from_str(&show).expect("parse show json");
    assert_eq!(template["fields"][0]["name"], "Liters");
    assert_eq!(template["fields"][1]["type"], "money");
    assert!(template["fields"].get(2).is_none());
}

#[test]
fn test_cli_record_create_append_show_remove() {
    let sandbox = Sandbox::new();
    sandbox.init();

    let created = sandbox.run_ok(&[
        "record",
        "create",
        "Mileage",
        "--file",
        "trips",
        "--set",
        "Date=2024-06-01",
        "--set",
        "Destination=Depot, North",
        "--set",
        "Miles=12.5",
    ]);
    assert!(created.contains("file=trips.json"));
    assert!(created.contains("entries=1"));

    sandbox.run_ok(&[
        "record",
        "append",
        "trips.json",
        "-s",
        "Date=2024-06-02",
        "-s",
        "Destination=Office",
        "-s",
        "Miles=3",
    ]);

    let show = sandbox.run_ok(&["record", "show", "trips", "--json"]);
    let record: serde_json::Value = serde_json::from_str(&show).expect("parse record json");
    assert_eq!(record["file"], "trips.json");
    assert_eq!(record["template"]["name"], "Mileage");
    assert_eq!(record["entries"].as_array().map(Vec::len), Some(2));
    assert_eq!(record["entries"][0]["Miles"], 12.5);
    assert_eq!(record["entries"][1]["Destination"], "Office");

    let out_of_range = sandbox.run(&["record", "remove-entry", "trips", "3"]);
    assert_eq!(out_of_range.status.code(), Some(4));
    assert!(stderr_of(&out_of_range).contains("No entry at position 3"));

    let removed = sandbox.run_ok(&["record", "remove-entry", "trips", "1"]);
    assert!(removed.contains("remaining=1"));

    let show = sandbox.run_ok(&["record", "show", "trips", "--json"]);
    let record: serde_json::Value = serde_json::from_str(&show).expect("parse record json");
    assert_eq!(record["entries"][0]["Destination"], "Office");

    let taken = sandbox.run(&["record", "create", "Mileage", "--file", "trips"]);
    assert_eq!(taken.status.code(), Some(5));
}

#[test]
fn test_cli_invalid_entry_is_not_written() {
    let sandbox = Sandbox::new();
    sandbox.init();
    sandbox.run_ok(&["record", "create", "Inventory", "--file", "stock"]);

    let output = sandbox.run(&[
        "record",
        "append",
        "stock",
        "-s",
        "Item=Bolts",
        "-s",
        "Quantity=many",
    ]);
    assert_eq!(output.status.code(), Some(6));
    let stderr = stderr_of(&output);
    assert!(stderr.contains("Quantity"));
    assert!(stderr.contains("Unit Cost is required"));

    let unknown = sandbox.run(&["record", "append", "stock", "-s", "Colour=red"]);
    assert_eq!(unknown.status.code(), Some(4));

    let show = sandbox.run_ok(&["record", "show", "stock", "--json"]);
    let record: serde_json::Value = serde_json::from_str(&show).expect("parse record json");
    assert_eq!(record["entries"].as_array().map(Vec::len), Some(0));
}

#[test]
fn test_cli_export_csv_and_import_round_trip() {
    let sandbox = Sandbox::new();
    sandbox.init();
    sandbox.run_ok(&[
        "record",
        "create",
        "Expense Log",
        "--file",
        "expenses",
        "-s",
        "Date=2024-06-01",
        "-s",
        "Description=Lunch, team",
        "-s",
        "Amount=42.50",
        "-s",
        "Reimbursed=false",
    ]);

    let csv = sandbox.run_ok(&["export", "expenses", "--format", "csv"]);
    assert!(csv.starts_with("# Record: Expense Log\n"));
    assert!(csv.contains("# Fields: Date (date), Description (text), Amount (money), Reimbursed (boolean)"));
    assert!(csv.contains("Lunch, team"));

    let out_dir = sandbox.data_home.join("out");
    std::fs::create_dir_all(&out_dir).expect("create out dir");
    let out_arg = out_dir.to_string_lossy().to_string();
    let receipt = sandbox.run_ok(&["export", "expenses", "--format", "csv", "-o", &out_arg]);
    assert!(receipt.contains("format=csv"));
    let csv_path = out_dir.join("Expense_Log.csv");
    assert!(csv_path.exists());

    let csv_arg = csv_path.to_string_lossy().to_string();
    let imported = sandbox.run_ok(&["import", &csv_arg, "--file", "copy"]);
    assert!(imported.contains("name=Expense Log"));
    assert!(imported.contains("entries=1"));

    let show = sandbox.run_ok(&["record", "show", "copy", "--json"]);
    let record: serde_json::Value = serde_json::from_str(&show).expect("parse record json");
    assert_eq!(record["entries"][0]["Description"], "Lunch, team");
    assert_eq!(record["entries"][0]["Amount"], 42.5);
    assert_eq!(record["entries"][0]["Reimbursed"], false);

    let valid = sandbox.run_ok(&["record", "validate", "copy"]);
    assert!(valid.contains("status=ok"));
}

#[test]
fn test_cli_export_empty_record_fails() {
    let sandbox = Sandbox::new();
    sandbox.init();
    sandbox.run_ok(&["record", "create", "Mileage", "--file", "empty"]);

    let output = sandbox.run(&["export", "empty", "--format", "csv"]);
    assert_eq!(output.status.code(), Some(4));
    assert!(stderr_of(&output).contains("no entries"));

    let json = sandbox.run_ok(&["export", "empty"]);
    let value: serde_json::Value = serde_json::from_str(&json).expect("parse export json");
    assert_eq!(value["template"]["name"], "Mileage");
}

#[test]
fn test_cli_validate_reports_hand_edited_record() {
    let sandbox = Sandbox::new();
    sandbox.init();

    let records = sandbox.data_dir().join("records");
    write_file(
        &records.join("broken.json"),
        r#"{"template":{"name":"Trip","fields":[{"name":"Miles","type":"number"}]},"entries":[{"Miles":"far"}]}"#,
    );

    let output = sandbox.run(&["record", "validate", "broken"]);
    assert_eq!(output.status.code(), Some(6));
    assert!(stderr_of(&output).contains("Entry 1: Miles"));

    let json = sandbox.run(&["record", "validate", "broken", "--json"]);
    assert_eq!(json.status.code(), Some(6));
    let summary: serde_json::Value =
        serde_json::from_slice(&json.stdout).expect("parse summary json");
    assert_eq!(summary["is_valid"], false);
    assert_eq!(summary["message"], "Validation failed: 1 error(s)");
}

#[test]
fn test_cli_catalog_filters_and_pages() {
    let sandbox = Sandbox::new();
    sandbox.init();
    sandbox.run_ok(&["record", "create", "Mileage", "--file", "a"]);
    sandbox.run_ok(&["record", "create", "Inventory", "--file", "b"]);
    sandbox.run_ok(&["record", "create", "Mileage", "--file", "c"]);

    let catalog = sandbox.run_ok(&["record", "catalog", "--filter", "miles", "--json"]);
    let page: serde_json::Value = serde_json::from_str(&catalog).expect("parse catalog json");
    assert_eq!(page["total_items"], 2);
    assert_eq!(page["items"][0]["file_name"], "a.json");
    assert_eq!(page["items"][1]["file_name"], "c.json");

    let list = sandbox.run_ok(&["record", "list", "--per-page", "2", "--page", "2", "--json"]);
    let page: serde_json::Value = serde_json::from_str(&list).expect("parse list json");
    assert_eq!(page["page"], 2);
    assert_eq!(page["total_pages"], 2);
    assert_eq!(page["items"][0], "c.json");
}

#[test]
fn test_cli_record_delete_requires_force() {
    let sandbox = Sandbox::new();
    sandbox.init();
    sandbox.run_ok(&["record", "create", "Mileage", "--file", "gone"]);

    let refuse = sandbox.run(&["record", "delete", "gone"]);
    assert!(!refuse.status.success());
    assert!(sandbox.data_dir().join("records").join("gone.json").exists());

    let deleted = sandbox.run_ok(&["record", "delete", "gone", "--force"]);
    assert!(deleted.contains("deleted=gone.json"));
    assert!(!sandbox.data_dir().join("records").join("gone.json").exists());

    let again = sandbox.run(&["record", "delete", "gone", "--force"]);
    assert_eq!(again.status.code(), Some(3));
}

#[test]
fn test_cli_import_json_with_fallback_name() {
    let sandbox = Sandbox::new();
    sandbox.init();

    let source = sandbox.data_home.join("incoming.json");
    write_file(
        &source,
        r#"{"template":{"name":"","fields":[{"name":"Item","type":"text"}]},"entries":[{"Item":"Washer"}]}"#,
    );
    let source_arg = source.to_string_lossy().to_string();

    let imported = sandbox.run_ok(&["import", &source_arg, "--name", "Parts", "--json"]);
    let receipt: serde_json::Value = serde_json::from_str(&imported).expect("parse receipt");
    assert_eq!(receipt["status"], "ok");
    assert_eq!(receipt["name"], "Parts");

    let file = receipt["file"].as_str().expect("file name");
    assert!(file.starts_with("Parts_"));
    assert!(file.ends_with(".json"));

    let bad = sandbox.data_home.join("notes.txt");
    write_file(&bad, "hello");
    let bad_arg = bad.to_string_lossy().to_string();
    let output = sandbox.run(&["import", &bad_arg]);
    assert_eq!(output.status.code(), Some(4));
}

fn write_file(path: &Path, contents: &str) {
    std::fs::write(path, contents).expect("write should succeed");
}
