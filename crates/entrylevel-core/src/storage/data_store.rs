//! One data directory, both stores, the whole command surface.

use std::path::Path;

use chrono::NaiveDateTime;
use tracing::debug;

use crate::catalog::RecordInfo;
use crate::defaults::builtin_templates;
use crate::error::{EntryLevelError, Result};
use crate::schema::{Entry, Record, Template};
use crate::storage::json_files::{JsonRecordStore, JsonTemplateStore};
use crate::storage::layout::{DataDir, RECORD_SUFFIX};
use crate::storage::traits::{RecordStore, TemplateStore};
use crate::transfer::{self, ExportedFile};
use crate::validation::validate_record_for_export;

/// Facade over the template and record stores of one data directory.
///
/// Holds no per-session state: the template or record an operation acts on
/// is always passed in.
pub struct DataStore {
    data_dir: DataDir,
    templates: JsonTemplateStore,
    records: JsonRecordStore,
}

impl DataStore {
    /// Open the data directory at `root`, creating its layout if needed.
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        let data_dir = DataDir::new(root.as_ref());
        data_dir.ensure()?;
        debug!(root = %data_dir.root().display(), "opened data store");
        Ok(Self {
            templates: JsonTemplateStore::new(&data_dir),
            records: JsonRecordStore::new(&data_dir),
            data_dir,
        })
    }

    pub fn data_dir(&self) -> &DataDir {
        &self.data_dir
    }

    pub fn templates(&self) -> &JsonTemplateStore {
        &self.templates
    }

    pub fn records(&self) -> &JsonRecordStore {
        &self.records
    }

    /// Write the built-in Default templates unless a default namespace exists.
    pub fn seed_default_templates(&self) -> Result<bool> {
        self.templates.seed_defaults(&builtin_templates())
    }

    // Templates

    pub fn list_templates(&self) -> Vec<Template> {
        self.templates.list_templates()
    }

    pub fn load_template(&self, name: &str) -> Option<Template> {
        self.templates.load_template(name)
    }

    pub fn save_template(&self, name: &str, template: &Template) -> Result<()> {
        self.templates.save_template(name, template)
    }

    pub fn create_template(&self, template: &Template) -> Result<Template> {
        self.templates.create_template(template)
    }

    pub fn update_template(&self, old_name: &str, template: &Template) -> Result<Template> {
        self.templates.update_template(old_name, template)
    }

    pub fn delete_template(&self, name: &str) -> Result<()> {
        self.templates.delete_template(name)
    }

    pub fn template_exists(&self, name: &str) -> bool {
        self.templates.template_exists(name)
    }

    // Records

    pub fn list_records(&self) -> Result<Vec<String>> {
        self.records.list_records()
    }

    pub fn load_record(&self, file_name: &str) -> Result<Record> {
        self.records.load_record(file_name)
    }

    pub fn save_record(&self, file_name: &str, record: &Record) -> Result<()> {
        self.records.save_record(file_name, record)
    }

    pub fn append_entries(&self, file_name: &str, entries: Vec<Entry>) -> Result<Record> {
        self.records.append_entries(file_name, entries)
    }

    pub fn delete_entry_at_index(&self, file_name: &str, index: i64) -> Result<Record> {
        self.records.delete_entry_at_index(file_name, index)
    }

    pub fn delete_record_file(&self, file_name: &str) -> Result<()> {
        self.records.delete_record_file(file_name)
    }

    pub fn get_all_template_info(&self) -> Result<Vec<Template>> {
        self.records.get_all_template_info()
    }

    pub fn record_catalog(&self) -> Result<Vec<RecordInfo>> {
        self.records.record_catalog()
    }

    /// An empty record for the template called `template_name`.
    pub fn start_record(&self, template_name: &str) -> Result<Record> {
        self.load_template(template_name)
            .map(|template| Record::new(&template))
            .ok_or_else(|| {
                EntryLevelError::not_found(format!("Template '{}' not found", template_name))
            })
    }

    /// Save `record` under a fresh conventional file name and return the name.
    ///
    /// A numeric suffix is added when a record with the same name and
    /// timestamp already exists.
    pub fn save_new_record(&self, record: &Record, at: NaiveDateTime) -> Result<String> {
        let base = transfer::record_file_name(&record.template.name, at);
        let stem = base.trim_end_matches(RECORD_SUFFIX).to_string();

        let mut file_name = base;
        let mut attempt = 1;
        while self.records.records_dir().join(&file_name).exists() {
            attempt += 1;
            file_name = format!("{}_{}{}", stem, attempt, RECORD_SUFFIX);
        }

        self.records.save_record(&file_name, record)?;
        Ok(file_name)
    }

    // Import / export

    pub fn export_as_json(&self, file_name: &str) -> Result<ExportedFile> {
        let record = self.load_record(file_name)?;
        transfer::export_as_json(&record)
    }

    /// # Errors
    ///
    /// Besides load failures, returns `EntryLevelError::InvalidInput` for a
    /// record with no name and `EntryLevelError::EmptyRecord` for one with no
    /// entries.
    pub fn export_as_csv(&self, file_name: &str) -> Result<ExportedFile> {
        let record = self.load_record(file_name)?;
        validate_record_for_export(&record)?;
        transfer::export_as_csv(&record)
    }

    /// Parse a `.csv` or `.json` file into an unsaved record.
    pub fn import_from_file(&self, path: &Path, fallback_name: Option<&str>) -> Result<Record> {
        transfer::import_from_file(path, fallback_name)
    }
}
