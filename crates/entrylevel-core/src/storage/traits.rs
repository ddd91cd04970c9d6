//! Store trait definitions.
//!
//! `TemplateStore` and `RecordStore` define the persistence contract the rest
//! of EntryLevel programs against. The JSON file backends in this crate are the
//! only implementations today.

use crate::catalog::RecordInfo;
use crate::error::Result;
use crate::schema::{Entry, Record, Template};

/// Template persistence across the Default and User namespaces.
///
/// All implementations must ensure:
/// - Listing never fails; an unreadable namespace lists as empty
/// - Only the User namespace is mutated
/// - Every mutation is persisted before the call returns
pub trait TemplateStore {
    /// List Default templates, then User templates, each tagged with its source.
    fn list_templates(&self) -> Vec<Template>;

    /// Create a new User template.
    ///
    /// # Errors
    ///
    /// Returns `EntryLevelError::DuplicateName` if any listed template
    /// already uses the name.
    fn create_template(&self, template: &Template) -> Result<Template>;

    /// Insert or replace the User template called `name`.
    fn save_template(&self, name: &str, template: &Template) -> Result<()>;

    /// Replace the User template called `old_name`, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns `EntryLevelError::NotFound` if `old_name` is not a User
    /// template, or `EntryLevelError::DuplicateName` if the new name belongs
    /// to a different template.
    fn update_template(&self, old_name: &str, template: &Template) -> Result<Template>;

    /// Delete the User template called `name`.
    ///
    /// # Errors
    ///
    /// Returns `EntryLevelError::NotFound` if no User template has that name.
    /// Default templates cannot be deleted.
    fn delete_template(&self, name: &str) -> Result<()>;

    /// Look up a template by exact name. Default templates win over User
    /// templates of the same name.
    fn load_template(&self, name: &str) -> Option<Template> {
        self.list_templates().into_iter().find(|t| t.name == name)
    }

    /// Whether any listed template has exactly this name.
    fn template_exists(&self, name: &str) -> bool {
        self.list_templates().iter().any(|t| t.name == name)
    }
}

/// Record persistence, one document per file.
///
/// Loading performs no schema validation; callers validate before use.
pub trait RecordStore {
    /// File names of every record, sorted.
    fn list_records(&self) -> Result<Vec<String>>;

    /// Load a record document as stored.
    ///
    /// # Errors
    ///
    /// Returns `EntryLevelError::NotFound` if the file does not exist and
    /// `EntryLevelError::MalformedInput` if it is not a record document.
    fn load_record(&self, file_name: &str) -> Result<Record>;

    /// Overwrite the whole document.
    fn save_record(&self, file_name: &str, record: &Record) -> Result<()>;

    /// Load, append `entries`, save. Returns the updated record.
    fn append_entries(&self, file_name: &str, entries: Vec<Entry>) -> Result<Record>;

    /// Load, remove the entry at `index`, save. Returns the updated record.
    ///
    /// # Errors
    ///
    /// Returns `EntryLevelError::IndexOutOfRange` unless
    /// `0 <= index < entries.len()`; the file is left untouched.
    fn delete_entry_at_index(&self, file_name: &str, index: i64) -> Result<Record>;

    /// Remove the record file.
    ///
    /// # Errors
    ///
    /// Returns `EntryLevelError::NotFound` if the file does not exist.
    fn delete_record_file(&self, file_name: &str) -> Result<()>;

    /// File name and template snapshot of every readable record.
    fn record_catalog(&self) -> Result<Vec<RecordInfo>>;

    /// Template snapshot of every readable record.
    fn get_all_template_info(&self) -> Result<Vec<Template>> {
        Ok(self
            .record_catalog()?
            .into_iter()
            .map(|info| info.template)
            .collect())
    }
}
