//! Record documents stored one per JSON file.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use crate::catalog::RecordInfo;
use crate::error::{EntryLevelError, Result};
use crate::fs::write_json;
use crate::schema::{Entry, Record};
use crate::storage::layout::{DataDir, RECORD_SUFFIX};
use crate::storage::traits::RecordStore;

/// Record store over the `records/` directory.
///
/// Read-modify-write cycles on one file are serialized through a mutex keyed
/// by file name; writes themselves are atomic.
pub struct JsonRecordStore {
    records_dir: PathBuf,
    file_locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl JsonRecordStore {
    pub fn new(data_dir: &DataDir) -> Self {
        Self {
            records_dir: data_dir.records_dir(),
            file_locks: Mutex::new(HashMap::new()),
        }
    }

    pub fn records_dir(&self) -> &Path {
        &self.records_dir
    }

    /// Resolve a caller-supplied file name inside the records directory.
    ///
    /// Only names that `list_records` would report are accepted: a plain
    /// file name, not hidden, ending in `.json`.
    fn record_path(&self, file_name: &str) -> Result<PathBuf> {
        let mut components = Path::new(file_name).components();
        let plain = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );
        let listable = file_name.len() > RECORD_SUFFIX.len()
            && file_name.ends_with(RECORD_SUFFIX)
            && !file_name.starts_with('.');
        if plain && listable {
            Ok(self.records_dir.join(file_name))
        } else {
            Err(EntryLevelError::InvalidInput(format!(
                "Invalid record file name '{}' (expected NAME{})",
                file_name, RECORD_SUFFIX
            )))
        }
    }

    fn file_lock(&self, file_name: &str) -> Result<Arc<Mutex<()>>> {
        let mut locks = self
            .file_locks
            .lock()
            .map_err(|_| EntryLevelError::Storage("Record lock table poisoned".to_string()))?;
        Ok(locks
            .entry(file_name.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone())
    }

    /// Run a load-mutate-save cycle on one record file under its lock.
    fn modify<F>(&self, file_name: &str, mutate: F) -> Result<Record>
    where
        F: FnOnce(&mut Record) -> Result<()>,
    {
        let lock = self.file_lock(file_name)?;
        let _guard = lock
            .lock()
            .map_err(|_| EntryLevelError::Storage(format!("Lock for {} poisoned", file_name)))?;

        let mut record = self.load_record(file_name)?;
        mutate(&mut record)?;
        self.save_record(file_name, &record)?;
        Ok(record)
    }

    fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.records_dir).map_err(|e| {
            EntryLevelError::Storage(format!(
                "Failed to create {}: {}",
                self.records_dir.display(),
                e
            ))
        })
    }
}

impl RecordStore for JsonRecordStore {
    fn list_records(&self) -> Result<Vec<String>> {
        self.ensure_dir()?;
        let mut names = Vec::new();
        for dir_entry in fs::read_dir(&self.records_dir)? {
            let dir_entry = dir_entry?;
            if !dir_entry.file_type()?.is_file() {
                continue;
            }
            if let Some(name) = dir_entry.file_name().to_str() {
                if name.ends_with(RECORD_SUFFIX) && !name.starts_with('.') {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    fn load_record(&self, file_name: &str) -> Result<Record> {
        let path = self.record_path(file_name)?;
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(EntryLevelError::not_found(format!(
                    "Record file '{}' not found",
                    file_name
                )))
            }
            Err(e) => return Err(e.into()),
        };
        serde_json::from_str(&contents)
            .map_err(|e| EntryLevelError::malformed(format!("{}: {}", file_name, e)))
    }

    fn save_record(&self, file_name: &str, record: &Record) -> Result<()> {
        let path = self.record_path(file_name)?;
        write_json(&path, record)?;
        debug!(file = file_name, entries = record.entries.len(), "saved record");
        Ok(())
    }

    fn append_entries(&self, file_name: &str, entries: Vec<Entry>) -> Result<Record> {
        self.modify(file_name, |record| {
            record.entries.extend(entries);
            Ok(())
        })
    }

    fn delete_entry_at_index(&self, file_name: &str, index: i64) -> Result<Record> {
        self.modify(file_name, |record| {
            let len = record.entries.len();
            let position = usize::try_from(index)
                .ok()
                .filter(|i| *i < len)
                .ok_or(EntryLevelError::IndexOutOfRange { index, len })?;
            record.entries.remove(position);
            Ok(())
        })
    }

    fn delete_record_file(&self, file_name: &str) -> Result<()> {
        let path = self.record_path(file_name)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(file = file_name, "deleted record");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(EntryLevelError::not_found(
                format!("Record file '{}' not found", file_name),
            )),
            Err(e) => Err(e.into()),
        }
    }

    fn record_catalog(&self) -> Result<Vec<RecordInfo>> {
        let mut infos = Vec::new();
        for file_name in self.list_records()? {
            match self.load_record(&file_name) {
                Ok(record) => infos.push(RecordInfo {
                    file_name,
                    template: record.template,
                }),
                Err(err) => {
                    warn!(file = %file_name, %err, "skipping unreadable record");
                }
            }
        }
        Ok(infos)
    }
}
