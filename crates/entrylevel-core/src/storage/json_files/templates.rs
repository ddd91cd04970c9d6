//! Template namespaces stored as JSON arrays.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use tracing::{debug, warn};

use crate::error::{EntryLevelError, Result};
use crate::fs::write_json;
use crate::schema::{Template, TemplateSource};
use crate::storage::layout::DataDir;
use crate::storage::traits::TemplateStore;

/// Template store over `defaultTemplates.json` and `userTemplates.json`.
pub struct JsonTemplateStore {
    default_path: PathBuf,
    user_path: PathBuf,
    user_lock: Mutex<()>,
}

impl JsonTemplateStore {
    pub fn new(data_dir: &DataDir) -> Self {
        Self {
            default_path: data_dir.default_templates_path(),
            user_path: data_dir.user_templates_path(),
            user_lock: Mutex::new(()),
        }
    }

    /// Serialize read-modify-write cycles on the User namespace.
    fn lock_user(&self) -> Result<MutexGuard<'_, ()>> {
        self.user_lock
            .lock()
            .map_err(|_| EntryLevelError::Storage("Template store lock poisoned".to_string()))
    }

    /// Read a namespace for listing: missing or unreadable yields empty.
    fn read_lenient(path: &Path) -> Vec<Template> {
        match Self::read_strict(path) {
            Ok(templates) => templates,
            Err(err) => {
                warn!(path = %path.display(), %err, "skipping unreadable template namespace");
                Vec::new()
            }
        }
    }

    /// Read a namespace for mutation: missing yields empty, unreadable is an error.
    ///
    /// A corrupt User namespace must not be silently replaced by a fresh one.
    fn read_strict(path: &Path) -> Result<Vec<Template>> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(EntryLevelError::Storage(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )))
            }
        };
        let mut templates: Vec<Template> = serde_json::from_str(&contents).map_err(|e| {
            EntryLevelError::malformed(format!("{}: {}", path.display(), e))
        })?;
        for template in &mut templates {
            template.source = None;
        }
        Ok(templates)
    }

    fn write_user(&self, templates: &[Template]) -> Result<()> {
        write_json(&self.user_path, templates)?;
        debug!(path = %self.user_path.display(), count = templates.len(), "wrote user templates");
        Ok(())
    }

    fn defaults(&self) -> Vec<Template> {
        Self::read_lenient(&self.default_path)
    }

    /// Write the Default namespace unless it already exists.
    ///
    /// Returns `true` if the file was written.
    pub fn seed_defaults(&self, templates: &[Template]) -> Result<bool> {
        if self.default_path.exists() {
            debug!(path = %self.default_path.display(), "default templates already present");
            return Ok(false);
        }
        let snapshots: Vec<Template> = templates.iter().map(Template::snapshot).collect();
        write_json(&self.default_path, &snapshots)?;
        debug!(count = snapshots.len(), "seeded default templates");
        Ok(true)
    }
}

impl TemplateStore for JsonTemplateStore {
    fn list_templates(&self) -> Vec<Template> {
        let defaults = self
            .defaults()
            .into_iter()
            .map(|t| t.with_source(TemplateSource::Default));
        let users = Self::read_lenient(&self.user_path)
            .into_iter()
            .map(|t| t.with_source(TemplateSource::User));
        defaults.chain(users).collect()
    }

    fn create_template(&self, template: &Template) -> Result<Template> {
        let _guard = self.lock_user()?;
        let mut users = Self::read_strict(&self.user_path)?;

        let taken = self.defaults().iter().any(|t| t.name == template.name)
            || users.iter().any(|t| t.name == template.name);
        if taken {
            return Err(EntryLevelError::duplicate(format!(
                "Template '{}' already exists",
                template.name
            )));
        }

        let created = template.snapshot();
        users.push(created.clone());
        self.write_user(&users)?;
        Ok(created.with_source(TemplateSource::User))
    }

    fn save_template(&self, name: &str, template: &Template) -> Result<()> {
        let _guard = self.lock_user()?;
        let mut users = Self::read_strict(&self.user_path)?;

        let snapshot = template.snapshot();
        match users.iter().position(|t| t.name == name) {
            Some(pos) => users[pos] = snapshot,
            None => users.push(snapshot),
        }
        self.write_user(&users)
    }

    fn update_template(&self, old_name: &str, template: &Template) -> Result<Template> {
        let _guard = self.lock_user()?;
        let mut users = Self::read_strict(&self.user_path)?;

        let pos = users
            .iter()
            .position(|t| t.name == old_name)
            .ok_or_else(|| {
                EntryLevelError::not_found(format!("Template '{}' not found", old_name))
            })?;

        if template.name != old_name {
            let taken = self.defaults().iter().any(|t| t.name == template.name)
                || users
                    .iter()
                    .enumerate()
                    .any(|(i, t)| i != pos && t.name == template.name);
            if taken {
                return Err(EntryLevelError::duplicate(format!(
                    "Template '{}' already exists",
                    template.name
                )));
            }
        }

        let updated = template.snapshot();
        users[pos] = updated.clone();
        self.write_user(&users)?;
        Ok(updated.with_source(TemplateSource::User))
    }

    fn delete_template(&self, name: &str) -> Result<()> {
        let _guard = self.lock_user()?;
        let mut users = Self::read_strict(&self.user_path)?;

        let Some(pos) = users.iter().position(|t| t.name == name) else {
            if self.defaults().iter().any(|t| t.name == name) {
                return Err(EntryLevelError::not_found(format!(
                    "Template '{}' is a built-in template and cannot be deleted",
                    name
                )));
            }
            return Err(EntryLevelError::not_found(format!(
                "Template '{}' not found",
                name
            )));
        };

        users.remove(pos);
        self.write_user(&users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Field, FieldType};
    use tempfile::tempdir;

    fn template(name: &str) -> Template {
        Template::new(name, vec![Field::new("Value", FieldType::Text)])
    }

    #[test]
    fn test_missing_namespaces_list_empty() {
        let dir = tempdir().unwrap();
        let store = JsonTemplateStore::new(&DataDir::new(dir.path()));
        assert!(store.list_templates().is_empty());
    }

    #[test]
    fn test_corrupt_default_namespace_lists_empty() {
        let dir = tempdir().unwrap();
        let data = DataDir::new(dir.path());
        data.ensure().unwrap();
        fs::write(data.default_templates_path(), "not json").unwrap();

        let store = JsonTemplateStore::new(&data);
        store.create_template(&template("Mine")).unwrap();

        let names: Vec<_> = store.list_templates().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["Mine"]);
    }

    #[test]
    fn test_corrupt_user_namespace_blocks_mutation() {
        let dir = tempdir().unwrap();
        let data = DataDir::new(dir.path());
        data.ensure().unwrap();
        fs::write(data.user_templates_path(), "[{").unwrap();

        let store = JsonTemplateStore::new(&data);
        let err = store.create_template(&template("Mine")).unwrap_err();
        assert!(matches!(err, EntryLevelError::MalformedInput(_)));
        assert_eq!(
            fs::read_to_string(data.user_templates_path()).unwrap(),
            "[{"
        );
    }

    #[test]
    fn test_seed_defaults_only_once() {
        let dir = tempdir().unwrap();
        let store = JsonTemplateStore::new(&DataDir::new(dir.path()));

        assert!(store.seed_defaults(&[template("Builtin")]).unwrap());
        assert!(!store.seed_defaults(&[template("Other")]).unwrap());

        let listed = store.list_templates();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "Builtin");
        assert_eq!(listed[0].source, Some(TemplateSource::Default));
    }
}
