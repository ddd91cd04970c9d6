//! Template drafts: fields staged while a template is being authored.

use super::types::{Field, FieldType, Template};
use crate::error::{EntryLevelError, Result};
use crate::validation::{validate_template_fields, validate_template_name};

/// A template under construction.
///
/// Holds the staged field list explicitly instead of in shared state; the
/// caller owns the draft for as long as authoring lasts and drops it on
/// navigation.
#[derive(Debug, Clone, Default)]
pub struct TemplateDraft {
    name: String,
    fields: Vec<Field>,
}

impl TemplateDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Start from an existing template (for editing).
    pub fn from_template(template: &Template) -> Self {
        Self {
            name: template.name.clone(),
            fields: template.fields.clone(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Stage a field. Duplicates are allowed here and reported by [`validate`](Self::validate).
    pub fn add_field(&mut self, name: impl Into<String>, kind: FieldType) -> &mut Self {
        self.fields.push(Field::new(name, kind));
        self
    }

    /// Stage a field as given, including one whose type name is not recognized.
    pub fn push_field(&mut self, field: Field) -> &mut Self {
        self.fields.push(field);
        self
    }

    /// Remove the staged field at `index`.
    pub fn remove_field(&mut self, index: usize) -> Option<Field> {
        if index < self.fields.len() {
            Some(self.fields.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.fields.clear();
    }

    /// Every problem with the draft's name and fields.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = validate_template_name(&self.name);
        errors.extend(validate_template_fields(&self.fields));
        errors
    }

    /// Finish the draft, failing with all validation messages joined.
    pub fn build(self) -> Result<Template> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(EntryLevelError::InvalidInput(errors.join("; ")));
        }
        Ok(Template::new(self.name.trim(), self.fields))
    }
}
