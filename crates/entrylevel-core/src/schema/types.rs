//! Core data types for templates and records.
//!
//! These types mirror the JSON documents on disk exactly: a template is
//! `{ "name", "fields" }`, a record is `{ "template", "entries" }`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One row of data: field name to typed JSON value.
pub type Entry = Map<String, Value>;

/// The six recognized field kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Number,
    Date,
    Boolean,
    Money,
    Decimal,
}

impl FieldType {
    /// Every recognized kind, in declaration order.
    pub const ALL: [FieldType; 6] = [
        FieldType::Text,
        FieldType::Number,
        FieldType::Date,
        FieldType::Boolean,
        FieldType::Money,
        FieldType::Decimal,
    ];

    /// The on-disk spelling of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Number => "number",
            FieldType::Date => "date",
            FieldType::Boolean => "boolean",
            FieldType::Money => "money",
            FieldType::Decimal => "decimal",
        }
    }

    /// Number, money and decimal all store a JSON number.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            FieldType::Number | FieldType::Money | FieldType::Decimal
        )
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = String;

    /// Exact, case-sensitive match against the on-disk spelling.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldType::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("Invalid type '{}'", s))
    }
}

/// A named, typed column of a template.
///
/// The declared type is kept as written so that documents with an unknown
/// type still load; [`Field::kind`] resolves it and validation rejects
/// anything that does not resolve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,

    #[serde(rename = "type")]
    pub field_type: String,
}

impl Field {
    pub fn new(name: impl Into<String>, kind: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type: kind.as_str().to_string(),
        }
    }

    /// Resolve the declared type, `None` if it is not one of the six kinds.
    pub fn kind(&self) -> Option<FieldType> {
        self.field_type.parse().ok()
    }
}

/// Which namespace a listed template came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemplateSource {
    Default,
    User,
}

impl fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateSource::Default => f.write_str("Default"),
            TemplateSource::User => f.write_str("User"),
        }
    }
}

/// A named schema of typed fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub name: String,

    #[serde(default)]
    pub fields: Vec<Field>,

    /// Only set on listed templates; never persisted inside a namespace file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<TemplateSource>,
}

impl Template {
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            fields,
            source: None,
        }
    }

    pub fn with_source(mut self, source: TemplateSource) -> Self {
        self.source = Some(source);
        self
    }

    /// Copy of name and fields without the namespace tag.
    pub fn snapshot(&self) -> Template {
        Template::new(self.name.clone(), self.fields.clone())
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// A saved document: template snapshot plus the ordered entries.
///
/// Both members default when absent so that partial documents load as-is;
/// callers validate before trusting the shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub template: Template,

    #[serde(default)]
    pub entries: Vec<Entry>,
}

impl Record {
    /// Start an empty record from a snapshot of `template`.
    pub fn new(template: &Template) -> Self {
        Self {
            template: template.snapshot(),
            entries: Vec::new(),
        }
    }

    pub fn with_entries(mut self, entries: Vec<Entry>) -> Self {
        self.entries = entries;
        self
    }

    /// The record's display name (its template name).
    pub fn name(&self) -> &str {
        &self.template.name
    }

    pub fn push_entry(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Remove the entry at `index`, keeping the order of the rest.
    pub fn remove_entry(&mut self, index: usize) -> Option<Entry> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }
}
