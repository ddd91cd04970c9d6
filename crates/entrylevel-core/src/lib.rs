//! # EntryLevel Core
//!
//! Core library for EntryLevel - structured data entry against reusable templates.
//!
//! This crate provides the data model, validation rules, JSON file storage and
//! CSV/JSON import-export, independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **schema**: Field types, templates, records and template drafts
//! - **validation**: Name, field-list and entry validation (errors as data)
//! - **storage**: Template and record stores backed by JSON files
//! - **transfer**: JSON/CSV export and CSV/JSON import
//! - **catalog**: Record catalog filtering and pagination
//!
//! ## Data model
//!
//! A template is a named list of typed fields. A record pairs a snapshot of a
//! template with the entries collected against it. Records never reference the
//! live template, so editing a template does not change saved records.

pub mod catalog;
pub mod defaults;
pub mod error;
pub mod fs;
pub mod schema;
pub mod storage;
pub mod transfer;
pub mod validation;

pub use catalog::{filter_catalog, paginate, Page, RecordInfo};
pub use error::{EntryLevelError, Result};
pub use schema::{Entry, Field, FieldType, Record, Template, TemplateDraft, TemplateSource};
pub use storage::{DataStore, JsonRecordStore, JsonTemplateStore, RecordStore, TemplateStore};
pub use transfer::ExportedFile;
pub use validation::ValidationSummary;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
