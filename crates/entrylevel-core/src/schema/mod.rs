//! Templates, fields, records and value conversions.

mod draft;
mod types;
pub mod values;

pub use draft::TemplateDraft;
pub use types::{Entry, Field, FieldType, Record, Template, TemplateSource};
