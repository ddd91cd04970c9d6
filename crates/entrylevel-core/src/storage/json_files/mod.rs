//! JSON file backends for the template and record stores.

mod records;
mod templates;

pub use records::JsonRecordStore;
pub use templates::JsonTemplateStore;
