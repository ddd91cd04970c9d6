//! Persistence for templates and records.
//!
//! The traits describe the contract; `json_files` implements it over a data
//! directory laid out by [`layout::DataDir`]. [`DataStore`] bundles both
//! stores behind the full command surface.

mod data_store;
mod json_files;
pub mod layout;
mod traits;

pub use data_store::DataStore;
pub use json_files::{JsonRecordStore, JsonTemplateStore};
pub use layout::DataDir;
pub use traits::{RecordStore, TemplateStore};
