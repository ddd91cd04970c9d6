pub mod append;
pub mod catalog;
pub mod create;
pub mod delete;
pub mod list;
pub mod remove_entry;
pub mod show;
pub mod validate;

pub use append::handle_append;
pub use catalog::handle_catalog;
pub use create::handle_create;
pub use delete::handle_delete;
pub use list::handle_list;
pub use remove_entry::handle_remove_entry;
pub use show::handle_show;
pub use validate::handle_validate;

use chrono::Local;

use entrylevel_core::{DataStore, Record};

use crate::errors::CliError;
use crate::helpers::normalize_record_file;

/// Save a new record under `file` if given, otherwise under a generated name.
///
/// An explicit file name must not already be taken.
pub fn save_as_new(store: &DataStore, record: &Record, file: Option<&str>) -> anyhow::Result<String> {
    match file {
        Some(file) => {
            let file_name = normalize_record_file(file);
            if store.list_records()?.contains(&file_name) {
                return Err(CliError::duplicate(format!(
                    "Record file '{}' already exists",
                    file_name
                ))
                .into());
            }
            store.save_record(&file_name, record)?;
            Ok(file_name)
        }
        None => Ok(store.save_new_record(record, Local::now().naive_local())?),
    }
}
