pub mod create;
pub mod delete;
pub mod exists;
pub mod list;
pub mod show;
pub mod update;

pub use create::handle_create;
pub use delete::handle_delete;
pub use exists::handle_exists;
pub use list::handle_list;
pub use show::handle_show;
pub use update::handle_update;

use entrylevel_core::{DataStore, Template};

use crate::errors::CliError;

/// Look up a template by name or fail with a listing hint.
pub fn require_template(store: &DataStore, name: &str) -> anyhow::Result<Template> {
    store.load_template(name).ok_or_else(|| {
        CliError::not_found(
            format!("Template '{}' not found", name),
            "Hint: Run `entrylevel template list` to see available templates.",
        )
        .into()
    })
}
