use tracing::info;

use entrylevel_core::validation::validate_record_data;

use crate::app::AppContext;
use crate::cli::ImportArgs;
use crate::commands::records::save_as_new;
use crate::errors::CliError;
use crate::ui::print_receipt;

pub fn handle_import(ctx: &AppContext, args: &ImportArgs) -> anyhow::Result<()> {
    let store = ctx.store()?;
    let record = store.import_from_file(&args.path, args.name.as_deref())?;

    let errors = validate_record_data(&record);
    if !errors.is_empty() {
        return Err(CliError::ValidationFailed(errors).into());
    }

    let file_name = save_as_new(store, &record, args.file.as_deref())?;
    info!(
        source = %args.path.display(),
        file = %file_name,
        entries = record.entries.len(),
        "imported record"
    );

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context();
        print_receipt(
            &ui_ctx,
            "Imported record",
            &[
                ("File", file_name),
                ("Name", record.name().to_string()),
                ("Entries", record.entries.len().to_string()),
            ],
        );
    }
    Ok(())
}
