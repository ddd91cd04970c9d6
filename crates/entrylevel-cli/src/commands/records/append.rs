use tracing::info;

use entrylevel_core::validation::validate_form_data;

use crate::app::AppContext;
use crate::cli::RecordAppendArgs;
use crate::errors::CliError;
use crate::helpers::{normalize_record_file, parse_assignments};
use crate::ui::print_receipt;

pub fn handle_append(ctx: &AppContext, args: &RecordAppendArgs) -> anyhow::Result<()> {
    let store = ctx.store()?;
    let file_name = normalize_record_file(&args.file);
    let record = store.load_record(&file_name)?;

    let entry = parse_assignments(&record.template, &args.values)?;
    let errors = validate_form_data(&record.template.fields, &entry);
    if !errors.is_empty() {
        return Err(CliError::ValidationFailed(errors).into());
    }

    let updated = store.append_entries(&file_name, vec![entry])?;
    info!(file = %file_name, entries = updated.entries.len(), "appended entry");

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context();
        print_receipt(
            &ui_ctx,
            "Appended entry",
            &[
                ("File", file_name),
                ("Entries", updated.entries.len().to_string()),
            ],
        );
    }
    Ok(())
}
