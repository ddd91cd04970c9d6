use tracing::info;

use entrylevel_core::validation::validate_form_data;

use crate::app::AppContext;
use crate::cli::RecordCreateArgs;
use crate::errors::CliError;
use crate::helpers::parse_assignments;
use crate::ui::print_receipt;

use super::save_as_new;

pub fn handle_create(ctx: &AppContext, args: &RecordCreateArgs) -> anyhow::Result<()> {
    let store = ctx.store()?;
    let mut record = store.start_record(&args.template)?;

    if !args.values.is_empty() {
        let entry = parse_assignments(&record.template, &args.values)?;
        let errors = validate_form_data(&record.template.fields, &entry);
        if !errors.is_empty() {
            return Err(CliError::ValidationFailed(errors).into());
        }
        record.push_entry(entry);
    }

    let file_name = save_as_new(store, &record, args.file.as_deref())?;
    info!(file = %file_name, template = %record.name(), "created record");

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context();
        print_receipt(
            &ui_ctx,
            "Created record",
            &[
                ("File", file_name),
                ("Template", record.name().to_string()),
                ("Entries", record.entries.len().to_string()),
            ],
        );
    }
    Ok(())
}
