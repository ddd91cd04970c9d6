use entrylevel_core::validation::{validate_entry_keys, validate_record_data, validation_summary};

use crate::app::AppContext;
use crate::cli::RecordValidateArgs;
use crate::constants::exit_codes;
use crate::errors::CliError;
use crate::helpers::normalize_record_file;
use crate::output::print_json;
use crate::ui::print_receipt;

pub fn handle_validate(ctx: &AppContext, args: &RecordValidateArgs) -> anyhow::Result<()> {
    let store = ctx.store()?;
    let file_name = normalize_record_file(&args.file);
    let record = store.load_record(&file_name)?;

    let mut errors = validate_record_data(&record);
    // Missing fields are already reported as required; only stray keys remain.
    if errors.is_empty() {
        errors = validate_entry_keys(&record.template.fields, &record.entries);
    }
    let summary = validation_summary(errors);

    let ui_ctx = ctx.ui_context();
    if ui_ctx.mode.is_json() {
        print_json(&summary)?;
        if !summary.is_valid {
            std::process::exit(exit_codes::VALIDATION_FAILED);
        }
        return Ok(());
    }

    if !summary.is_valid {
        return Err(CliError::ValidationFailed(summary.errors).into());
    }

    if !ctx.quiet() {
        print_receipt(
            &ui_ctx,
            &summary.message,
            &[
                ("File", file_name),
                ("Entries", record.entries.len().to_string()),
            ],
        );
    }
    Ok(())
}
