use tracing::info;

use entrylevel_core::EntryLevelError;

use crate::app::AppContext;
use crate::cli::RecordRemoveEntryArgs;
use crate::errors::CliError;
use crate::helpers::normalize_record_file;
use crate::ui::print_receipt;

pub fn handle_remove_entry(ctx: &AppContext, args: &RecordRemoveEntryArgs) -> anyhow::Result<()> {
    let store = ctx.store()?;
    let file_name = normalize_record_file(&args.file);

    // Positions are 1-based on the command line.
    let index = args.position.saturating_sub(1);
    let updated = match store.delete_entry_at_index(&file_name, index) {
        Ok(record) => record,
        Err(EntryLevelError::IndexOutOfRange { len, .. }) => {
            return Err(CliError::invalid_input(format!(
                "No entry at position {} (record has {} entries)",
                args.position, len
            ))
            .into())
        }
        Err(e) => return Err(e.into()),
    };
    info!(file = %file_name, position = args.position, "removed entry");

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context();
        print_receipt(
            &ui_ctx,
            "Removed entry",
            &[
                ("File", file_name),
                ("Position", args.position.to_string()),
                ("Remaining", updated.entries.len().to_string()),
            ],
        );
    }
    Ok(())
}
