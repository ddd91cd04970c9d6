use tracing::info;

use crate::app::AppContext;
use crate::cli::RecordDeleteArgs;
use crate::helpers::{confirm_action, normalize_record_file};
use crate::ui::{print_cancelled, print_receipt};

pub fn handle_delete(ctx: &AppContext, args: &RecordDeleteArgs) -> anyhow::Result<()> {
    let store = ctx.store()?;
    let file_name = normalize_record_file(&args.file);
    // Fails early with NotFound instead of prompting for a missing file.
    store.load_record(&file_name)?;

    let ui_ctx = ctx.ui_context();
    let prompt = format!("Delete record '{}'?", file_name);
    if !confirm_action(&ui_ctx, &prompt, args.force)? {
        if !ctx.quiet() {
            print_cancelled(&ui_ctx);
        }
        return Ok(());
    }

    store.delete_record_file(&file_name)?;
    info!(file = %file_name, "deleted record");

    if !ctx.quiet() {
        print_receipt(&ui_ctx, "Deleted record", &[("Deleted", file_name)]);
    }
    Ok(())
}
