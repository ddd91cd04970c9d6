use crate::app::AppContext;
use crate::cli::RecordShowArgs;
use crate::helpers::normalize_record_file;
use crate::output::{entry_columns, entry_rows, print_json, record_json};
use crate::ui::{blank_line, header, kv, print, simple_table};

pub fn handle_show(ctx: &AppContext, args: &RecordShowArgs) -> anyhow::Result<()> {
    let store = ctx.store()?;
    let file_name = normalize_record_file(&args.file);
    let record = store.load_record(&file_name)?;

    let ui_ctx = ctx.ui_context();
    if ui_ctx.mode.is_json() {
        return print_json(&record_json(&file_name, &record));
    }

    if ui_ctx.mode.is_pretty() {
        print(&ui_ctx, &header(&ui_ctx, "record", &file_name));
    } else {
        print(&ui_ctx, &kv(&ui_ctx, "File", &file_name));
    }
    print(&ui_ctx, &kv(&ui_ctx, "Template", record.name()));
    print(&ui_ctx, &kv(&ui_ctx, "Entries", &record.entries.len().to_string()));

    if !record.entries.is_empty() {
        blank_line(&ui_ctx);
        print(
            &ui_ctx,
            &simple_table(&ui_ctx, &entry_columns(&record), &entry_rows(&record)),
        );
    }
    Ok(())
}
