use entrylevel_core::paginate;

use crate::app::AppContext;
use crate::cli::RecordListArgs;
use crate::output::print_json;
use crate::ui::{hint, print, simple_table};

pub fn handle_list(ctx: &AppContext, args: &RecordListArgs) -> anyhow::Result<()> {
    let store = ctx.store()?;
    let files = store.list_records()?;
    let page = paginate(files, args.paging.page, args.paging.per_page);

    let ui_ctx = ctx.ui_context();
    if ui_ctx.mode.is_json() {
        return print_json(&page);
    }

    if page.items.is_empty() {
        if !ctx.quiet() {
            print(&ui_ctx, "No records found.");
        }
        return Ok(());
    }

    let rows: Vec<Vec<String>> = page.items.iter().map(|f| vec![f.clone()]).collect();
    print(&ui_ctx, &simple_table(&ui_ctx, &["File"], &rows));

    if ui_ctx.mode.is_pretty() && page.total_pages > 1 {
        print(
            &ui_ctx,
            &hint(
                &ui_ctx,
                &format!(
                    "Page {} of {} ({} records). Use --page to see more.",
                    page.page, page.total_pages, page.total_items
                ),
            ),
        );
    }
    Ok(())
}
