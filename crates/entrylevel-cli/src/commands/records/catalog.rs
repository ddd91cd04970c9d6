use entrylevel_core::{filter_catalog, paginate};

use crate::app::AppContext;
use crate::cli::RecordCatalogArgs;
use crate::output::{field_summary, print_json};
use crate::ui::{hint, print, simple_table};

pub fn handle_catalog(ctx: &AppContext, args: &RecordCatalogArgs) -> anyhow::Result<()> {
    let store = ctx.store()?;
    let infos = filter_catalog(
        store.record_catalog()?,
        args.filter.as_deref().unwrap_or(""),
    );
    let page = paginate(infos, args.paging.page, args.paging.per_page);

    let ui_ctx = ctx.ui_context();
    if ui_ctx.mode.is_json() {
        return print_json(&page);
    }

    if page.items.is_empty() {
        if !ctx.quiet() {
            print(&ui_ctx, "No matching records.");
        }
        return Ok(());
    }

    let columns = ["File", "Template", "Fields"];
    let rows: Vec<Vec<String>> = page
        .items
        .iter()
        .map(|info| {
            vec![
                info.file_name.clone(),
                info.template.name.clone(),
                field_summary(&info.template.fields),
            ]
        })
        .collect();
    print(&ui_ctx, &simple_table(&ui_ctx, &columns, &rows));

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
