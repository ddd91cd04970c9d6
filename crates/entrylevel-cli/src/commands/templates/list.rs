use crate::app::AppContext;
use crate::output::{field_summary, print_json, source_label};
use crate::ui::{print, simple_table};

pub fn handle_list(ctx: &AppContext) -> anyhow::Result<()> {
    let store = ctx.store()?;
    let templates = store.list_templates();

    let ui_ctx = ctx.ui_context();
    if ui_ctx.mode.is_json() {
        return print_json(&templates);
    }

    if templates.is_empty() {
        if !ctx.quiet() {
            print(&ui_ctx, "No templates found.");
        }
        return Ok(());
    }

    let columns = ["Name", "Source", "Fields"];
    let rows: Vec<Vec<String>> = templates
        .iter()
        .map(|t| vec![t.name.clone(), source_label(t), field_summary(&t.fields)])
        .collect();
    print(&ui_ctx, &simple_table(&ui_ctx, &columns, &rows));
    Ok(())
}
