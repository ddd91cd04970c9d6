use crate::app::AppContext;
use crate::cli::TemplateShowArgs;
use crate::output::{print_json, source_label};
use crate::ui::{header, kv, print, simple_table};

use super::require_template;

pub fn handle_show(ctx: &AppContext, args: &TemplateShowArgs) -> anyhow::Result<()> {
    let store = ctx.store()?;
    let template = require_template(store, &args.name)?;

    let ui_ctx = ctx.ui_context();
    if ui_ctx.mode.is_json() {
        return print_json(&template);
    }

    if ui_ctx.mode.is_pretty() {
        print(&ui_ctx, &header(&ui_ctx, "template", &template.name));
    } else {
        print(&ui_ctx, &kv(&ui_ctx, "Name", &template.name));
    }
    print(&ui_ctx, &kv(&ui_ctx, "Source", &source_label(&template)));

    let columns = ["#", "Field", "Type"];
    let rows: Vec<Vec<String>> = template
        .fields
        .iter()
        .enumerate()
        .map(|(i, f)| vec![(i + 1).to_string(), f.name.clone(), f.field_type.clone()])
        .collect();
    if !rows.is_empty() {
        print(&ui_ctx, &simple_table(&ui_ctx, &columns, &rows));
    }
    Ok(())
}
