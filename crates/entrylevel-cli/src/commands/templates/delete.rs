use tracing::info;

use entrylevel_core::TemplateSource;

use crate::app::AppContext;
use crate::cli::TemplateDeleteArgs;
use crate::errors::CliError;
use crate::helpers::confirm_action;
use crate::ui::{print_cancelled, print_receipt};

use super::require_template;

pub fn handle_delete(ctx: &AppContext, args: &TemplateDeleteArgs) -> anyhow::Result<()> {
    let store = ctx.store()?;
    let template = require_template(store, &args.name)?;
    if template.source == Some(TemplateSource::Default) {
        return Err(CliError::invalid_input(format!(
            "Template '{}' is a built-in template and cannot be deleted",
            template.name
        ))
        .into());
    }

    let ui_ctx = ctx.ui_context();
    let prompt = format!("Delete template '{}'?", template.name);
    if !confirm_action(&ui_ctx, &prompt, args.force)? {
        if !ctx.quiet() {
            print_cancelled(&ui_ctx);
        }
        return Ok(());
    }

    store.delete_template(&template.name)?;
    info!(template = %template.name, "deleted template");

    if !ctx.quiet() {
        print_receipt(
            &ui_ctx,
            "Deleted template",
            &[("Deleted", template.name.clone())],
        );
    }
    Ok(())
}
