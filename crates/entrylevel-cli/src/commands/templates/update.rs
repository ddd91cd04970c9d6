use tracing::info;

use entrylevel_core::{TemplateDraft, TemplateSource};

use crate::app::AppContext;
use crate::cli::TemplateUpdateArgs;
use crate::errors::CliError;
use crate::helpers::parse_field_specs;
use crate::ui::print_receipt;

use super::require_template;

pub fn handle_update(ctx: &AppContext, args: &TemplateUpdateArgs) -> anyhow::Result<()> {
    if args.rename.is_none() && args.fields.is_empty() {
        return Err(CliError::invalid_input(
            "Nothing to update: pass --rename and/or --field",
        )
        .into());
    }

    let store = ctx.store()?;
    let current = require_template(store, &args.name)?;
    if current.source == Some(TemplateSource::Default) {
        return Err(CliError::invalid_input(format!(
            "Template '{}' is a built-in template and cannot be changed",
            current.name
        ))
        .into());
    }

    let mut draft = TemplateDraft::from_template(&current);
    if let Some(rename) = &args.rename {
        draft.rename(rename.as_str());
    }
    if !args.fields.is_empty() {
        draft.clear();
        for field in parse_field_specs(&args.fields)? {
            draft.push_field(field);
        }
    }

    let errors = draft.validate();
    if !errors.is_empty() {
        return Err(CliError::ValidationFailed(errors).into());
    }

    let updated = store.update_template(&current.name, &draft.build()?)?;
    info!(from = %current.name, to = %updated.name, "updated template");

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context();
        print_receipt(
            &ui_ctx,
            "Updated template",
            &[
                ("Name", updated.name.clone()),
                ("Fields", updated.fields.len().to_string()),
            ],
        );
    }
    Ok(())
}
