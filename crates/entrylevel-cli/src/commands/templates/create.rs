use tracing::info;

use entrylevel_core::TemplateDraft;

use crate::app::AppContext;
use crate::cli::TemplateCreateArgs;
use crate::errors::CliError;
use crate::helpers::parse_field_specs;
use crate::ui::print_receipt;

pub fn handle_create(ctx: &AppContext, args: &TemplateCreateArgs) -> anyhow::Result<()> {
    let mut draft = TemplateDraft::new(&args.name);
    for field in parse_field_specs(&args.fields)? {
        draft.push_field(field);
    }

    let errors = draft.validate();
    if !errors.is_empty() {
        return Err(CliError::ValidationFailed(errors).into());
    }

    let store = ctx.store()?;
    let created = store.create_template(&draft.build()?)?;
    info!(template = %created.name, fields = created.fields.len(), "created template");

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context();
        print_receipt(
            &ui_ctx,
            "Created template",
            &[
                ("Name", created.name.clone()),
                ("Fields", created.fields.len().to_string()),
            ],
        );
    }
    Ok(())
}
