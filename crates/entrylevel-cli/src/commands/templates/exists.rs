use crate::app::AppContext;
use crate::cli::TemplateExistsArgs;
use crate::constants::exit_codes;
use crate::output::print_json;

/// Print whether the name is taken; exit with NOT_FOUND when it is not.
pub fn handle_exists(ctx: &AppContext, args: &TemplateExistsArgs) -> anyhow::Result<()> {
    let store = ctx.store()?;
    let exists = store.template_exists(&args.name);

    let ui_ctx = ctx.ui_context();
    if ui_ctx.mode.is_json() {
        print_json(&serde_json::json!({ "name": args.name, "exists": exists }))?;
    } else if !ctx.quiet() {
        println!("{}", exists);
    }

    if !exists {
        std::process::exit(exit_codes::NOT_FOUND);
    }
    Ok(())
}
