use tracing::info;

use entrylevel_core::DataStore;

use crate::app::{resolve_config_path, AppContext};
use crate::cli::InitArgs;
use crate::config::{write_config, EntryLevelConfig};
use crate::output::print_json;
use crate::ui::{hint, print, receipt};

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let data_dir = ctx.data_dir()?;
    let existed = data_dir.exists();

    let store = DataStore::open(&data_dir)?;
    let seeded = if args.no_defaults {
        false
    } else {
        store.seed_default_templates()?
    };

    let config_path = resolve_config_path()?;
    let config_written = if config_path.exists() {
        false
    } else {
        write_config(&config_path, &EntryLevelConfig::new(&data_dir))?;
        true
    };

    info!(
        data_dir = %data_dir.display(),
        seeded,
        config_written,
        "initialized data directory"
    );

    let ui_ctx = ctx.ui_context();
    if ui_ctx.mode.is_json() {
        return print_json(&serde_json::json!({
            "status": "ok",
            "data_dir": data_dir.display().to_string(),
            "config": config_path.display().to_string(),
            "created": !existed,
            "seeded_defaults": seeded,
            "config_written": config_written,
        }));
    }

    if ctx.quiet() {
        return Ok(());
    }

    let title = if existed {
        "EntryLevel data already present"
    } else {
        "EntryLevel initialized"
    };
    let templates = store.list_templates();
    print(
        &ui_ctx,
        &receipt(
            &ui_ctx,
            title,
            &[
                ("Data Dir", data_dir.display().to_string()),
                ("Config", config_path.display().to_string()),
                ("Templates", templates.len().to_string()),
            ],
        ),
    );
    if ui_ctx.mode.is_pretty() {
        print(
            &ui_ctx,
            &hint(&ui_ctx, "Run `entrylevel template list` to see what you can record."),
        );
    }
    Ok(())
}
