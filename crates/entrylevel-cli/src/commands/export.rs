use tracing::info;

use crate::app::AppContext;
use crate::cli::{ExportArgs, ExportFormat};
use crate::helpers::normalize_record_file;
use crate::ui::print_receipt;

pub fn handle_export(ctx: &AppContext, args: &ExportArgs) -> anyhow::Result<()> {
    let store = ctx.store()?;
    let file_name = normalize_record_file(&args.file);

    let exported = match args.format {
        ExportFormat::Json => store.export_as_json(&file_name)?,
        ExportFormat::Csv => store.export_as_csv(&file_name)?,
    };

    let Some(output) = &args.output else {
        print!("{}", exported.content);
        if !exported.content.ends_with('\n') {
            println!();
        }
        return Ok(());
    };

    let target = if output.is_dir() {
        output.join(&exported.file_name)
    } else {
        output.clone()
    };
    exported.write_to(&target)?;
    info!(file = %file_name, target = %target.display(), "exported record");

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context();
        let format = match args.format {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        };
        print_receipt(
            &ui_ctx,
            "Exported record",
            &[
                ("Record", file_name),
                ("Format", format.to_string()),
                ("Path", target.display().to_string()),
            ],
        );
    }
    Ok(())
}
