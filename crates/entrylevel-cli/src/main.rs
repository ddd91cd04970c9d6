//! EntryLevel CLI - structured data entry against reusable templates
//!
//! This is the command-line interface for EntryLevel. It drives the core
//! library's template and record stores from the terminal.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod output;
mod ui;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use entrylevel_core::VERSION;

use crate::app::AppContext;
use crate::cli::{Cli, Commands, RecordsSubcommand, TemplatesSubcommand};
use crate::commands::{export, import, init, misc, records, templates};
use crate::constants::LOG_ENV;
use crate::errors::exit_code_for;
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx) {
        let ui_ctx = ctx.ui_context();

        let error_msg = format!("{}", e);
        let (message, hint) = match error_msg.find("\nHint:") {
            Some(idx) => (
                error_msg[..idx].to_string(),
                Some(error_msg[idx + 1..].to_string()),
            ),
            None => (error_msg.clone(), extract_error_hint(&error_msg)),
        };

        print_error(&ui_ctx, &message, hint.as_deref());
        std::process::exit(exit_code_for(&e));
    }
}

/// Logs go to stderr; `ENTRYLEVEL_LOG` sets the filter, `-v` forces debug.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Contextual hints for common error patterns.
fn extract_error_hint(error: &str) -> Option<String> {
    let error_lower = error.to_lowercase();

    if error_lower.contains("template") && error_lower.contains("not found") {
        return Some("Hint: Run `entrylevel template list` to see available templates.".to_string());
    }

    if error_lower.contains("record file") && error_lower.contains("not found") {
        return Some("Hint: Run `entrylevel record list` to see saved records.".to_string());
    }

    if error_lower.contains("import file") && error_lower.contains("not found") {
        return Some("Hint: Check the path; imports accept .csv and .json files.".to_string());
    }

    if error_lower.contains("no entries to export") {
        return Some(
            "Hint: Add an entry with `entrylevel record append <file> --set FIELD=VALUE`."
                .to_string(),
        );
    }

    if error_lower.contains("already exists") {
        return Some("Hint: Pick another name or use `--file` to choose one.".to_string());
    }

    None
}

fn run(ctx: &AppContext) -> anyhow::Result<()> {
    match &ctx.cli().command {
        Some(Commands::Init(args)) => {
            init::handle_init(ctx, args)?;
        }
        Some(Commands::Templates(args)) => match &args.command {
            TemplatesSubcommand::List => {
                templates::handle_list(ctx)?;
            }
            TemplatesSubcommand::Show(show_args) => {
                templates::handle_show(ctx, show_args)?;
            }
            TemplatesSubcommand::Create(create_args) => {
                templates::handle_create(ctx, create_args)?;
            }
            TemplatesSubcommand::Update(update_args) => {
                templates::handle_update(ctx, update_args)?;
            }
            TemplatesSubcommand::Delete(delete_args) => {
                templates::handle_delete(ctx, delete_args)?;
            }
            TemplatesSubcommand::Exists(exists_args) => {
                templates::handle_exists(ctx, exists_args)?;
            }
        },
        Some(Commands::Records(args)) => match &args.command {
            RecordsSubcommand::List(list_args) => {
                records::handle_list(ctx, list_args)?;
            }
            RecordsSubcommand::Show(show_args) => {
                records::handle_show(ctx, show_args)?;
            }
            RecordsSubcommand::Create(create_args) => {
                records::handle_create(ctx, create_args)?;
            }
            RecordsSubcommand::Append(append_args) => {
                records::handle_append(ctx, append_args)?;
            }
            RecordsSubcommand::RemoveEntry(remove_args) => {
                records::handle_remove_entry(ctx, remove_args)?;
            }
            RecordsSubcommand::Delete(delete_args) => {
                records::handle_delete(ctx, delete_args)?;
            }
            RecordsSubcommand::Catalog(catalog_args) => {
                records::handle_catalog(ctx, catalog_args)?;
            }
            RecordsSubcommand::Validate(validate_args) => {
                records::handle_validate(ctx, validate_args)?;
            }
        },
        Some(Commands::Export(args)) => {
            export::handle_export(ctx, args)?;
        }
        Some(Commands::Import(args)) => {
            import::handle_import(ctx, args)?;
        }
        Some(Commands::Completions(args)) => {
            misc::handle_completions(args)?;
        }
        None => {
            println!("EntryLevel v{}", VERSION);
            println!("\nQuickstart:");
            println!("  entrylevel init");
            println!("  entrylevel template list");
            println!("  entrylevel record create \"Mileage\" --set Date=2024-06-01 --set Destination=Depot --set Miles=12.5");
            println!("  entrylevel record list");
            println!("  entrylevel export <file> --format csv");
            println!("\nRun `entrylevel --help` for full usage.");
        }
    }

    Ok(())
}
