use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use entrylevel_core::VERSION;

/// EntryLevel - structured data entry against reusable templates
#[derive(Parser)]
#[command(name = "entrylevel")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Data directory holding templates and records
    #[arg(long, global = true, env = "ENTRYLEVEL_DATA_DIR", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the data directory, seed built-in templates and write the config
    Init(InitArgs),

    /// Manage templates
    #[command(name = "template", alias = "templates")]
    Templates(TemplatesArgs),

    /// Manage records and their entries
    #[command(name = "record", alias = "records")]
    Records(RecordsArgs),

    /// Export a record as JSON or CSV
    Export(ExportArgs),

    /// Import a record from a CSV or JSON file
    Import(ImportArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Do not seed the built-in Default templates
    #[arg(long)]
    pub no_defaults: bool,
}

#[derive(Args)]
pub struct TemplatesArgs {
    #[command(subcommand)]
    pub command: TemplatesSubcommand,
}

#[derive(Subcommand)]
pub enum TemplatesSubcommand {
    /// List Default and User templates
    List,

    /// Show a template's fields
    Show(TemplateShowArgs),

    /// Create a User template
    Create(TemplateCreateArgs),

    /// Rename a User template or replace its fields
    Update(TemplateUpdateArgs),

    /// Delete a User template
    Delete(TemplateDeleteArgs),

    /// Check whether a template name is taken (exit code 3 if not)
    Exists(TemplateExistsArgs),
}

#[derive(Args)]
pub struct TemplateShowArgs {
    /// Template name
    #[arg(value_name = "NAME")]
    pub name: String,
}

#[derive(Args)]
pub struct TemplateCreateArgs {
    /// Template name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Field definition, repeatable (e.g., --field Miles:number)
    #[arg(short = 'f', long = "field", value_name = "NAME:TYPE")]
    pub fields: Vec<String>,
}

#[derive(Args)]
pub struct TemplateUpdateArgs {
    /// Current template name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// New template name
    #[arg(long, value_name = "NEW")]
    pub rename: Option<String>,

    /// Replacement field list, repeatable (keeps current fields if omitted)
    #[arg(short = 'f', long = "field", value_name = "NAME:TYPE")]
    pub fields: Vec<String>,
}

#[derive(Args)]
pub struct TemplateDeleteArgs {
    /// Template name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Skip confirmation prompt
    #[arg(long)]
    pub force: bool,
}

#[derive(Args)]
pub struct TemplateExistsArgs {
    /// Template name
    #[arg(value_name = "NAME")]
    pub name: String,
}

#[derive(Args)]
pub struct RecordsArgs {
    #[command(subcommand)]
    pub command: RecordsSubcommand,
}

#[derive(Subcommand)]
pub enum RecordsSubcommand {
    /// List record files
    List(RecordListArgs),

    /// Show a record's entries
    Show(RecordShowArgs),

    /// Start a record from a template, optionally with a first entry
    Create(RecordCreateArgs),

    /// Append an entry to a record
    Append(RecordAppendArgs),

    /// Remove one entry by its 1-based position
    RemoveEntry(RecordRemoveEntryArgs),

    /// Delete a record file
    Delete(RecordDeleteArgs),

    /// Search records by template and field names
    Catalog(RecordCatalogArgs),

    /// Validate a record against its template snapshot
    Validate(RecordValidateArgs),
}

#[derive(Args)]
pub struct PageArgs {
    /// Page number (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Items per page
    #[arg(long, default_value_t = 20)]
    pub per_page: usize,
}

#[derive(Args)]
pub struct RecordListArgs {
    #[command(flatten)]
    pub paging: PageArgs,
}

#[derive(Args)]
pub struct RecordShowArgs {
    /// Record file name
    #[arg(value_name = "FILE")]
    pub file: String,
}

#[derive(Args)]
pub struct RecordCreateArgs {
    /// Template to snapshot
    #[arg(value_name = "TEMPLATE")]
    pub template: String,

    /// Record file name (generated from the template name if omitted)
    #[arg(long, value_name = "NAME")]
    pub file: Option<String>,

    /// Field value for the first entry, repeatable (e.g., --set Miles=12.5)
    #[arg(short = 's', long = "set", value_name = "FIELD=VALUE")]
    pub values: Vec<String>,
}

#[derive(Args)]
pub struct RecordAppendArgs {
    /// Record file name
    #[arg(value_name = "FILE")]
    pub file: String,

    /// Field value, repeatable (e.g., --set Miles=12.5)
    #[arg(short = 's', long = "set", value_name = "FIELD=VALUE", required = true)]
    pub values: Vec<String>,
}

#[derive(Args)]
pub struct RecordRemoveEntryArgs {
    /// Record file name
    #[arg(value_name = "FILE")]
    pub file: String,

    /// Entry position as shown by `record show` (1-based)
    #[arg(value_name = "POSITION", allow_negative_numbers = true)]
    pub position: i64,
}

#[derive(Args)]
pub struct RecordDeleteArgs {
    /// Record file name
    #[arg(value_name = "FILE")]
    pub file: String,

    /// Skip confirmation prompt
    #[arg(long)]
    pub force: bool,
}

#[derive(Args)]
pub struct RecordCatalogArgs {
    /// Case-insensitive text matched against template and field names
    #[arg(long, value_name = "TEXT")]
    pub filter: Option<String>,

    #[command(flatten)]
    pub paging: PageArgs,
}

#[derive(Args)]
pub struct RecordValidateArgs {
    /// Record file name
    #[arg(value_name = "FILE")]
    pub file: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Csv,
}

/// Arguments for the `export` command
#[derive(Args)]
pub struct ExportArgs {
    /// Record file name
    #[arg(value_name = "FILE")]
    pub file: String,

    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    pub format: ExportFormat,

    /// Write to this file or directory instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments for the `import` command
#[derive(Args)]
pub struct ImportArgs {
    /// CSV or JSON file to import
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Record name used when the file does not carry one
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Record file name to save under (generated if omitted)
    #[arg(long, value_name = "FILE")]
    pub file: Option<String>,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}
