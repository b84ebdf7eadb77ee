use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use helpdoc_core::{OutputFormat, VERSION};

/// Helpdoc - render help for command-line programs described by a manifest
#[derive(Parser)]
#[command(name = "helpdoc")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true, disable_help_subcommand = true)]
pub struct Cli {
    /// Path to the command manifest (TOML or JSON)
    #[arg(short, long, global = true, env = "HELPDOC_MANIFEST")]
    pub manifest: Option<PathBuf>,

    /// Override the terminal width
    #[arg(short, long, global = true, value_name = "COLUMNS")]
    pub width: Option<usize>,

    /// Disable colors and emphasis
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log decisions to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Display help for the manifest's program, a topic or a command
    Help(HelpArgs),

    /// List command ids
    Commands(CommandsArgs),

    /// Resolve raw argv the way the described program would
    Render(RenderArgs),
}

/// Arguments for the `help` command
#[derive(Args)]
pub struct HelpArgs {
    /// Command or topic to show help for
    #[arg(value_name = "COMMAND")]
    pub command: Option<String>,

    /// Include hidden and nested commands
    #[arg(long, visible_alias = "nested-commands", alias = "include-nested")]
    pub all: bool,

    /// Output format (screen, markdown, man)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,
}

/// Arguments for the `commands` command
#[derive(Args)]
pub struct CommandsArgs {
    /// Include hidden commands
    #[arg(long)]
    pub all: bool,

    /// Output a JSON array
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `render` command
#[derive(Args)]
pub struct RenderArgs {
    /// Arguments as the described program would receive them
    #[arg(value_name = "ARGV", trailing_var_arg = true, allow_hyphen_values = true)]
    pub argv: Vec<String>,
}
