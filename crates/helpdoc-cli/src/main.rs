//! Helpdoc CLI - render help pages for programs described by a manifest
//!
//! This is the command-line interface for Helpdoc. It loads a command
//! manifest and prints root, topic or command help in screen, markdown
//! or man format.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod manifest;
mod ui;

use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{help, list};
use crate::constants::env;
use crate::errors::CliError;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        if let Some(cli_err) = e.downcast_ref::<CliError>() {
            cli_err.exit();
        }
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so help output stays clean on stdout.
fn init_logging(verbose: bool) {
    let filter = log_filter(std::env::var(env::LOG).ok().as_deref(), verbose);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// `HELPDOC_LOG` (default `warn`), with `--verbose` always adding `debug`.
fn log_filter(env_value: Option<&str>, verbose: bool) -> EnvFilter {
    let filter = env_value
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));
    if verbose {
        filter.add_directive(LevelFilter::DEBUG.into())
    } else {
        filter
    }
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Help(args) => {
            help::handle_help(ctx, args)?;
        }
        Commands::Commands(args) => {
            list::handle_commands(ctx, args)?;
        }
        Commands::Render(args) => {
            help::handle_render(ctx, args)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_defaults_to_warn() {
        assert_eq!(log_filter(None, false).max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(log_filter(Some("info"), false).max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_verbose_applies_with_env_filter() {
        assert_eq!(log_filter(None, true).max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(log_filter(Some("error"), true).max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_bad_env_filter_falls_back() {
        assert_eq!(
            log_filter(Some("helpdoc=notalevel"), false).max_level_hint(),
            Some(LevelFilter::WARN)
        );
    }
}
