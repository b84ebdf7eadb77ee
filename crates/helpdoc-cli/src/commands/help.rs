use tracing::debug;

use helpdoc_core::{help_subject, Help, OutputFormat};

use crate::app::AppContext;
use crate::cli::{HelpArgs, RenderArgs};
use crate::errors::CliError;

const ALL_FLAGS: [&str; 3] = ["--all", "--nested-commands", "--include-nested"];

/// The positional is a command or topic id as given; `help help` shows the
/// `help` command.
pub fn handle_help(ctx: &AppContext, args: &HelpArgs) -> anyhow::Result<()> {
    show(ctx, args.command.as_deref(), args.all, args.format)
}

/// Route argv the way the described program's own `help` would.
pub fn handle_render(ctx: &AppContext, args: &RenderArgs) -> anyhow::Result<()> {
    let (argv, all, format) = split_render_flags(&args.argv)?;
    debug!(?argv, all, "routing raw argv");
    show(ctx, help_subject(&argv), all, format)
}

fn show(
    ctx: &AppContext,
    subject: Option<&str>,
    all: bool,
    format: Option<OutputFormat>,
) -> anyhow::Result<()> {
    let registry = ctx.registry()?;
    let options = ctx.render_options(all, format)?;
    let format = options.format;

    let help = Help::new(registry, options);
    let output = help
        .show_subject(subject)
        .map_err(|e| CliError::from_help(e, registry.bin()))?;

    println!("{}", output);
    if format.is_screen() {
        println!();
    }
    Ok(())
}

/// Pull `--all` (and its aliases) and `--format[=]VALUE` out of argv.
fn split_render_flags(argv: &[String]) -> Result<(Vec<&str>, bool, Option<OutputFormat>), CliError> {
    let mut rest = Vec::with_capacity(argv.len());
    let mut all = false;
    let mut format = None;
    let mut args = argv.iter().map(String::as_str);

    while let Some(arg) = args.next() {
        if arg == "--" {
            rest.push(arg);
            rest.extend(args.by_ref());
            break;
        }
        if ALL_FLAGS.contains(&arg) {
            all = true;
            continue;
        }
        let value = if arg == "--format" {
            Some(
                args.next()
                    .ok_or_else(|| CliError::invalid_input("--format requires a value"))?,
            )
        } else {
            arg.strip_prefix("--format=")
        };
        match value {
            Some(value) => {
                format = Some(
                    value
                        .parse::<OutputFormat>()
                        .map_err(|e| CliError::invalid_input(e.to_string()))?,
                );
            }
            None => rest.push(arg),
        }
    }
    Ok((rest, all, format))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_split_render_flags() {
        let argv = strings(&["help", "--format", "markdown", "apps:create", "--all"]);
        let (rest, all, format) = split_render_flags(&argv).unwrap();
        assert_eq!(rest, vec!["help", "apps:create"]);
        assert!(all);
        assert_eq!(format, Some(OutputFormat::Markdown));
    }

    #[test]
    fn test_split_render_flags_inline_value() {
        let argv = strings(&["--format=man", "plugins"]);
        let (rest, all, format) = split_render_flags(&argv).unwrap();
        assert_eq!(rest, vec!["plugins"]);
        assert!(!all);
        assert_eq!(format, Some(OutputFormat::Man));
    }

    #[test]
    fn test_split_render_flags_stops_at_double_dash() {
        let argv = strings(&["--", "--all"]);
        let (rest, all, _) = split_render_flags(&argv).unwrap();
        assert_eq!(rest, vec!["--", "--all"]);
        assert!(!all);
    }

    #[test]
    fn test_split_render_flags_rejects_bad_format() {
        assert!(split_render_flags(&strings(&["--format", "html"])).is_err());
        assert!(split_render_flags(&strings(&["--format"])).is_err());
    }
}
