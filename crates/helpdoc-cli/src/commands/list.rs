use crate::app::AppContext;
use crate::cli::CommandsArgs;

/// Print command ids one per line, or as a JSON array.
pub fn handle_commands(ctx: &AppContext, args: &CommandsArgs) -> anyhow::Result<()> {
    let registry = ctx.registry()?;
    let ids = registry.command_ids(args.all);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&ids)?);
        return Ok(());
    }
    for id in ids {
        println!("{}", id);
    }
    Ok(())
}
