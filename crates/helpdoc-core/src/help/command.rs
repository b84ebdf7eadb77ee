//! Help for a single command.

use crate::model::{is_child, is_descendant, split_description, ArgSpec, CommandDescriptor, FlagSpec};
use crate::registry::Registry;
use crate::render::{Article, Row, Section};
use crate::theme::Theme;

use super::command_rows;

/// Builds the article for one command: usage, arguments, options,
/// description, aliases, examples and nested commands, in that order.
pub struct CommandHelp<'a> {
    registry: &'a Registry,
    theme: Theme,
    all: bool,
}

impl<'a> CommandHelp<'a> {
    pub fn new(registry: &'a Registry, theme: Theme, all: bool) -> Self {
        Self {
            registry,
            theme,
            all,
        }
    }

    pub fn article(&self, command: &CommandDescriptor) -> Article {
        let (title, body) = command
            .description()
            .map(split_description)
            .unwrap_or((None, None));

        let mut article = Article::new(title).with_subject(command.id());
        article.push(self.usage(command));
        if let Some(section) = self.args(command) {
            article.push(section);
        }
        article.push(self.flags(command));
        if let Some(body) = body {
            article.push(Section::text("Description", body));
        }
        article.push(self.aliases(command));
        article.push(self.examples(command));
        article.push(self.subcommands(command));
        article
    }

    fn usage(&self, command: &CommandDescriptor) -> Section {
        let bin = self.registry.bin();
        let lines = if command.usage().is_empty() {
            vec![format!("$ {} {}", bin, default_usage(command, true))]
        } else {
            command
                .usage()
                .iter()
                .map(|usage| format!("$ {} {}", bin, usage))
                .collect()
        };
        Section::code("Usage", lines)
    }

    /// Omitted unless some visible argument has something to say.
    fn args(&self, command: &CommandDescriptor) -> Option<Section> {
        let descriptions: Vec<Option<String>> = command.visible_args().map(arg_description).collect();
        if descriptions.iter().all(Option::is_none) {
            return None;
        }
        let rows = command
            .visible_args()
            .zip(descriptions)
            .map(|(arg, description)| {
                Row::new(
                    arg.display_name(),
                    description.map(|text| self.theme.dim(&text)),
                )
            })
            .collect();
        Some(Section::rows("Arguments", rows))
    }

    fn flags(&self, command: &CommandDescriptor) -> Section {
        let mut flags: Vec<&FlagSpec> = command.visible_flags().collect();
        flags.sort_by(|a, b| {
            (a.alias.is_none(), a.alias, &a.name).cmp(&(b.alias.is_none(), b.alias, &b.name))
        });
        let rows = flags
            .into_iter()
            .map(|flag| {
                Row::new(
                    self.flag_label(flag),
                    flag_description(flag).map(|text| self.theme.dim(&text)),
                )
            })
            .collect();
        Section::rows("Options", rows)
    }

    /// `-c, --name=VALUE`; enumerations render as `(a|b)` without underline.
    fn flag_label(&self, flag: &FlagSpec) -> String {
        let mut names = Vec::with_capacity(2);
        if let Some(alias) = flag.alias {
            names.push(format!("-{}", alias));
        }
        let name = flag.name.trim();
        if !name.is_empty() {
            if flag.allow_no && !flag.is_valued() {
                names.push(format!("--[no-]{}", name));
            } else {
                names.push(format!("--{}", name));
            }
        }
        let mut label = names.join(", ");

        if flag.is_valued() {
            let value = match (&flag.help_value, flag.options.is_empty()) {
                (Some(value), _) => value.clone(),
                (None, false) => format!("({})", flag.options.join("|")),
                (None, true) => name.to_string(),
            };
            label.push('=');
            if value.contains('(') {
                label.push_str(&value);
            } else {
                label.push_str(&self.theme.underline(&value));
            }
        }
        label
    }

    fn aliases(&self, command: &CommandDescriptor) -> Section {
        let bin = self.registry.bin();
        let lines = command
            .aliases()
            .iter()
            .map(|alias| format!("$ {} {}", bin, alias))
            .collect();
        Section::code("Aliases", lines)
    }

    fn examples(&self, command: &CommandDescriptor) -> Section {
        let heading = if command.examples().len() == 1 {
            "Example"
        } else {
            "Examples"
        };
        Section::code(heading, command.examples().to_vec())
    }

    /// Descendants of this command; deeper levels and hidden ones need `all`.
    fn subcommands(&self, command: &CommandDescriptor) -> Section {
        let id = command.id();
        let commands = self.registry.commands().iter().filter(|cmd| {
            is_descendant(cmd.id(), id)
                && (self.all || (!cmd.is_hidden() && is_child(cmd.id(), id)))
        });
        Section::rows("Commands", command_rows(commands))
    }
}

/// `<id> ARG [ARG] [OPTIONS]`, without the id for a root default command.
pub(crate) fn default_usage(command: &CommandDescriptor, with_id: bool) -> String {
    let mut parts: Vec<String> = Vec::new();
    if with_id {
        parts.push(command.id().to_string());
    }
    parts.extend(command.visible_args().map(ArgSpec::usage_token));
    if command.visible_flags().next().is_some() {
        parts.push("[OPTIONS]".to_string());
    }
    parts.join(" ")
}

/// `[default: X] (a|b) help`, or `None` when all parts are empty.
fn arg_description(arg: &ArgSpec) -> Option<String> {
    let mut parts: Vec<String> = Vec::new();
    if let Some(default) = arg.default.as_deref().filter(|d| !d.is_empty()) {
        parts.push(format!("[default: {}]", default));
    }
    if !arg.options.is_empty() {
        parts.push(format!("({})", arg.options.join("|")));
    }
    if let Some(help) = arg.help.as_deref().map(str::trim).filter(|h| !h.is_empty()) {
        parts.push(help.to_string());
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

/// `(required) [default: X] help`; defaults only show for valued flags.
fn flag_description(flag: &FlagSpec) -> Option<String> {
    let mut parts: Vec<String> = Vec::new();
    if flag.required {
        parts.push("(required)".to_string());
    }
    if flag.is_valued() {
        if let Some(default) = flag.default.as_deref().filter(|d| !d.is_empty()) {
            parts.push(format!("[default: {}]", default));
        }
    }
    if let Some(help) = flag.help.as_deref().map(str::trim).filter(|h| !h.is_empty()) {
        parts.push(help.to_string());
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}
