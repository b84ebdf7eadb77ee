use std::collections::HashSet;

use serde::Serialize;

use super::{split_description, validate_identifier, ArgSpec, FlagSpec};
use crate::error::{HelpError, Result};

/// The static shape of a runnable command.
///
/// Construct through [`CommandDescriptor::builder`], which rejects duplicate
/// flag names, duplicate short aliases, duplicate argument names and malformed
/// identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandDescriptor {
    id: String,
    description: Option<String>,
    args: Vec<ArgSpec>,
    flags: Vec<FlagSpec>,
    aliases: Vec<String>,
    usage: Vec<String>,
    examples: Vec<String>,
    hidden: bool,
}

impl CommandDescriptor {
    pub fn builder(id: impl Into<String>) -> CommandBuilder {
        CommandBuilder {
            id: id.into(),
            description: None,
            args: Vec::new(),
            flags: Vec::new(),
            aliases: Vec::new(),
            usage: Vec::new(),
            examples: Vec::new(),
            hidden: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// First line of the description.
    pub fn title(&self) -> Option<String> {
        self.description
            .as_deref()
            .and_then(|text| split_description(text).0)
    }

    /// All arguments in CLI order, hidden ones included.
    pub fn args(&self) -> &[ArgSpec] {
        &self.args
    }

    /// All flags in declaration order, hidden ones included.
    pub fn flags(&self) -> &[FlagSpec] {
        &self.flags
    }

    pub fn visible_args(&self) -> impl Iterator<Item = &ArgSpec> {
        self.args.iter().filter(|arg| !arg.hidden)
    }

    pub fn visible_flags(&self) -> impl Iterator<Item = &FlagSpec> {
        self.flags.iter().filter(|flag| !flag.hidden)
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// Literal usage overrides; empty means "synthesize one".
    pub fn usage(&self) -> &[String] {
        &self.usage
    }

    pub fn examples(&self) -> &[String] {
        &self.examples
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Whether `name` is this command's id or one of its aliases.
    pub fn answers_to(&self, name: &str) -> bool {
        self.id == name || self.aliases.iter().any(|alias| alias == name)
    }
}

/// Builder for [`CommandDescriptor`].
#[derive(Debug, Clone)]
pub struct CommandBuilder {
    id: String,
    description: Option<String>,
    args: Vec<ArgSpec>,
    flags: Vec<FlagSpec>,
    aliases: Vec<String>,
    usage: Vec<String>,
    examples: Vec<String>,
    hidden: bool,
}

impl CommandBuilder {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn arg(mut self, arg: ArgSpec) -> Self {
        self.args.push(arg);
        self
    }

    pub fn flag(mut self, flag: FlagSpec) -> Self {
        self.flags.push(flag);
        self
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    pub fn usage(mut self, usage: impl Into<String>) -> Self {
        self.usage.push(usage.into());
        self
    }

    pub fn example(mut self, example: impl Into<String>) -> Self {
        self.examples.push(example.into());
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn build(self) -> Result<CommandDescriptor> {
        validate_identifier(&self.id)?;
        for alias in &self.aliases {
            validate_identifier(alias)?;
        }

        let mut arg_names = HashSet::new();
        for arg in &self.args {
            if arg.name.trim().is_empty() {
                return Err(HelpError::invalid(format!(
                    "{}: argument name must not be empty",
                    self.id
                )));
            }
            if !arg_names.insert(arg.name.as_str()) {
                return Err(HelpError::invalid(format!(
                    "{}: duplicate argument {}",
                    self.id, arg.name
                )));
            }
        }

        let mut flag_names = HashSet::new();
        let mut flag_aliases = HashSet::new();
        for flag in &self.flags {
            let name = flag.name.trim();
            if name.is_empty() || name.starts_with('-') {
                return Err(HelpError::invalid(format!(
                    "{}: invalid flag name \"{}\"",
                    self.id, flag.name
                )));
            }
            if !flag_names.insert(name) {
                return Err(HelpError::invalid(format!(
                    "{}: duplicate flag --{}",
                    self.id, name
                )));
            }
            if let Some(alias) = flag.alias {
                if !flag_aliases.insert(alias) {
                    return Err(HelpError::invalid(format!(
                        "{}: duplicate flag alias -{}",
                        self.id, alias
                    )));
                }
            }
        }

        Ok(CommandDescriptor {
            id: self.id,
            description: self.description,
            args: self.args,
            flags: self.flags,
            aliases: self.aliases,
            usage: self.usage,
            examples: self.examples,
            hidden: self.hidden,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_valid_command() {
        let cmd = CommandDescriptor::builder("apps:create")
            .description("first line\nmultiline help")
            .arg(ArgSpec::new("app_name").with_help("app to use"))
            .flag(FlagSpec::boolean("force"))
            .flag(FlagSpec::valued("app").with_alias('a').hidden())
            .alias("create")
            .build()
            .unwrap();
        assert_eq!(cmd.id(), "apps:create");
        assert_eq!(cmd.title().as_deref(), Some("first line"));
        assert_eq!(cmd.visible_flags().count(), 1);
        assert_eq!(cmd.flags().len(), 2);
        assert!(cmd.answers_to("create"));
        assert!(!cmd.answers_to("apps"));
    }

    #[test]
    fn test_duplicate_flag_rejected() {
        let err = CommandDescriptor::builder("apps")
            .flag(FlagSpec::boolean("force"))
            .flag(FlagSpec::valued("force"))
            .build()
            .unwrap_err();
        assert_eq!(err, HelpError::invalid("apps: duplicate flag --force"));
    }

    #[test]
    fn test_duplicate_alias_rejected() {
        let result = CommandDescriptor::builder("apps")
            .flag(FlagSpec::boolean("force").with_alias('f'))
            .flag(FlagSpec::valued("file").with_alias('f'))
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_duplicate_arg_rejected() {
        let result = CommandDescriptor::builder("apps")
            .arg(ArgSpec::new("name"))
            .arg(ArgSpec::new("name"))
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_bad_identifier_rejected() {
        assert!(CommandDescriptor::builder("apps::create").build().is_err());
        assert!(CommandDescriptor::builder("apps")
            .alias("")
            .build()
            .is_err());
    }

    #[test]
    fn test_dashed_flag_name_rejected() {
        let result = CommandDescriptor::builder("apps")
            .flag(FlagSpec::boolean("--force"))
            .build();
        assert!(result.is_err());
    }
}
