//! Read-only snapshot of a CLI's commands and topics.
//!
//! The registry is what the help builders read from. It owns no discovery
//! logic: callers hand it fully built descriptors. Topics are the union of the
//! explicitly described ones and every proper colon-prefix of a command id,
//! so `plugins:install` implies a `plugins` topic even when nothing describes
//! it.

use std::collections::BTreeMap;

use crate::error::{HelpError, Result};
use crate::model::{
    is_descendant, validate_identifier, CommandDescriptor, TopicDescriptor, ID_SEPARATOR,
};
use crate::substitute::ConfigTemplate;

#[derive(Debug, Clone)]
pub struct Registry {
    bin: String,
    name: Option<String>,
    description: Option<String>,
    version: Option<String>,
    default_command: Option<String>,
    commands: Vec<CommandDescriptor>,
    topics: Vec<TopicDescriptor>,
}

impl Registry {
    pub fn builder(bin: impl Into<String>) -> RegistryBuilder {
        RegistryBuilder {
            bin: bin.into(),
            name: None,
            description: None,
            version: None,
            default_command: None,
            commands: Vec::new(),
            topics: Vec::new(),
        }
    }

    /// Invocation prefix (program name).
    pub fn bin(&self) -> &str {
        &self.bin
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// The command run when no command is given, if it exists.
    pub fn default_command(&self) -> Option<&CommandDescriptor> {
        self.default_command
            .as_deref()
            .and_then(|id| self.find_command(id))
    }

    /// Commands in registration order, first registration of an id wins.
    pub fn commands(&self) -> &[CommandDescriptor] {
        &self.commands
    }

    /// Explicit and implicit topics, sorted by id.
    pub fn topics(&self) -> &[TopicDescriptor] {
        &self.topics
    }

    /// Look up a command by id, then by alias.
    pub fn find_command(&self, id: &str) -> Option<&CommandDescriptor> {
        self.commands
            .iter()
            .find(|cmd| cmd.id() == id)
            .or_else(|| self.commands.iter().find(|cmd| cmd.answers_to(id)))
    }

    pub fn find_topic(&self, id: &str) -> Option<&TopicDescriptor> {
        self.topics.iter().find(|topic| topic.id == id)
    }

    /// Whether any command or topic extends `id` with a `:` segment.
    pub fn has_descendants(&self, id: &str) -> bool {
        self.commands.iter().any(|cmd| is_descendant(cmd.id(), id))
            || self.topics.iter().any(|topic| is_descendant(&topic.id, id))
    }

    /// Sorted command ids; hidden commands only when `all` is set.
    pub fn command_ids(&self, all: bool) -> Vec<&str> {
        let mut ids: Vec<&str> = self
            .commands
            .iter()
            .filter(|cmd| all || !cmd.is_hidden())
            .map(CommandDescriptor::id)
            .collect();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    /// Placeholder resolver for this registry's help text.
    pub fn template(&self) -> ConfigTemplate {
        let mut template = ConfigTemplate::new(self.bin.clone());
        if let Some(name) = self.name.as_deref() {
            template = template.with_name(name);
        }
        match self.version.as_deref() {
            Some(version) => template.with_version(version),
            None => template,
        }
    }
}

/// Builder for [`Registry`].
#[derive(Debug, Clone)]
pub struct RegistryBuilder {
    bin: String,
    name: Option<String>,
    description: Option<String>,
    version: Option<String>,
    default_command: Option<String>,
    commands: Vec<CommandDescriptor>,
    topics: Vec<TopicDescriptor>,
}

impl RegistryBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn default_command(mut self, id: impl Into<String>) -> Self {
        self.default_command = Some(id.into());
        self
    }

    pub fn command(mut self, command: CommandDescriptor) -> Self {
        self.commands.push(command);
        self
    }

    pub fn commands<I>(mut self, commands: I) -> Self
    where
        I: IntoIterator<Item = CommandDescriptor>,
    {
        self.commands.extend(commands);
        self
    }

    pub fn topic(mut self, topic: TopicDescriptor) -> Self {
        self.topics.push(topic);
        self
    }

    pub fn build(self) -> Result<Registry> {
        if self.bin.trim().is_empty() {
            return Err(HelpError::invalid("program name must not be empty"));
        }
        if let Some(id) = self.default_command.as_deref() {
            validate_identifier(id)?;
        }

        let mut commands: Vec<CommandDescriptor> = Vec::with_capacity(self.commands.len());
        for command in self.commands {
            if commands.iter().all(|existing| existing.id() != command.id()) {
                commands.push(command);
            }
        }

        let mut topics: BTreeMap<String, TopicDescriptor> = BTreeMap::new();
        for topic in self.topics {
            validate_identifier(&topic.id)?;
            topics.entry(topic.id.clone()).or_insert(topic);
        }
        for command in &commands {
            for prefix in proper_prefixes(command.id()) {
                if topics.contains_key(prefix) {
                    continue;
                }
                let all_hidden = commands
                    .iter()
                    .filter(|cmd| is_descendant(cmd.id(), prefix))
                    .all(CommandDescriptor::is_hidden);
                let mut topic = TopicDescriptor::new(prefix);
                topic.hidden = all_hidden;
                topics.insert(prefix.to_string(), topic);
            }
        }

        Ok(Registry {
            bin: self.bin,
            name: self.name,
            description: self.description,
            version: self.version,
            default_command: self.default_command,
            commands,
            topics: topics.into_values().collect(),
        })
    }
}

/// `a:b:c` yields `a` and `a:b`.
fn proper_prefixes(id: &str) -> impl Iterator<Item = &str> {
    id.match_indices(ID_SEPARATOR).map(move |(idx, _)| &id[..idx])
}
