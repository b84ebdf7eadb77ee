//! Manifest files describing a program's commands and topics.
//!
//! A manifest stands in for a live command registry. It is TOML unless the
//! file name ends in `.json`:
//!
//! ```toml
//! bin = "mycli"
//! description = "my command line tool"
//!
//! [[commands]]
//! id = "apps:create"
//! description = "create an app"
//! aliases = ["create"]
//!
//! [[commands.args]]
//! name = "app_name"
//! required = true
//!
//! [commands.flags.force]
//! char = "f"
//! description = "forces"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use helpdoc_core::{ArgSpec, CommandDescriptor, FlagSpec, Registry, TopicDescriptor};

use crate::errors::CliError;

#[derive(Debug, Deserialize)]
pub struct Manifest {
    pub bin: String,
    /// Display name for `<%= config.name %>`; defaults to `bin`
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub default_command: Option<String>,
    #[serde(default)]
    pub commands: Vec<ManifestCommand>,
    #[serde(default)]
    pub topics: Vec<TopicDescriptor>,
}

#[derive(Debug, Deserialize)]
pub struct ManifestCommand {
    pub id: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub usage: OneOrMany,
    #[serde(default)]
    pub examples: OneOrMany,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub args: Vec<ArgSpec>,
    /// Keyed by flag name
    #[serde(default)]
    pub flags: BTreeMap<String, FlagSpec>,
}

/// A single string or a list of strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl Default for OneOrMany {
    fn default() -> Self {
        OneOrMany::Many(Vec::new())
    }
}

impl OneOrMany {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            OneOrMany::One(value) => vec![value],
            OneOrMany::Many(values) => values,
        }
    }
}

impl ManifestCommand {
    pub fn into_descriptor(self) -> helpdoc_core::Result<CommandDescriptor> {
        let mut builder = CommandDescriptor::builder(self.id).hidden(self.hidden);
        if let Some(description) = self.description {
            builder = builder.description(description);
        }
        for arg in self.args {
            builder = builder.arg(arg);
        }
        for (name, mut flag) in self.flags {
            flag.name = name;
            builder = builder.flag(flag);
        }
        for alias in self.aliases {
            builder = builder.alias(alias);
        }
        for usage in self.usage.into_vec() {
            builder = builder.usage(usage);
        }
        for example in self.examples.into_vec() {
            builder = builder.example(example);
        }
        builder.build()
    }
}

impl Manifest {
    pub fn from_toml(contents: &str) -> anyhow::Result<Self> {
        toml::from_str(contents).map_err(|e| anyhow::anyhow!("TOML error: {}", e))
    }

    pub fn from_json(contents: &str) -> anyhow::Result<Self> {
        serde_json::from_str(contents).map_err(|e| anyhow::anyhow!("JSON error: {}", e))
    }

    /// Build the registry, adding the built-in `help` and `commands`
    /// commands unless the manifest defines them.
    pub fn into_registry(self) -> helpdoc_core::Result<Registry> {
        let mut builder = Registry::builder(self.bin);
        if let Some(name) = self.name {
            builder = builder.name(name);
        }
        if let Some(description) = self.description {
            builder = builder.description(description);
        }
        if let Some(version) = self.version {
            builder = builder.version(version);
        }
        if let Some(id) = self.default_command {
            builder = builder.default_command(id);
        }

        let mut ids: Vec<String> = Vec::with_capacity(self.commands.len());
        for command in self.commands {
            ids.push(command.id.clone());
            builder = builder.command(command.into_descriptor()?);
        }
        if !ids.iter().any(|id| id == "help") {
            builder = builder.command(builtin_help()?);
        }
        if !ids.iter().any(|id| id == "commands") {
            builder = builder.command(builtin_commands()?);
        }

        for topic in self.topics {
            builder = builder.topic(topic);
        }
        builder.build()
    }
}

pub fn read_manifest(path: &Path) -> anyhow::Result<Manifest> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read manifest {}: {}", path.display(), e))?;
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    let manifest = if is_json {
        Manifest::from_json(&contents)
    } else {
        Manifest::from_toml(&contents)
    };
    manifest.map_err(|e| {
        anyhow::Error::from(CliError::invalid_input(format!(
            "Failed to parse manifest {}: {}",
            path.display(),
            e
        )))
    })
}

fn builtin_help() -> helpdoc_core::Result<CommandDescriptor> {
    CommandDescriptor::builder("help")
        .description("display help for <%= config.bin %>")
        .arg(ArgSpec::new("command").with_help("command to show help for"))
        .flag(FlagSpec::boolean("all").with_help("see all commands in CLI"))
        .flag(
            FlagSpec::valued("format")
                .with_options(["markdown", "man"])
                .with_help("output format"),
        )
        .build()
}

fn builtin_commands() -> helpdoc_core::Result<CommandDescriptor> {
    CommandDescriptor::builder("commands")
        .description("list all the commands")
        .hidden(true)
        .build()
}
