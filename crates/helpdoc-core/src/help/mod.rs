//! Help builders and the router that picks one.
//!
//! - **command**: full help for a runnable command
//! - **root**: program-level help and per-topic help
//!
//! [`Help`] ties a registry to one set of [`RenderOptions`] and renders
//! whichever article an argv asks for.

mod command;
mod root;

use tracing::debug;

use crate::error::{HelpError, Result};
use crate::model::{CommandDescriptor, TopicDescriptor};
use crate::registry::Registry;
use crate::render::{
    render_man, render_markdown, render_screen, Article, Layout, OutputFormat, RenderOptions, Row,
};
use crate::substitute::Substitute;

pub use command::CommandHelp;
pub use root::{RootHelp, TopicHelp};

/// Renders help for a registry with fixed options.
pub struct Help<'a> {
    registry: &'a Registry,
    options: RenderOptions,
    substitute: Box<dyn Substitute + 'a>,
}

impl<'a> Help<'a> {
    /// Placeholders resolve against the registry's program name and version.
    pub fn new(registry: &'a Registry, options: RenderOptions) -> Self {
        Self {
            registry,
            options,
            substitute: Box::new(registry.template()),
        }
    }

    pub fn with_substitute(mut self, substitute: impl Substitute + 'a) -> Self {
        self.substitute = Box::new(substitute);
        self
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Resolve the help subject in `argv` and render its help.
    ///
    /// A subject naming both a command and a topic shows the command.
    pub fn show_help<S: AsRef<str>>(&self, argv: &[S]) -> Result<String> {
        self.show_subject(help_subject(argv))
    }

    /// Render help for an already resolved subject; `None` is the root.
    pub fn show_subject(&self, subject: Option<&str>) -> Result<String> {
        let Some(subject) = subject else {
            debug!("no help subject, rendering root help");
            return Ok(self.root());
        };

        if let Some(command) = self.registry.find_command(subject) {
            debug!(subject, command = command.id(), "rendering command help");
            return Ok(self.command(command));
        }
        if let Some(topic) = self.registry.find_topic(subject) {
            debug!(subject, "rendering topic help");
            return Ok(self.topic(topic));
        }
        Err(HelpError::not_found(subject))
    }

    pub fn root(&self) -> String {
        let article = RootHelp::new(self.registry, self.options.all).article();
        self.render(&article)
    }

    pub fn topic(&self, topic: &TopicDescriptor) -> String {
        let article = TopicHelp::new(self.registry, self.options.all).article(topic);
        self.render(&article)
    }

    pub fn command(&self, command: &CommandDescriptor) -> String {
        let help = CommandHelp::new(self.registry, self.options.theme(), self.options.all);
        self.render(&help.article(command))
    }

    pub fn render(&self, article: &Article) -> String {
        let layout = Layout::new(&self.options, &*self.substitute);
        match self.options.format {
            OutputFormat::Screen => render_screen(article, &layout),
            OutputFormat::Markdown => render_markdown(article, &layout),
            OutputFormat::Man => render_man(article, self.registry.bin(), &layout),
        }
    }
}

/// The first positional token of `argv`.
///
/// A leading `help` is skipped once, flags are ignored and scanning stops at
/// `--`.
pub fn help_subject<S: AsRef<str>>(argv: &[S]) -> Option<&str> {
    let mut args = argv.iter().map(AsRef::as_ref).peekable();
    if args.peek() == Some(&"help") {
        args.next();
    }
    for arg in args {
        if arg == "--" {
            return None;
        }
        if arg.starts_with('-') {
            continue;
        }
        return Some(arg);
    }
    None
}

/// One row per command id, sorted; the first occurrence of an id wins.
pub(crate) fn command_rows<'c>(commands: impl Iterator<Item = &'c CommandDescriptor>) -> Vec<Row> {
    let mut commands: Vec<&CommandDescriptor> = commands.collect();
    commands.sort_by(|a, b| a.id().cmp(b.id()));
    commands.dedup_by(|a, b| a.id() == b.id());
    commands
        .into_iter()
        .map(|cmd| Row::new(cmd.id(), cmd.title()))
        .collect()
}

pub(crate) fn topic_rows<'t>(topics: impl Iterator<Item = &'t TopicDescriptor>) -> Vec<Row> {
    let mut topics: Vec<&TopicDescriptor> = topics.collect();
    topics.sort_by(|a, b| a.id.cmp(&b.id));
    topics.dedup_by(|a, b| a.id == b.id);
    topics
        .into_iter()
        .map(|topic| Row::new(topic.id.clone(), topic.title()))
        .collect()
}
