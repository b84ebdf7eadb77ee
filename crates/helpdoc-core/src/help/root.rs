//! Help for the program as a whole and for individual topics.

use crate::model::{depth, is_child, split_description, CommandDescriptor, TopicDescriptor};
use crate::registry::Registry;
use crate::render::{Article, Section};

use super::command::default_usage;
use super::{command_rows, topic_rows};

/// Root help: title, version, usage, description, then topics and commands.
pub struct RootHelp<'a> {
    registry: &'a Registry,
    all: bool,
}

impl<'a> RootHelp<'a> {
    pub fn new(registry: &'a Registry, all: bool) -> Self {
        Self { registry, all }
    }

    pub fn article(&self) -> Article {
        let registry = self.registry;
        let (title, body) = registry
            .description()
            .map(split_description)
            .unwrap_or((None, None));

        let mut article = Article::new(title);
        if let Some(version) = registry.version() {
            article.push(Section::lines(
                "Version",
                vec![format!("{}/{}", registry.bin(), version)],
            ));
        }
        article.push(self.usage());
        if let Some(body) = body {
            article.push(Section::text("Description", body));
        }
        article.push(Section::rows("Topics", topic_rows(self.topics())));
        article.push(Section::rows("Commands", command_rows(self.commands())));
        article
    }

    fn usage(&self) -> Section {
        let bin = self.registry.bin();
        let mut lines = vec![format!("$ {} [COMMAND]", bin)];
        if let Some(command) = self.registry.default_command() {
            let usage = default_usage(command, false);
            if usage.is_empty() {
                lines.push(format!("$ {}", bin));
            } else {
                lines.push(format!("$ {} {}", bin, usage));
            }
        }
        Section::code("Usage", lines)
    }

    /// Top-level namespaces that have something under them.
    fn topics(&self) -> impl Iterator<Item = &'a TopicDescriptor> + '_ {
        let registry = self.registry;
        registry.topics().iter().filter(move |topic| {
            (self.all || (depth(&topic.id) == 1 && !topic.hidden))
                && registry.has_descendants(&topic.id)
        })
    }

    fn commands(&self) -> impl Iterator<Item = &'a CommandDescriptor> + '_ {
        self.registry
            .commands()
            .iter()
            .filter(move |cmd| self.all || (depth(cmd.id()) == 1 && !cmd.is_hidden()))
    }
}

/// Topic help: title, `<topic>:COMMAND` usage, description, then the topic's
/// immediate children.
pub struct TopicHelp<'a> {
    registry: &'a Registry,
    all: bool,
}

impl<'a> TopicHelp<'a> {
    pub fn new(registry: &'a Registry, all: bool) -> Self {
        Self { registry, all }
    }

    pub fn article(&self, topic: &TopicDescriptor) -> Article {
        let registry = self.registry;
        let (title, body) = topic
            .description
            .as_deref()
            .map(split_description)
            .unwrap_or((None, None));

        let mut article = Article::new(title).with_subject(topic.id.clone());
        article.push(Section::code(
            "Usage",
            vec![format!("$ {} {}:COMMAND", registry.bin(), topic.id)],
        ));
        if let Some(body) = body {
            article.push(Section::text("Description", body));
        }

        let topics = registry.topics().iter().filter(|child| {
            is_child(&child.id, &topic.id)
                && (self.all || !child.hidden)
                && registry.has_descendants(&child.id)
        });
        article.push(Section::rows("Topics", topic_rows(topics)));

        let commands = registry
            .commands()
            .iter()
            .filter(|cmd| is_child(cmd.id(), &topic.id) && (self.all || !cmd.is_hidden()));
        article.push(Section::rows("Commands", command_rows(commands)));
        article
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ArgSpec, FlagSpec};
    use crate::render::{render_screen, Layout, RenderOptions};
    use crate::substitute::Verbatim;

    fn command(id: &str) -> CommandDescriptor {
        CommandDescriptor::builder(id).build().unwrap()
    }

    fn screen(article: &Article) -> String {
        let options = RenderOptions::default().with_width(80).stripped();
        render_screen(article, &Layout::new(&options, &Verbatim))
    }

    fn plugins_registry() -> Registry {
        Registry::builder("mycli")
            .command(command("plugins"))
            .command(command("plugins:install"))
            .build()
            .unwrap()
    }

    #[test]
    fn test_root_lists_top_level_only() {
        let registry = plugins_registry();
        assert_eq!(
            screen(&RootHelp::new(&registry, false).article()),
            "USAGE\n  $ mycli [COMMAND]\n\nTOPICS\n  plugins\n\nCOMMANDS\n  plugins"
        );
    }

    #[test]
    fn test_root_all_includes_nested() {
        let registry = plugins_registry();
        assert_eq!(
            screen(&RootHelp::new(&registry, true).article()),
            "USAGE\n  $ mycli [COMMAND]\n\nTOPICS\n  plugins\n\nCOMMANDS\n  plugins\n  plugins:install"
        );
    }

    #[test]
    fn test_root_title_version_and_description() {
        let registry = Registry::builder("mycli")
            .description("standard help for mycli\nlonger text")
            .version("1.0.0")
            .command(
                CommandDescriptor::builder("help")
                    .description("display help for mycli")
                    .build()
                    .unwrap(),
            )
            .command(CommandDescriptor::builder("commands").hidden(true).build().unwrap())
            .build()
            .unwrap();
        assert_eq!(
            screen(&RootHelp::new(&registry, false).article()),
            "standard help for mycli\n\nVERSION\n  mycli/1.0.0\n\nUSAGE\n  $ mycli [COMMAND]\n\nDESCRIPTION\n  longer text\n\nCOMMANDS\n  help  display help for mycli"
        );
    }

    #[test]
    fn test_root_default_command_usage() {
        let registry = Registry::builder("mycli")
            .default_command("run")
            .command(
                CommandDescriptor::builder("run")
                    .arg(ArgSpec::new("script"))
                    .flag(FlagSpec::boolean("watch"))
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();
        let output = screen(&RootHelp::new(&registry, false).article());
        assert!(output.starts_with("USAGE\n  $ mycli [COMMAND]\n  $ mycli [SCRIPT] [OPTIONS]\n"));
    }

    #[test]
    fn test_hidden_topics_need_all() {
        let registry = Registry::builder("mycli")
            .command(CommandDescriptor::builder("internal:sync").hidden(true).build().unwrap())
            .build()
            .unwrap();
        assert_eq!(
            screen(&RootHelp::new(&registry, false).article()),
            "USAGE\n  $ mycli [COMMAND]"
        );
        assert_eq!(
            screen(&RootHelp::new(&registry, true).article()),
            "USAGE\n  $ mycli [COMMAND]\n\nTOPICS\n  internal\n\nCOMMANDS\n  internal:sync"
        );
    }

    #[test]
    fn test_topic_lists_immediate_children() {
        let registry = Registry::builder("mycli")
            .topic(TopicDescriptor::new("apps").with_description("manage apps\nApps are deployable units."))
            .command(
                CommandDescriptor::builder("apps:create")
                    .description("create an app")
                    .build()
                    .unwrap(),
            )
            .command(command("apps:domains:add"))
            .command(CommandDescriptor::builder("apps:debug").hidden(true).build().unwrap())
            .build()
            .unwrap();
        let topic = registry.find_topic("apps").unwrap();
        assert_eq!(
            screen(&TopicHelp::new(&registry, false).article(topic)),
            "manage apps\n\nUSAGE\n  $ mycli apps:COMMAND\n\nDESCRIPTION\n  Apps are deployable units.\n\nTOPICS\n  apps:domains\n\nCOMMANDS\n  apps:create  create an app"
        );
    }
}
