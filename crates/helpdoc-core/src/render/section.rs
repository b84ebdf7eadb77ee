//! Sections and the article model.
//!
//! Builders produce an [`Article`]: an optional title followed by sections in
//! display order. Nothing is formatted until a renderer walks the article with
//! a [`Layout`], so the same article can become screen text, markdown or roff.

use tracing::debug;

use super::list::{render_list, ListOptions, Row};
use super::{man, OutputFormat, RenderOptions, MARKDOWN_WIDTH};
use crate::substitute::Substitute;
use crate::text::{indent, strip_ansi, wrap};
use crate::theme::Theme;

/// Indent applied to every section body.
pub const SECTION_INDENT: usize = 2;

/// How a section body is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionKind {
    /// Prose and lists
    #[default]
    Plain,
    /// Literal command lines: never wrapped, fenced as a shell session
    Code,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionBody {
    Text(String),
    Lines(Vec<String>),
    Rows(Vec<Row>),
}

/// A heading and its body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub heading: String,
    pub kind: SectionKind,
    pub body: SectionBody,
}

impl Section {
    pub fn text(heading: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            kind: SectionKind::Plain,
            body: SectionBody::Text(text.into()),
        }
    }

    pub fn lines(heading: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            heading: heading.into(),
            kind: SectionKind::Plain,
            body: SectionBody::Lines(lines),
        }
    }

    /// Literal command lines (usage, aliases, examples).
    pub fn code(heading: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            heading: heading.into(),
            kind: SectionKind::Code,
            body: SectionBody::Lines(lines),
        }
    }

    pub fn rows(heading: impl Into<String>, rows: Vec<Row>) -> Self {
        Self {
            heading: heading.into(),
            kind: SectionKind::Plain,
            body: SectionBody::Rows(rows),
        }
    }

    /// Whether the body has nothing visible before substitution.
    pub fn is_empty(&self) -> bool {
        let blank = |text: &str| strip_ansi(text).trim().is_empty();
        match &self.body {
            SectionBody::Text(text) => blank(text),
            SectionBody::Lines(lines) => lines.iter().all(|line| blank(line)),
            SectionBody::Rows(rows) => rows.iter().all(|row| {
                row.label.as_deref().map_or(true, blank)
                    && row.description.as_deref().map_or(true, blank)
            }),
        }
    }
}

/// A whole help document before formatting.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Article {
    /// First line of the subject's description
    pub title: Option<String>,
    /// Command or topic id; `None` for root help
    pub subject: Option<String>,
    pub sections: Vec<Section>,
}

impl Article {
    pub fn new(title: Option<String>) -> Self {
        Self {
            title,
            subject: None,
            sections: Vec::new(),
        }
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Append a section; empty ones are dropped here.
    pub fn push(&mut self, section: Section) {
        if section.is_empty() {
            debug!(heading = %section.heading, "omitting empty section");
            return;
        }
        self.sections.push(section);
    }
}

/// Everything a section needs to format itself for one render call.
#[derive(Clone, Copy)]
pub struct Layout<'a> {
    pub format: OutputFormat,
    /// Width of the whole document
    pub max_width: usize,
    pub strip_ansi: bool,
    pub theme: Theme,
    pub substitute: &'a dyn Substitute,
}

impl<'a> Layout<'a> {
    /// Markdown and roff ignore the terminal: fixed width, no styling.
    pub fn new(options: &RenderOptions, substitute: &'a dyn Substitute) -> Self {
        let (max_width, strip_ansi) = match options.format {
            OutputFormat::Screen => (options.max_width, options.strip_ansi),
            OutputFormat::Markdown | OutputFormat::Man => (MARKDOWN_WIDTH, true),
        };
        Self {
            format: options.format,
            max_width,
            strip_ansi,
            theme: options.theme(),
            substitute,
        }
    }

    /// Width left for a body after the section indent.
    pub fn body_width(&self) -> usize {
        self.max_width.saturating_sub(SECTION_INDENT).max(1)
    }

    /// Substitute and optionally strip; `None` when nothing visible remains.
    pub fn resolve(&self, text: &str) -> Option<String> {
        let text = self.substitute.substitute(text);
        let text = if self.strip_ansi {
            strip_ansi(&text).into_owned()
        } else {
            text
        };
        if strip_ansi(&text).trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }

    fn list_options(&self) -> ListOptions<'a> {
        ListOptions {
            max_width: self.body_width(),
            strip_ansi: self.strip_ansi,
            substitute: Some(self.substitute),
        }
    }
}

/// Format one section, or `None` when its body renders to nothing.
pub fn format_section(section: &Section, layout: &Layout<'_>) -> Option<String> {
    let formatted = match layout.format {
        OutputFormat::Screen => format_screen(section, layout),
        OutputFormat::Markdown => format_markdown(section, layout),
        OutputFormat::Man => man::format_roff_section(section, layout),
    };
    if formatted.is_none() {
        debug!(heading = %section.heading, format = %layout.format, "section rendered empty");
    }
    formatted
}

fn format_screen(section: &Section, layout: &Layout<'_>) -> Option<String> {
    let body = screen_body(section, layout)?;
    let heading = layout.theme.bold(&section.heading.to_uppercase());
    Some(format!("{}\n{}", heading, indent(&body, SECTION_INDENT)))
}

fn screen_body(section: &Section, layout: &Layout<'_>) -> Option<String> {
    let width = layout.body_width();
    let body = match (&section.body, section.kind) {
        (SectionBody::Rows(rows), _) => render_list(rows, &layout.list_options()),
        (SectionBody::Lines(lines), SectionKind::Code) => resolve_lines(lines, layout).join("\n"),
        (SectionBody::Lines(lines), SectionKind::Plain) => resolve_lines(lines, layout)
            .iter()
            .map(|line| wrap(line, width))
            .collect::<Vec<_>>()
            .join("\n"),
        (SectionBody::Text(text), _) => wrap(layout.resolve(text)?.trim_matches('\n'), width),
    };
    if body.trim().is_empty() {
        None
    } else {
        Some(body)
    }
}

fn format_markdown(section: &Section, layout: &Layout<'_>) -> Option<String> {
    let body = match (&section.body, section.kind) {
        (SectionBody::Rows(rows), _) => {
            let list = render_list(rows, &layout.list_options());
            if list.is_empty() {
                return None;
            }
            format!("```\n{}\n```", list)
        }
        (SectionBody::Lines(lines), SectionKind::Code) => {
            let lines = resolve_lines(lines, layout);
            if lines.is_empty() {
                return None;
            }
            format!("```sh-session\n{}\n```", lines.join("\n"))
        }
        (SectionBody::Lines(lines), SectionKind::Plain) => {
            let lines = resolve_lines(lines, layout);
            if lines.is_empty() {
                return None;
            }
            wrap(&lines.join("\n"), layout.body_width())
        }
        (SectionBody::Text(text), _) => {
            wrap(layout.resolve(text)?.trim_matches('\n'), layout.body_width())
        }
    };
    Some(format!("**{}**\n\n{}", section.heading.to_uppercase(), body))
}

/// Substituted non-blank lines.
pub(super) fn resolve_lines(lines: &[String], layout: &Layout<'_>) -> Vec<String> {
    lines
        .iter()
        .filter_map(|line| layout.resolve(line))
        .map(|line| line.trim_end().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::substitute::{ConfigTemplate, Verbatim};

    fn screen(width: usize) -> RenderOptions {
        RenderOptions::default().with_width(width).stripped()
    }

    #[test]
    fn test_empty_sections_are_omitted() {
        let layout = Layout::new(&screen(80), &Verbatim);
        assert!(format_section(&Section::text("Description", "  \n"), &layout).is_none());
        assert!(format_section(&Section::rows("Arguments", vec![]), &layout).is_none());
        assert!(format_section(&Section::code("Aliases", vec![]), &layout).is_none());
    }

    #[test]
    fn test_article_push_drops_empty() {
        let mut article = Article::new(None);
        article.push(Section::lines("Aliases", vec![String::new()]));
        article.push(Section::text("Description", "body"));
        assert_eq!(article.sections.len(), 1);
        assert_eq!(article.sections[0].heading, "Description");
    }

    #[test]
    fn test_screen_section_indents_body() {
        let layout = Layout::new(&screen(80), &Verbatim);
        let section = Section::rows("Options", vec![Row::pair("--force", "forces")]);
        assert_eq!(
            format_section(&section, &layout).unwrap(),
            "OPTIONS\n  --force  forces"
        );
    }

    #[test]
    fn test_screen_heading_is_bold() {
        let layout = Layout::new(&RenderOptions::default(), &Verbatim);
        let output = format_section(&Section::text("Description", "hello"), &layout).unwrap();
        assert!(output.starts_with('\x1b'));
        assert_eq!(strip_ansi(&output), "DESCRIPTION\n  hello");
    }

    #[test]
    fn test_text_wraps_inside_indent() {
        let layout = Layout::new(&screen(12), &Verbatim);
        let output = format_section(&Section::text("Description", "one two three"), &layout).unwrap();
        assert_eq!(output, "DESCRIPTION\n  one two\n  three");
    }

    #[test]
    fn test_code_lines_are_not_wrapped() {
        let layout = Layout::new(&screen(12), &Verbatim);
        let section = Section::code("Usage", vec!["$ mycli apps:create APP_NAME".into()]);
        assert_eq!(
            format_section(&section, &layout).unwrap(),
            "USAGE\n  $ mycli apps:create APP_NAME"
        );
    }

    #[test]
    fn test_blank_lines_inside_text_stay_unindented() {
        let layout = Layout::new(&screen(80), &Verbatim);
        let output = format_section(&Section::text("Description", "a\n\nb"), &layout).unwrap();
        assert_eq!(output, "DESCRIPTION\n  a\n\n  b");
    }

    #[test]
    fn test_substitution_reaches_every_body() {
        let template = ConfigTemplate::new("mycli");
        let layout = Layout::new(&screen(80), &template);
        let text = Section::text("Description", "run <%= config.bin %>");
        let code = Section::code("Examples", vec!["$ <%= config.bin %> help".into()]);
        let rows = Section::rows("Commands", vec![Row::pair("help", "help for <%= config.bin %>")]);
        assert_eq!(format_section(&text, &layout).unwrap(), "DESCRIPTION\n  run mycli");
        assert_eq!(format_section(&code, &layout).unwrap(), "EXAMPLES\n  $ mycli help");
        assert_eq!(format_section(&rows, &layout).unwrap(), "COMMANDS\n  help  help for mycli");
    }

    #[test]
    fn test_markdown_fences_lists_and_code() {
        let options = RenderOptions::default().with_format(OutputFormat::Markdown);
        let layout = Layout::new(&options, &Verbatim);
        let rows = Section::rows("Options", vec![Row::pair("--force", "\x1b[2mforces\x1b[22m")]);
        assert_eq!(
            format_section(&rows, &layout).unwrap(),
            "**OPTIONS**\n\n```\n--force  forces\n```"
        );
        let code = Section::code("Usage", vec!["$ mycli apps".into()]);
        assert_eq!(
            format_section(&code, &layout).unwrap(),
            "**USAGE**\n\n```sh-session\n$ mycli apps\n```"
        );
        let text = Section::text("Description", "\x1b[1mplain\x1b[22m words");
        assert_eq!(
            format_section(&text, &layout).unwrap(),
            "**DESCRIPTION**\n\nplain words"
        );
    }

    #[test]
    fn test_markdown_ignores_terminal_width() {
        let options = RenderOptions::default()
            .with_format(OutputFormat::Markdown)
            .with_width(20);
        let layout = Layout::new(&options, &Verbatim);
        assert_eq!(layout.max_width, MARKDOWN_WIDTH);
        assert!(layout.strip_ansi);
        assert!(!layout.theme.color);
    }
}
