//! Whole-document renderers for the terminal and for markdown.

use super::section::{format_section, Article, Layout};
use crate::text::{strip_ansi, visible_width, wrap};

/// Title and sections separated by blank lines.
pub fn render_screen(article: &Article, layout: &Layout<'_>) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(article.sections.len() + 1);
    if let Some(title) = article.title.as_deref().and_then(|t| layout.resolve(t)) {
        parts.push(wrap(title.trim(), layout.max_width));
    }
    parts.extend(
        article
            .sections
            .iter()
            .filter_map(|section| format_section(section, layout)),
    );

    let output = parts.join("\n\n");
    if layout.strip_ansi {
        strip_ansi(&output).into_owned()
    } else {
        output
    }
}

/// A dash-underlined title followed by bold-headed sections.
pub fn render_markdown(article: &Article, layout: &Layout<'_>) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(article.sections.len() + 1);
    if let Some(title) = article.title.as_deref().and_then(|t| layout.resolve(t)) {
        let title = strip_ansi(title.trim()).into_owned();
        let rule = "-".repeat(visible_width(&title).max(1));
        parts.push(format!("{}\n{}", title, rule));
    }
    parts.extend(
        article
            .sections
            .iter()
            .filter_map(|section| format_section(section, layout)),
    );

    strip_ansi(parts.join("\n\n").trim()).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::list::Row;
    use crate::render::section::Section;
    use crate::render::{OutputFormat, RenderOptions};
    use crate::substitute::{ConfigTemplate, Verbatim};

    fn article() -> Article {
        let mut article = Article::new(Some("create an app".into()));
        article.push(Section::code("Usage", vec!["$ mycli apps:create".into()]));
        article.push(Section::rows("Options", vec![Row::pair("--force", "forces")]));
        article.push(Section::text("Description", ""));
        article
    }

    #[test]
    fn test_screen_document() {
        let options = RenderOptions::default().stripped();
        let layout = Layout::new(&options, &Verbatim);
        assert_eq!(
            render_screen(&article(), &layout),
            "create an app\n\nUSAGE\n  $ mycli apps:create\n\nOPTIONS\n  --force  forces"
        );
    }

    #[test]
    fn test_screen_without_title() {
        let options = RenderOptions::default().stripped();
        let layout = Layout::new(&options, &Verbatim);
        let mut article = Article::new(None);
        article.push(Section::text("Description", "hello"));
        assert_eq!(render_screen(&article, &layout), "DESCRIPTION\n  hello");
    }

    #[test]
    fn test_screen_title_is_substituted() {
        let options = RenderOptions::default().stripped();
        let template = ConfigTemplate::new("mycli");
        let layout = Layout::new(&options, &template);
        let article = Article::new(Some("help for <%= config.bin %>".into()));
        assert_eq!(render_screen(&article, &layout), "help for mycli");
    }

    #[test]
    fn test_colored_screen_strips_to_plain() {
        let colored = Layout::new(&RenderOptions::default(), &Verbatim);
        let plain_options = RenderOptions::default().stripped();
        let plain = Layout::new(&plain_options, &Verbatim);
        let output = render_screen(&article(), &colored);
        assert!(output.contains('\x1b'));
        assert_eq!(strip_ansi(&output), render_screen(&article(), &plain));
    }

    #[test]
    fn test_markdown_document() {
        let options = RenderOptions::default().with_format(OutputFormat::Markdown);
        let layout = Layout::new(&options, &Verbatim);
        assert_eq!(
            render_markdown(&article(), &layout),
            "create an app\n-------------\n\n**USAGE**\n\n```sh-session\n$ mycli apps:create\n```\n\n**OPTIONS**\n\n```\n--force  forces\n```"
        );
    }
}
