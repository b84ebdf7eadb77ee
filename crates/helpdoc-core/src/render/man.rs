//! roff output for man(1).

use super::section::{format_section, resolve_lines, Article, Layout, Section, SectionBody, SectionKind};
use crate::text::strip_ansi;

/// Render an article as a man page for `bin` (or `bin-subject`).
pub fn render_man(article: &Article, bin: &str, layout: &Layout<'_>) -> String {
    let page = match article.subject.as_deref() {
        Some(subject) => format!("{}-{}", bin, subject.replace(':', "-")),
        None => bin.to_string(),
    };
    let name = match article.subject.as_deref() {
        Some(subject) => format!("{} {}", bin, subject),
        None => bin.to_string(),
    };

    let mut out = String::new();
    out.push_str(&format!(".TH {} 1\n", escape_option(&page.to_uppercase())));
    out.push_str(".SH NAME\n");
    let title = article
        .title
        .as_deref()
        .and_then(|title| layout.resolve(title));
    match title {
        Some(title) => out.push_str(&format!(
            "{} \\- {}\n",
            escape_text(&name),
            escape_text(title.trim())
        )),
        None => out.push_str(&format!("{}\n", escape_text(&name))),
    }

    for section in &article.sections {
        if let Some(formatted) = format_section(section, layout) {
            out.push_str(&formatted);
        }
    }
    out
}

pub(super) fn format_roff_section(section: &Section, layout: &Layout<'_>) -> Option<String> {
    let body = match (&section.body, section.kind) {
        (SectionBody::Rows(rows), _) => {
            let mut out = String::new();
            for row in rows {
                let label = row.label.as_deref().and_then(|label| layout.resolve(label));
                let description = row
                    .description
                    .as_deref()
                    .and_then(|description| layout.resolve(description));
                if label.is_none() && description.is_none() {
                    continue;
                }
                out.push_str(".TP\n");
                if let Some(label) = label {
                    out.push_str(&format!(".B {}\n", escape_option(label.trim())));
                }
                if let Some(description) = description {
                    out.push_str(&format!("{}\n", escape_text(description.trim())));
                }
            }
            out
        }
        (SectionBody::Lines(lines), SectionKind::Code) => {
            let lines = resolve_lines(lines, layout);
            if lines.is_empty() {
                return None;
            }
            let mut out = String::from(".nf\n");
            for line in &lines {
                out.push_str(&escape_option(line));
                out.push('\n');
            }
            out.push_str(".fi\n");
            out
        }
        (SectionBody::Lines(lines), SectionKind::Plain) => {
            paragraphs_to_roff(&resolve_lines(lines, layout))
        }
        (SectionBody::Text(text), _) => {
            let text = layout.resolve(text)?;
            let lines: Vec<String> = text.lines().map(str::to_string).collect();
            paragraphs_to_roff(&lines)
        }
    };
    if body.is_empty() {
        return None;
    }
    Some(format!(
        ".SH {}\n{}",
        escape_text(&section.heading.to_uppercase()),
        body
    ))
}

/// Blank lines separate paragraphs; lines within one are joined.
fn paragraphs_to_roff(lines: &[String]) -> String {
    fn flush(current: &mut Vec<&str>, out: &mut String) {
        if !current.is_empty() {
            out.push_str(".PP\n");
            out.push_str(&escape_text(&current.join(" ")));
            out.push('\n');
            current.clear();
        }
    }

    let mut out = String::new();
    let mut current: Vec<&str> = Vec::new();
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            flush(&mut current, &mut out);
        } else {
            current.push(line);
        }
    }
    flush(&mut current, &mut out);
    out
}

fn escape_text(text: &str) -> String {
    let text = strip_ansi(text);
    text.lines()
        .map(|line| {
            let line = line.replace('\\', "\\\\");
            if line.starts_with('.') || line.starts_with('\'') {
                format!("\\&{}", line)
            } else {
                line
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn escape_option(text: &str) -> String {
    let text = strip_ansi(text);
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '-' => out.push_str("\\-"),
            '\\' => out.push_str("\\\\"),
            _ => out.push(ch),
        }
    }
    out
}
