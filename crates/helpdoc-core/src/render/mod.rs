//! Layout and output formats.
//!
//! - **list**: two-column label/description lists (compact or stacked)
//! - **section**: heading + body blocks and the article model
//! - **article**: whole documents for screen and markdown
//! - **man**: whole documents as roff

mod article;
pub mod list;
mod man;
pub mod section;

use std::fmt;
use std::str::FromStr;

use crate::error::HelpError;
use crate::theme::{DimStyle, Theme};

pub use article::{render_markdown, render_screen};
pub use list::{render_list, ListLayout, ListOptions, Row};
pub use man::render_man;
pub use section::{format_section, Article, Layout, Section, SectionBody, SectionKind};

/// Width used for markdown output regardless of the terminal.
pub const MARKDOWN_WIDTH: usize = 100;

/// Document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Terminal text with bold headings
    #[default]
    Screen,
    /// Markdown suitable for a README
    Markdown,
    /// roff for man(1)
    Man,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Screen => "screen",
            Self::Markdown => "markdown",
            Self::Man => "man",
        }
    }

    pub fn is_screen(&self) -> bool {
        matches!(self, Self::Screen)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = HelpError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "screen" => Ok(Self::Screen),
            "markdown" | "md" => Ok(Self::Markdown),
            "man" | "roff" => Ok(Self::Man),
            other => Err(HelpError::invalid(format!(
                "unknown format \"{}\" (expected screen, markdown or man)",
                other
            ))),
        }
    }
}

/// Per-call render settings. Read once; never changes mid-render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Maximum output width in columns
    pub max_width: usize,
    /// Strip style escapes from the final document
    pub strip_ansi: bool,
    pub format: OutputFormat,
    /// Include hidden and nested commands/topics
    pub all: bool,
    pub dim: DimStyle,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_width: 80,
            strip_ansi: false,
            format: OutputFormat::Screen,
            all: false,
            dim: DimStyle::Faint,
        }
    }
}

impl RenderOptions {
    pub fn with_width(mut self, max_width: usize) -> Self {
        self.max_width = max_width;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn stripped(mut self) -> Self {
        self.strip_ansi = true;
        self
    }

    /// Emphasis applies to screen output only, and never when stripping.
    pub fn theme(&self) -> Theme {
        Theme {
            color: self.format.is_screen() && !self.strip_ansi,
            dim: self.dim,
        }
    }
}
