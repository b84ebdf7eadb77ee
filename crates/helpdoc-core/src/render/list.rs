//! Two-column label/description lists.
//!
//! Compact layout aligns every description at the same column:
//!
//! ```text
//! -f, --foo=foo        foobar
//! -r, --remote=remote
//! --force              force it
//! ```
//!
//! When any single description needs more than [`MAX_CONTINUATION_LINES`]
//! extra lines at that column, the whole list is rendered stacked instead:
//!
//! ```text
//! -f, --foo=foo
//!     a long description ...
//!
//! --force
//!     another one
//! ```
//!
//! Layout is chosen for the list as a whole; rows are never mixed.

use tracing::debug;

use crate::substitute::Substitute;
use crate::text::{indent, pad_right, strip_ansi, visible_width, wrap_lines};

/// Spaces between the label column and the description column.
pub const COLUMN_GAP: usize = 2;

/// A compact row may wrap onto at most this many extra lines.
pub const MAX_CONTINUATION_LINES: usize = 4;

/// Description indent in stacked layout.
pub const STACKED_INDENT: usize = 4;

/// One (label, description) pair; either side may be absent.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    pub label: Option<String>,
    pub description: Option<String>,
}

impl Row {
    pub fn new(label: impl Into<String>, description: Option<String>) -> Self {
        Self {
            label: Some(label.into()),
            description,
        }
    }

    pub fn pair(label: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(label, Some(description.into()))
    }

    pub fn label(label: impl Into<String>) -> Self {
        Self::new(label, None)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListLayout {
    /// Label and description on the same line
    Compact,
    /// Label on its own line, description indented below
    Stacked,
}

/// Settings for [`render_list`].
#[derive(Clone, Copy)]
pub struct ListOptions<'a> {
    pub max_width: usize,
    pub strip_ansi: bool,
    /// Applied to every cell before measuring
    pub substitute: Option<&'a dyn Substitute>,
}

impl<'a> ListOptions<'a> {
    pub fn new(max_width: usize) -> Self {
        Self {
            max_width,
            strip_ansi: false,
            substitute: None,
        }
    }

    pub fn stripped(mut self) -> Self {
        self.strip_ansi = true;
        self
    }

    pub fn with_substitute(mut self, substitute: &'a dyn Substitute) -> Self {
        self.substitute = Some(substitute);
        self
    }
}

/// A row after substitution and stripping; empty cells become `None`.
struct Cell {
    label: Option<String>,
    description: Option<String>,
}

/// Render rows as aligned text. Empty input yields an empty string.
pub fn render_list(rows: &[Row], options: &ListOptions<'_>) -> String {
    let cells = prepare(rows, options);
    if cells.is_empty() {
        return String::new();
    }

    match render_compact(&cells, options.max_width) {
        Some(output) => output,
        None => {
            debug!(
                rows = cells.len(),
                max_width = options.max_width,
                "description overflow, rendering list stacked"
            );
            render_stacked(&cells, options.max_width)
        }
    }
}

/// The layout [`render_list`] would pick for these rows.
pub fn choose_layout(rows: &[Row], options: &ListOptions<'_>) -> ListLayout {
    let cells = prepare(rows, options);
    if render_compact(&cells, options.max_width).is_some() {
        ListLayout::Compact
    } else {
        ListLayout::Stacked
    }
}

fn prepare(rows: &[Row], options: &ListOptions<'_>) -> Vec<Cell> {
    let clean = |value: &Option<String>| -> Option<String> {
        let value = value.as_deref()?;
        let value = match options.substitute {
            Some(substitute) => substitute.substitute(value),
            None => value.to_string(),
        };
        let value = if options.strip_ansi {
            strip_ansi(&value).into_owned()
        } else {
            value
        };
        if strip_ansi(&value).trim().is_empty() {
            None
        } else {
            Some(value)
        }
    };

    rows.iter()
        .map(|row| Cell {
            label: clean(&row.label).map(|label| label.trim_end().to_string()),
            description: clean(&row.description),
        })
        .filter(|cell| cell.label.is_some() || cell.description.is_some())
        .collect()
}

/// Compact pass; `None` when some row overflows.
fn render_compact(cells: &[Cell], max_width: usize) -> Option<String> {
    let label_width = cells
        .iter()
        .filter_map(|cell| cell.label.as_deref())
        .map(visible_width)
        .max()
        .unwrap_or(0);
    let column = label_width + COLUMN_GAP;
    let description_width = max_width.saturating_sub(column).max(1);

    let mut blocks = Vec::with_capacity(cells.len());
    let mut any_wrapped = false;

    for cell in cells {
        let label = cell.label.as_deref().unwrap_or("");
        let Some(description) = cell.description.as_deref() else {
            blocks.push(label.trim().to_string());
            continue;
        };

        let lines: Vec<String> = wrap_lines(description.trim(), description_width)
            .into_iter()
            .map(|line| line.trim().to_string())
            .collect();
        let (first, rest) = lines.split_first()?;
        if rest.len() > MAX_CONTINUATION_LINES {
            return None;
        }

        let mut block = pad_right(label, column);
        block.push_str(first);
        if !rest.is_empty() {
            any_wrapped = true;
            block.push('\n');
            block.push_str(&indent(&rest.join("\n"), column));
        }
        blocks.push(block.trim_end().to_string());
    }

    debug!(
        rows = cells.len(),
        label_width, any_wrapped, "rendering list compact"
    );
    let spacer = if any_wrapped { "\n\n" } else { "\n" };
    Some(blocks.join(spacer))
}

fn render_stacked(cells: &[Cell], max_width: usize) -> String {
    let description_width = max_width.saturating_sub(STACKED_INDENT).max(1);

    cells
        .iter()
        .map(|cell| {
            let mut parts = Vec::new();
            if let Some(label) = cell.label.as_deref() {
                parts.push(wrap_lines(label.trim(), max_width.max(1)).join("\n"));
            }
            if let Some(description) = cell.description.as_deref() {
                let wrapped = wrap_lines(description.trim(), description_width).join("\n");
                parts.push(indent(&wrapped, STACKED_INDENT));
            }
            parts.join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
