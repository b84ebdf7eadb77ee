//! Emphasis styles for screen output.
//!
//! A [`Theme`] is resolved once per render call and passed down explicitly, so
//! two renders with different settings never observe each other's styling.

use owo_colors::OwoColorize;

/// How "dim" text (argument and flag descriptions) is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DimStyle {
    /// SGR 2 (faint)
    #[default]
    Faint,
    /// Bright black, for terminals that render faint text unreadably
    Gray,
}

/// Emphasis configuration for a single render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Whether escape sequences are emitted at all
    pub color: bool,
    /// Style used for secondary text
    pub dim: DimStyle,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            color: true,
            dim: DimStyle::Faint,
        }
    }
}

impl Theme {
    /// Theme that never emits escape sequences.
    pub const fn plain() -> Self {
        Self {
            color: false,
            dim: DimStyle::Faint,
        }
    }

    pub fn with_dim(mut self, dim: DimStyle) -> Self {
        self.dim = dim;
        self
    }

    /// Section headings.
    pub fn bold(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// Free-form flag values.
    pub fn underline(&self, text: &str) -> String {
        if self.color {
            text.underline().to_string()
        } else {
            text.to_string()
        }
    }

    /// Descriptions in argument and option lists.
    pub fn dim(&self, text: &str) -> String {
        if !self.color || text.is_empty() {
            return text.to_string();
        }
        match self.dim {
            DimStyle::Faint => text.dimmed().to_string(),
            DimStyle::Gray => text.bright_black().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{strip_ansi, visible_width};

    #[test]
    fn test_plain_theme_is_identity() {
        let theme = Theme::plain();
        assert_eq!(theme.bold("USAGE"), "USAGE");
        assert_eq!(theme.underline("name"), "name");
        assert_eq!(theme.dim("forces"), "forces");
    }

    #[test]
    fn test_color_theme_emits_escapes() {
        let theme = Theme::default();
        let bold = theme.bold("USAGE");
        assert!(bold.contains('\x1b'));
        assert_eq!(strip_ansi(&bold), "USAGE");
        assert_eq!(visible_width(&theme.underline("name")), 4);
    }

    #[test]
    fn test_gray_dim_differs_from_faint() {
        let faint = Theme::default().dim("text");
        let gray = Theme::default().with_dim(DimStyle::Gray).dim("text");
        assert_ne!(faint, gray);
        assert_eq!(strip_ansi(&gray), "text");
    }

    #[test]
    fn test_dim_empty_stays_empty() {
        assert_eq!(Theme::default().dim(""), "");
    }
}
