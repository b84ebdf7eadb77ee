//! Output format routing logic.

use helpdoc_core::OutputFormat;

use crate::errors::CliError;

/// Which document format to produce and whether to strip styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    pub format: OutputFormat,
    pub strip_ansi: bool,
}

impl Presentation {
    /// Resolve the presentation from flags, config and color support.
    ///
    /// Routing rules:
    /// 1. `--format` overrides the config file
    /// 2. the config's `[ui] format` overrides the default
    /// 3. default to screen
    /// 4. markdown and man are never styled
    /// 5. screen is styled only when color is enabled
    pub fn resolve(
        format_flag: Option<OutputFormat>,
        config_format: Option<&str>,
        color: bool,
    ) -> Result<Self, CliError> {
        let format = match (format_flag, config_format) {
            (Some(format), _) => format,
            (None, Some(value)) => value
                .parse::<OutputFormat>()
                .map_err(|e| CliError::invalid_input(format!("Config [ui] format: {}", e)))?,
            (None, None) => OutputFormat::Screen,
        };
        let strip_ansi = !format.is_screen() || !color;
        Ok(Self { format, strip_ansi })
    }
}
