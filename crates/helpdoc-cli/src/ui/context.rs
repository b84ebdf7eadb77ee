//! UI context for environment detection and configuration.

use std::io::IsTerminal;

use helpdoc_core::DimStyle;

use crate::config::UiSection;
use crate::constants::{env, DEFAULT_WIDTH, MIN_WIDTH};

/// Terminal and environment context for UI decisions.
///
/// Resolved once per invocation; the width never changes mid-render.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Whether stdout is a TTY
    pub is_tty: bool,
    /// Whether color output is enabled
    pub color: bool,
    /// Render width (columns)
    pub width: usize,
    /// How secondary text is dimmed
    pub dim: DimStyle,
}

impl UiContext {
    /// Create context from environment, CLI flags and the `[ui]` config.
    ///
    /// # Arguments
    /// * `no_color_flag` - Whether `--no-color` was passed
    /// * `width_flag` - Value of `--width` if provided
    /// * `ui` - The config file's `[ui]` section
    pub fn from_env(no_color_flag: bool, width_flag: Option<usize>, ui: &UiSection) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
        let no_color_env = std::env::var("NO_COLOR").is_ok();
        let config_color = ui.color.unwrap_or(true);

        // Resolve color: disabled if NO_COLOR env, --no-color flag, TERM=dumb or config
        let color = is_tty && !no_color_flag && !no_color_env && !term_is_dumb && config_color;

        let width = resolve_width(width_flag, columns_env(), ui.width, terminal_width());

        let dim = match std::env::var(env::CONEMU_ANSI) {
            Ok(value) if value == "ON" => DimStyle::Gray,
            _ => DimStyle::Faint,
        };

        Self {
            is_tty,
            color,
            width,
            dim,
        }
    }
}

/// Flag, then `COLUMNS`, then config, then the terminal, then 80; never
/// below the minimum.
pub fn resolve_width(
    flag: Option<usize>,
    columns: Option<usize>,
    config: Option<usize>,
    terminal: Option<usize>,
) -> usize {
    flag.or(columns)
        .or(config)
        .or(terminal)
        .filter(|width| *width > 0)
        .unwrap_or(DEFAULT_WIDTH)
        .max(MIN_WIDTH)
}

fn columns_env() -> Option<usize> {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|cols| cols.trim().parse::<usize>().ok())
        .filter(|width| *width > 0)
}

/// Width of the terminal attached to stdout.
fn terminal_width() -> Option<usize> {
    #[cfg(unix)]
    {
        use std::mem::MaybeUninit;

        let mut winsize = MaybeUninit::<libc::winsize>::uninit();
        // SAFETY: ioctl with TIOCGWINSZ only writes into winsize
        let result =
            unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, winsize.as_mut_ptr()) };
        if result == 0 {
            let ws = unsafe { winsize.assume_init() };
            if ws.ws_col > 0 {
                return Some(ws.ws_col as usize);
            }
        }
    }

    None
}
