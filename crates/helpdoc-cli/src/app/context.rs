//! Application context for the Helpdoc CLI.
//!
//! Provides a unified context that combines CLI arguments with the
//! lazily-loaded config file, manifest registry and terminal context.

use once_cell::unsync::OnceCell;
use tracing::debug;

use helpdoc_core::{OutputFormat, Registry, RenderOptions};

use crate::cli::Cli;
use crate::config::{load_config, HelpdocConfig};
use crate::errors::CliError;
use crate::manifest::read_manifest;
use crate::ui::{Presentation, UiContext};

use super::resolver::{resolve_config_path, resolve_manifest_path};

/// Application context that bundles CLI args with loaded state.
///
/// This avoids repeatedly loading config and threading multiple parameters
/// through handler functions.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<HelpdocConfig>,
    registry: OnceCell<Registry>,
    ui: OnceCell<UiContext>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
            registry: OnceCell::new(),
            ui: OnceCell::new(),
        }
    }

    /// Get the config file contents, loading them lazily if needed.
    pub fn config(&self) -> anyhow::Result<&HelpdocConfig> {
        self.config.get_or_try_init(|| {
            let path = resolve_config_path()?;
            debug!(path = %path.display(), "loading config");
            load_config(&path)
        })
    }

    /// Get the manifest's registry, loading it lazily if needed.
    pub fn registry(&self) -> anyhow::Result<&Registry> {
        self.registry.get_or_try_init(|| {
            let path = resolve_manifest_path(self.cli, self.config()?)?;
            debug!(path = %path.display(), "loading manifest");
            let manifest = read_manifest(&path)?;
            let registry = manifest
                .into_registry()
                .map_err(|e| CliError::invalid_input(format!("{}: {}", path.display(), e)))?;
            Ok(registry)
        })
    }

    pub fn ui(&self) -> anyhow::Result<&UiContext> {
        self.ui.get_or_try_init(|| {
            let config = self.config()?;
            Ok(UiContext::from_env(
                self.cli.no_color,
                self.cli.width,
                &config.ui,
            ))
        })
    }

    /// Render options for one help invocation.
    pub fn render_options(
        &self,
        all: bool,
        format_flag: Option<OutputFormat>,
    ) -> anyhow::Result<RenderOptions> {
        let ui = self.ui()?;
        let presentation =
            Presentation::resolve(format_flag, self.config()?.ui.format.as_deref(), ui.color)?;
        debug!(
            is_tty = ui.is_tty,
            width = ui.width,
            format = %presentation.format,
            strip_ansi = presentation.strip_ansi,
            all,
            "resolved render options"
        );
        Ok(RenderOptions {
            max_width: ui.width,
            strip_ansi: presentation.strip_ansi,
            format: presentation.format,
            all,
            dim: ui.dim,
        })
    }
}
