//! Path resolution for config and manifest files.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::config::{default_config_path, HelpdocConfig};
use crate::constants::env;
use crate::errors::CliError;

/// Resolve the config file path, checking HELPDOC_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var(env::CONFIG) {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the manifest path from CLI args (or HELPDOC_MANIFEST), then config.
pub fn resolve_manifest_path(cli: &Cli, config: &HelpdocConfig) -> anyhow::Result<PathBuf> {
    let path = cli
        .manifest
        .clone()
        .or_else(|| config.manifest.path.as_deref().map(PathBuf::from))
        .ok_or_else(|| CliError::not_found("No manifest given", missing_manifest_hint()))?;

    if !path.exists() {
        return Err(CliError::not_found(missing_manifest_message(&path), missing_manifest_hint()).into());
    }
    Ok(path)
}

/// Error message when the manifest file is missing.
pub fn missing_manifest_message(path: &Path) -> String {
    format!("No manifest found at {}", path.display())
}

fn missing_manifest_hint() -> String {
    "Hint: Pass --manifest <PATH>, set HELPDOC_MANIFEST, or add [manifest] path to the config file."
        .to_string()
}
