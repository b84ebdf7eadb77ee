use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct HelpdocConfig {
    #[serde(default)]
    pub manifest: ManifestSection,
    #[serde(default)]
    pub ui: UiSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ManifestSection {
    pub path: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UiSection {
    /// Fixed render width, ignoring the terminal
    pub width: Option<usize>,
    /// screen, markdown or man
    pub format: Option<String>,
    pub color: Option<bool>,
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn read_config(path: &Path) -> anyhow::Result<HelpdocConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

/// Read the config at `path`, or the defaults when the file does not exist.
pub fn load_config(path: &Path) -> anyhow::Result<HelpdocConfig> {
    if !path.exists() {
        return Ok(HelpdocConfig::default());
    }
    read_config(path)
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("helpdoc"));
        }
    }
    Ok(home_dir()?.join(".config").join("helpdoc"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("config.toml")).unwrap();
        assert!(config.manifest.path.is_none());
        assert!(config.ui.width.is_none());
    }

    #[test]
    fn test_read_partial_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui]\nwidth = 100\ncolor = false\n").unwrap();
        let config = read_config(&path).unwrap();
        assert_eq!(config.ui.width, Some(100));
        assert_eq!(config.ui.color, Some(false));
        assert!(config.manifest.path.is_none());
    }

    #[test]
    fn test_parse_error_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui\nwidth = ").unwrap();
        let err = read_config(&path).unwrap_err().to_string();
        assert!(err.starts_with("Failed to parse config"));
        assert!(err.contains("config.toml"));
    }
}
