//! Viewer configuration types.
//!
//! `podview.toml` lives in `~/.config/podview/`. Every field has a default,
//! so a missing or partial file is always usable.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Canonical config file name.
pub const CONFIG_FILE_NAME: &str = "podview.toml";

/// Environment variable that overrides the log filter.
pub const LOG_ENV_VAR: &str = "PODVIEW_LOG";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ViewerConfig {
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub display: DisplaySettings,
    #[serde(default)]
    pub log: LogSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogSettings {
    /// Manifest (`.toml`) or combined document (`.json`).
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplaySettings {
    /// Tags shown per episode in the sidebar.
    #[serde(default = "default_tag_preview")]
    pub tag_preview: usize,
    /// Keywords shown under a structured summary.
    #[serde(default = "default_keyword_limit")]
    pub keyword_limit: usize,
    /// Sidebar width in columns.
    #[serde(default = "default_sidebar_width")]
    pub sidebar_width: u16,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            tag_preview: default_tag_preview(),
            keyword_limit: default_keyword_limit(),
            sidebar_width: default_sidebar_width(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogSettings {
    /// `tracing_subscriber::EnvFilter` directive.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file used while the TUI owns the terminal. Empty means
    /// `podview.log` next to the config file.
    #[serde(default)]
    pub file: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: String::new(),
        }
    }
}

fn default_catalog_path() -> String {
    "data/catalog.toml".to_string()
}
fn default_tag_preview() -> usize {
    2
}
fn default_keyword_limit() -> usize {
    7
}
fn default_sidebar_width() -> u16 {
    34
}
fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("could not determine home directory")]
    NoHome,
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// `~/.config/podview`.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_err(|_| ConfigError::NoHome)?;
    Ok(PathBuf::from(home).join(".config").join("podview"))
}

pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Read and parse a config file.
pub fn load_from(path: &Path) -> Result<ViewerConfig, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load `~/.config/podview/podview.toml`, falling back to defaults when it is
/// absent or unusable.
pub fn load_or_default() -> ViewerConfig {
    default_config_path()
        .ok()
        .filter(|path| path.exists())
        .and_then(|path| load_from(&path).ok())
        .unwrap_or_default()
}

impl ViewerConfig {
    /// Log file path: the configured one, else `podview.log` in the config dir.
    pub fn log_file(&self) -> Option<PathBuf> {
        if !self.log.file.trim().is_empty() {
            return Some(PathBuf::from(self.log.file.trim()));
        }
        config_dir().ok().map(|dir| dir.join("podview.log"))
    }
}
