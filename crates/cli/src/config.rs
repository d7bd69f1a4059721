use anyhow::{Context, Result};
use podview_core::Catalog;
use podview_runtime_config::{self as runtime_config, ViewerConfig};
use std::path::{Path, PathBuf};

/// Config file plus command-line overrides.
#[derive(Debug, Clone)]
pub struct Settings {
    pub config: ViewerConfig,
    pub catalog_path: PathBuf,
}

/// An explicit `--config` must load; the default location silently falls
/// back to defaults.
pub fn resolve(config_path: Option<&Path>, catalog: Option<PathBuf>) -> Result<Settings> {
    let config = match config_path {
        Some(path) => runtime_config::load_from(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => runtime_config::load_or_default(),
    };
    let catalog_path = catalog.unwrap_or_else(|| PathBuf::from(&config.catalog.path));
    Ok(Settings {
        config,
        catalog_path,
    })
}

impl Settings {
    pub fn load_catalog(&self) -> Result<Catalog> {
        podview_core::load::load_catalog(&self.catalog_path)
            .with_context(|| format!("loading catalog {}", self.catalog_path.display()))
    }
}
