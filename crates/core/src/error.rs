use std::path::PathBuf;

/// Errors that prevent a catalog from being loaded at all.
///
/// Problems with individual assets (a missing transcript, an unreadable
/// summary file) are not errors; the loader logs them and carries on.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid manifest {}: {source}", path.display())]
    Manifest {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid catalog document {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}
