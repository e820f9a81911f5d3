//! Error types for configuration loading

use std::path::PathBuf;

/// Result type for configuration loading
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that abort a configuration load.
///
/// A missing file is never reported here; sources without a config file are
/// skipped by the loader.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file exists (or its location could not be probed) but reading it failed
    #[error("Failed reading config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML
    #[error("Invalid config syntax in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    /// Path of the source that failed.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Io { path, .. } | Self::Parse { path, .. } => path,
        }
    }
}
