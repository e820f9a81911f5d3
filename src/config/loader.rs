//! Layered config file loading

use super::merge::{merge_layers, Layer};
use super::merged::MergedConfig;
use super::paths::{config_file_in, default_search_paths};
use super::value::Value;
use crate::error::{ConfigError, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Loads `kuberlr.conf` from an ordered list of directories.
///
/// Directories are given least specific first; a key defined in a later
/// directory overrides the same key from an earlier one. Directories without a
/// config file (or that do not exist at all) contribute nothing.
#[derive(Debug, Clone, Default)]
pub struct ConfigResolver {
    paths: Vec<PathBuf>,
}

impl ConfigResolver {
    pub fn new<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self { paths: paths.into_iter().map(Into::into).collect() }
    }

    /// Resolver over `/usr/etc`, `/etc` and `~/.kube`.
    pub fn with_default_paths() -> Self {
        Self::new(default_search_paths())
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Read and merge every source. Any read or syntax error aborts the load.
    pub fn load(&self) -> Result<MergedConfig> {
        load_config(&self.paths)
    }
}

/// Load and merge the config file of each directory in `paths`, in order.
pub fn load_config<P: AsRef<Path>>(paths: &[P]) -> Result<MergedConfig> {
    let mut layers = Vec::with_capacity(paths.len());

    for dir in paths {
        let config_file = config_file_in(dir.as_ref());
        let Some(layer) = read_layer(&config_file)? else {
            continue;
        };
        tracing::debug!("Merging {} key(s) from {}", layer.len(), config_file.display());
        layers.push(layer);
    }

    Ok(MergedConfig::new(merge_layers(layers)))
}

/// Parse one config file. `Ok(None)` when the file does not exist.
pub fn read_layer(config_file: &Path) -> Result<Option<Layer>> {
    let content = match fs::read_to_string(config_file) {
        Ok(content) => content,
        Err(e) if is_absent(&e) => {
            tracing::debug!("No config file at {}", config_file.display());
            return Ok(None);
        }
        Err(source) => {
            return Err(ConfigError::Io { path: config_file.to_path_buf(), source });
        }
    };

    parse_layer(&content, config_file).map(Some)
}

/// Whether a read error means the source simply has no config file.
///
/// A missing file, a missing directory, or a path component that is a regular
/// file all count as absent. Anything else (permissions, a directory in place
/// of the file) is a real I/O failure.
pub fn is_absent(err: &io::Error) -> bool {
    matches!(err.kind(), io::ErrorKind::NotFound | io::ErrorKind::NotADirectory)
}

fn parse_layer(content: &str, config_file: &Path) -> Result<Layer> {
    let table: toml::Table = toml::from_str(content)
        .map_err(|source| ConfigError::Parse { path: config_file.to_path_buf(), source })?;

    let mut layer = Layer::new();
    for (key, raw) in table {
        match Value::from_toml(raw) {
            Some(value) => {
                layer.insert(key, value);
            }
            None => {
                tracing::warn!(
                    "Ignoring non-scalar value for '{}' in {}",
                    key,
                    config_file.display()
                );
            }
        }
    }
    Ok(layer)
}
