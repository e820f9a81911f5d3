//! kuberlr settings resolved from the merged configuration

use super::merged::MergedConfig;
use serde::Serialize;

pub const DEFAULT_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_KUBE_MIRROR_URL: &str = "https://dl.k8s.io";

/// Typed settings consumed by kuberlr.
///
/// Unlike [`MergedConfig`]'s getters, a key that is unset or has the wrong
/// type falls back to the kuberlr default rather than the zero value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    /// Whether missing kubectl versions may be downloaded
    pub allow_download: bool,
    /// kubectl binary shipped by the system, if configured
    pub system_path: Option<String>,
    /// Timeout in seconds for API server version discovery
    pub timeout: u64,
    pub kube_mirror_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            allow_download: true,
            system_path: None,
            timeout: DEFAULT_TIMEOUT_SECS,
            kube_mirror_url: DEFAULT_KUBE_MIRROR_URL.to_string(),
        }
    }
}

impl Settings {
    pub fn from_config(config: &MergedConfig) -> Self {
        let defaults = Self::default();

        let timeout = match config.int_value("Timeout") {
            Some(t) if t >= 0 => t as u64,
            Some(t) => {
                tracing::warn!("Ignoring negative Timeout {}, using {}", t, defaults.timeout);
                defaults.timeout
            }
            None => defaults.timeout,
        };

        Self {
            allow_download: config.bool_value("AllowDownload").unwrap_or(defaults.allow_download),
            system_path: config
                .str_value("SystemPath")
                .filter(|p| !p.is_empty())
                .map(str::to_string),
            timeout,
            kube_mirror_url: config
                .str_value("KubeMirrorUrl")
                .map(str::to_string)
                .unwrap_or(defaults.kube_mirror_url),
        }
    }
}

impl From<&MergedConfig> for Settings {
    fn from(config: &MergedConfig) -> Self {
        Self::from_config(config)
    }
}
