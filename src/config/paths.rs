//! Standard kuberlr.conf search locations

use std::path::{Path, PathBuf};

/// File name looked up inside every source directory.
pub const CONFIG_FILENAME: &str = "kuberlr.conf";

/// Location of the config file within a source directory.
pub fn config_file_in(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILENAME)
}

/// Candidate directories, least specific first:
/// distribution defaults, system administrator, then the user's `~/.kube`.
pub fn search_paths(home: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("/usr/etc"), PathBuf::from("/etc")];
    if let Some(home) = home {
        paths.push(home.join(".kube"));
    }
    paths
}

/// [`search_paths`] with the home directory taken from the environment.
pub fn default_search_paths() -> Vec<PathBuf> {
    search_paths(home_dir().as_deref())
}

pub fn home_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    let var = std::env::var_os("USERPROFILE");
    #[cfg(not(target_os = "windows"))]
    let var = std::env::var_os("HOME");

    var.filter(|v| !v.is_empty()).map(PathBuf::from)
}
