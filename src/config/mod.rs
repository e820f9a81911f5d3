//! Layered configuration loading
//!
//! Reads `kuberlr.conf` from an ordered list of directories and merges them
//! key by key, later (more specific) directories overriding earlier ones.

pub mod loader;
pub mod merge;
pub mod merged;
pub mod paths;
pub mod settings;
pub mod value;

pub use loader::{load_config, ConfigResolver};
pub use merged::MergedConfig;
pub use paths::{default_search_paths, search_paths, CONFIG_FILENAME};
pub use settings::Settings;
pub use value::Value;
