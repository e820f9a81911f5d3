//! kuberlr-config: layered `kuberlr.conf` loading
//!
//! Configuration files found in system, distribution and user directories are
//! merged key by key, with the most specific directory winning.

pub mod config;
pub mod error;

pub use config::{load_config, ConfigResolver, MergedConfig, Settings, Value};
pub use error::{ConfigError, Result};
