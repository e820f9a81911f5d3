//! Shared CLI utilities.

use anyhow::{Context, Result};
use clap::Args;
use kuberlr_config::{ConfigResolver, MergedConfig};
use std::path::PathBuf;

/// Source directory selection shared by every subcommand.
#[derive(Args, Debug, Default)]
pub struct SourceArgs {
    /// Config directory to read, least specific first (repeatable).
    /// Defaults to /usr/etc, /etc and ~/.kube
    #[arg(short = 'd', long = "dir", value_name = "DIR")]
    pub dirs: Vec<PathBuf>,
}

impl SourceArgs {
    pub fn resolver(&self) -> ConfigResolver {
        if self.dirs.is_empty() {
            ConfigResolver::with_default_paths()
        } else {
            ConfigResolver::new(self.dirs.iter().cloned())
        }
    }

    pub fn load(&self) -> Result<MergedConfig> {
        self.resolver().load().context("Failed to load kuberlr configuration")
    }
}
