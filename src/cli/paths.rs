//! Paths command implementation

use anyhow::Result;
use clap::Args;
use kuberlr_config::config::loader::is_absent;
use kuberlr_config::config::paths::config_file_in;
use std::fs;
use std::path::Path;

use super::utils::SourceArgs;

#[derive(Args)]
pub struct PathsArgs {
    #[command(flatten)]
    pub sources: SourceArgs,
}

pub fn run(args: PathsArgs) -> Result<()> {
    let resolver = args.sources.resolver();

    // Highest precedence last, matching load order.
    for dir in resolver.paths() {
        let file = config_file_in(dir);
        println!("{:<8}{}", source_status(&file), file.display());
    }
    Ok(())
}

/// `found`, `missing`, or `error` when loading this source would fail to read it.
fn source_status(file: &Path) -> &'static str {
    match fs::metadata(file) {
        Ok(meta) if meta.is_file() => "found",
        Ok(_) => "error",
        Err(e) if is_absent(&e) => "missing",
        Err(_) => "error",
    }
}
