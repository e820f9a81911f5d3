//! kuberlr-config: inspect the effective kuberlr configuration
//!
//! Loads `kuberlr.conf` from the system, distribution and user directories and
//! shows how they merge.

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
