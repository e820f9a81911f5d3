//! Show command implementation

use anyhow::Result;
use clap::Args;

use super::utils::SourceArgs;

#[derive(Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub sources: SourceArgs,

    /// Print as a JSON object instead of `key = value` lines
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ShowArgs) -> Result<()> {
    let config = args.sources.load()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    for (key, value) in config.iter() {
        println!("{} = {}", key, value);
    }
    Ok(())
}
