//! Get command implementation

use anyhow::Result;
use clap::{Args, ValueEnum};

use super::utils::SourceArgs;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ValueKind {
    Bool,
    Int,
    String,
}

#[derive(Args)]
pub struct GetArgs {
    /// Key to look up (case-sensitive)
    #[arg(value_name = "KEY")]
    pub key: String,

    #[command(flatten)]
    pub sources: SourceArgs,

    /// Read the value as this type; unset or mismatched keys print the zero value
    #[arg(long = "as", value_enum, value_name = "TYPE")]
    pub kind: Option<ValueKind>,
}

pub fn run(args: GetArgs) -> Result<()> {
    let config = args.sources.load()?;

    match args.kind {
        Some(ValueKind::Bool) => println!("{}", config.get_bool(&args.key)),
        Some(ValueKind::Int) => println!("{}", config.get_int64(&args.key)),
        Some(ValueKind::String) => println!("{}", config.get_string(&args.key)),
        None => match config.get(&args.key) {
            Some(value) => println!("{}", value),
            None => anyhow::bail!("Key not set: {}", args.key),
        },
    }
    Ok(())
}
