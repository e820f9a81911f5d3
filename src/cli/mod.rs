//! Command-line interface for kuberlr-config
//!
//! Provides `show`, `get`, `settings` and `paths` subcommands.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod get;
mod paths;
mod settings;
mod show;
mod utils;

/// Inspect layered kuberlr configuration
#[derive(Parser)]
#[command(name = "kuberlr-config")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the merged configuration
    Show(show::ShowArgs),

    /// Print a single configuration value
    Get(get::GetArgs),

    /// Print the effective kuberlr settings, defaults applied
    Settings(settings::SettingsArgs),

    /// List candidate config files in precedence order
    Paths(paths::PathsArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; otherwise --verbose selects DEBUG.
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::builder().with_default_directive(level.into()).from_env_lossy();
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Show(args) => show::run(args),
        Commands::Get(args) => get::run(args),
        Commands::Settings(args) => settings::run(args),
        Commands::Paths(args) => paths::run(args),
    }
}
