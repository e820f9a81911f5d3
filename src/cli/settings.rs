//! Settings command implementation

use anyhow::Result;
use clap::Args;
use kuberlr_config::Settings;

use super::utils::SourceArgs;

#[derive(Args)]
pub struct SettingsArgs {
    #[command(flatten)]
    pub sources: SourceArgs,

    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: SettingsArgs) -> Result<()> {
    let config = args.sources.load()?;
    let settings = Settings::from_config(&config);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&settings)?);
        return Ok(());
    }

    println!("AllowDownload: {}", settings.allow_download);
    println!("SystemPath: {}", settings.system_path.as_deref().unwrap_or("(unset)"));
    println!("Timeout: {}s", settings.timeout);
    println!("KubeMirrorUrl: {}", settings.kube_mirror_url);
    Ok(())
}
