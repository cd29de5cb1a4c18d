//! ghlookup - Browse public user profiles and their follower graphs
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::eyre;
use tracing::info;

use ghlookup_app::config;

/// ghlookup - Browse public user profiles and their follower graphs
#[derive(Parser, Debug)]
#[command(name = "ghlookup")]
#[command(about = "Browse public user profiles and their follower graphs", long_about = None)]
struct Args {
    /// Username to look up on start
    #[arg(value_name = "USERNAME")]
    username: Option<String>,

    /// Directory API base URL (overrides the config file)
    #[arg(long, value_name = "URL")]
    api_base: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a commented default config file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    ghlookup_core::logging::init()?;

    if args.init_config {
        let path = args
            .config
            .or_else(config::default_config_path)
            .ok_or_else(|| eyre!("no config directory on this platform, pass --config PATH"))?;
        config::init_config_file(&path)?;
        eprintln!("Config written to {}", path.display());
        return Ok(());
    }

    let config_path = config::resolve_config_path(args.config)?;
    let mut settings = config::load_settings(&config_path);
    if let Some(api_base) = args.api_base {
        settings = settings.with_api_base(api_base);
        settings.validate()?;
    }
    info!("API base: {}", settings.api.base_url);

    let username = args.username.filter(|u| !u.trim().is_empty());
    if let Err(e) = ghlookup_tui::run(settings, username).await {
        if let Ok(dir) = ghlookup_core::logging::log_directory() {
            eprintln!("ghlookup failed; logs are in {}", dir.display());
        }
        return Err(e.into());
    }
    Ok(())
}
