//! Info Command Implementation

use anyhow::Result;
use pwi_core::{app_info, InstallerConfig};
use std::path::Path;

/// Run the info command
pub fn run(config_path: &Path) -> Result<()> {
    let config = InstallerConfig::load_or_default(config_path).with_env_overrides();
    let api = &config.curseforge.api;

    println!();
    println!("{}", app_info::DISPLAY_NAME);
    println!("{}", "=".repeat(app_info::DISPLAY_NAME.len()));
    println!("Bootstrap:     {}", app_info::BOOTSTRAP_DISPLAY_NAME);
    println!("Config file:   {}", config_path.display());
    println!(
        "API key:       {}",
        if api.api_key().is_some() { "configured" } else { "not set" }
    );
    println!("CurseForge API endpoints (in order):");
    for (i, url) in api.api_urls().iter().enumerate() {
        println!("  {}. {}", i + 1, url);
    }
    println!();

    Ok(())
}
