//! Resolve Command Implementation

use anyhow::{bail, Context, Result};
use pwi_core::{resolve_metadata, CurseForgeClient, InstallerConfig, ModList};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Run the resolve command
pub async fn run(config_path: &Path, index: &Path, pack_folder: Option<PathBuf>) -> Result<()> {
    let config = InstallerConfig::load_or_default(config_path).with_env_overrides();
    let pack_folder = pack_folder.unwrap_or_else(|| PathBuf::from("."));

    let mut list = ModList::load(index)
        .with_context(|| format!("could not load mod list {}", index.display()))?;
    info!("Resolving {} entries from {}", list.mods.len(), index.display());

    if config.curseforge.api.api_key().is_none() {
        warn!("No CurseForge API key configured; auth errors from the primary API will fall back to the mirror");
    }

    let client = CurseForgeClient::from_config(&config.curseforge.api)?;
    let failures = resolve_metadata(&client, &mut list.mods, &pack_folder).await;

    for entry in list.mods.iter() {
        if let Some(url) = &entry.resolved_url {
            println!("{} -> {}", entry.name, url);
        }
    }

    if failures.is_empty() {
        return Ok(());
    }

    eprintln!();
    for failure in &failures {
        eprintln!("[{}] {}", failure.name, failure.kind);
    }

    bail!("{} problems found while resolving {} entries", failures.len(), list.mods.len())
}
