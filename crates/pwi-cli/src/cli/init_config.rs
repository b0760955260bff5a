//! Init-Config Command Implementation

use anyhow::{Context, Result};
use pwi_core::InstallerConfig;
use std::path::Path;
use tracing::info;

/// Run the init-config command
pub fn run(config_path: &Path, force: bool) -> Result<()> {
    InstallerConfig::write_default(config_path, force)
        .with_context(|| format!("could not write {}", config_path.display()))?;

    info!("Wrote default configuration to {}", config_path.display());
    Ok(())
}
