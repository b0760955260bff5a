//! Configuration management for packwiz-installer
//!
//! Handles loading and saving of the installer configuration, currently the
//! CurseForge API endpoints (primary plus mirror) and the optional API key.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::app_info;
use crate::error::{InstallerError, Result};

/// Default primary CurseForge API base URL
pub const DEFAULT_PRIMARY_API: &str = "https://api.curseforge.com/v1";

/// Default mirror CurseForge API base URL
pub const DEFAULT_MIRROR_API: &str = "https://mod.mcimirror.top/curseforge/v1";

/// Environment variable overriding the primary endpoint
pub const ENV_PRIMARY_API: &str = "CURSEFORGE_API_PRIMARY";

/// Environment variable overriding the mirror endpoint
pub const ENV_MIRROR_API: &str = "CURSEFORGE_API_MIRROR";

/// Environment variable providing the API key
pub const ENV_API_KEY: &str = "CURSEFORGE_API_KEY";

/// Main configuration for packwiz-installer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallerConfig {
    /// CurseForge settings
    pub curseforge: CurseForgeConfig,
}

/// CurseForge section of the configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurseForgeConfig {
    /// API endpoints and credentials
    pub api: CurseForgeApiConfig,
}

/// `[curseforge.api]` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurseForgeApiConfig {
    /// Preferred API base URL
    pub primary: String,

    /// Fallback API base URL, tried when the primary is unavailable
    pub mirror: String,

    /// Value sent as `X-API-Key`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl Default for CurseForgeApiConfig {
    fn default() -> Self {
        Self {
            primary: DEFAULT_PRIMARY_API.to_string(),
            mirror: DEFAULT_MIRROR_API.to_string(),
            key: None,
        }
    }
}

impl InstallerConfig {
    /// Creates a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Loads configuration from a file, falling back to defaults when the
    /// file is missing or unreadable.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            warn!("Configuration file {} not found, using defaults", path.display());
            return Self::default();
        }

        match Self::load(path) {
            Ok(config) => {
                info!("Loaded configuration from {}", path.display());
                config
            }
            Err(e) => {
                warn!("Failed to load configuration from {}, using defaults: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Saves configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Writes the default configuration, refusing to replace an existing
    /// file unless `force` is set.
    pub fn write_default(path: &Path, force: bool) -> Result<Self> {
        if path.exists() && !force {
            return Err(InstallerError::ConfigExists(path.display().to_string()));
        }
        let config = Self::default();
        config.save(path)?;
        Ok(config)
    }

    /// Returns the default configuration directory
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(app_info::NAME)
    }

    /// Returns the default configuration file path
    pub fn default_config_path() -> PathBuf {
        Self::default_config_dir().join("config.toml")
    }

    /// Applies overrides from the process environment
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from an arbitrary variable lookup. Empty values are
    /// ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(primary) = lookup(ENV_PRIMARY_API) {
            self.curseforge.api.primary = primary;
        }
        if let Some(mirror) = lookup(ENV_MIRROR_API) {
            self.curseforge.api.mirror = mirror;
        }
        if let Some(key) = lookup(ENV_API_KEY) {
            self.curseforge.api.key = Some(key);
        }
        self
    }

    /// Builder pattern: set primary endpoint
    pub fn with_primary_api(mut self, url: impl Into<String>) -> Self {
        self.curseforge.api.primary = url.into();
        self
    }

    /// Builder pattern: set mirror endpoint
    pub fn with_mirror_api(mut self, url: impl Into<String>) -> Self {
        self.curseforge.api.mirror = url.into();
        self
    }

    /// Builder pattern: set API key
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.curseforge.api.key = Some(key.into());
        self
    }
}

impl CurseForgeApiConfig {
    /// Primary API base URL without trailing slash
    pub fn primary_api_url(&self) -> &str {
        self.primary.trim_end_matches('/')
    }

    /// Mirror API base URL without trailing slash
    pub fn mirror_api_url(&self) -> &str {
        self.mirror.trim_end_matches('/')
    }

    /// All API base URLs in order of preference (primary first, then mirror).
    /// Blank entries are skipped.
    pub fn api_urls(&self) -> Vec<String> {
        [self.primary_api_url(), self.mirror_api_url()]
            .into_iter()
            .filter(|url| !url.trim().is_empty())
            .map(str::to_string)
            .collect()
    }

    /// API key, if one is configured and non-blank
    pub fn api_key(&self) -> Option<&str> {
        self.key.as_deref().filter(|k| !k.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = InstallerConfig::default();
        assert_eq!(config.curseforge.api.primary_api_url(), DEFAULT_PRIMARY_API);
        assert_eq!(config.curseforge.api.mirror_api_url(), DEFAULT_MIRROR_API);
        assert!(config.curseforge.api.api_key().is_none());
    }

    #[test]
    fn test_trailing_slashes_trimmed() {
        let config = InstallerConfig::new()
            .with_primary_api("https://example.com/v1//")
            .with_mirror_api("https://mirror.example.com/cf/v1/");

        assert_eq!(
            config.curseforge.api.api_urls(),
            vec![
                "https://example.com/v1".to_string(),
                "https://mirror.example.com/cf/v1".to_string(),
            ]
        );
    }

    #[test]
    fn test_blank_mirror_dropped() {
        let config = InstallerConfig::new().with_mirror_api("");
        assert_eq!(config.curseforge.api.api_urls(), vec![DEFAULT_PRIMARY_API.to_string()]);
    }

    #[test]
    fn test_overrides() {
        let config = InstallerConfig::new().with_overrides(|key| match key {
            ENV_API_KEY => Some("secret".to_string()),
            ENV_MIRROR_API => Some("   ".to_string()),
            _ => None,
        });

        assert_eq!(config.curseforge.api.api_key(), Some("secret"));
        assert_eq!(config.curseforge.api.mirror_api_url(), DEFAULT_MIRROR_API);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: InstallerConfig = toml::from_str(
            r#"
            [curseforge.api]
            mirror = "https://mirror.example.com/"
            "#,
        )
        .unwrap();

        assert_eq!(config.curseforge.api.primary_api_url(), DEFAULT_PRIMARY_API);
        assert_eq!(config.curseforge.api.mirror_api_url(), "https://mirror.example.com");
    }

    #[test]
    fn test_default_config_dir_uses_app_name() {
        assert!(InstallerConfig::default_config_dir().ends_with(app_info::NAME));
    }
}
