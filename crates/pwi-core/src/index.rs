//! Pack index entries
//!
//! A mod list is a TOML file of `[[mod]]` tables, each naming a file in the
//! pack and, optionally, the CurseForge file it comes from:
//!
//! ```toml
//! [[mod]]
//! name = "Just Enough Items"
//! dest = "mods/jei.jar"
//!
//! [mod.update.curseforge]
//! file-id = 4712866
//! project-id = 238222
//! ```

use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{InstallerError, Result};

/// CurseForge identifiers of a pack file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CurseForgeUpdateData {
    pub file_id: u32,
    pub project_id: u32,
}

/// Update sources of a pack file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateSections {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curseforge: Option<CurseForgeUpdateData>,
}

/// A single file of the pack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    /// Human-readable name
    pub name: String,

    /// Destination, relative to the pack folder
    pub dest: PathBuf,

    #[serde(default)]
    pub update: UpdateSections,

    /// Download URL filled in by metadata resolution
    #[serde(skip)]
    pub resolved_url: Option<Url>,
}

impl IndexEntry {
    pub fn new(name: impl Into<String>, dest: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            dest: dest.into(),
            update: UpdateSections::default(),
            resolved_url: None,
        }
    }

    /// Builder pattern: attach a CurseForge update section
    pub fn with_curseforge(mut self, file_id: u32, project_id: u32) -> Self {
        self.update.curseforge = Some(CurseForgeUpdateData { file_id, project_id });
        self
    }

    pub fn curseforge(&self) -> Option<&CurseForgeUpdateData> {
        self.update.curseforge.as_ref()
    }
}

/// A list of pack files
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModList {
    #[serde(rename = "mod", default)]
    pub mods: Vec<IndexEntry>,
}

impl ModList {
    /// Loads a mod list from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| InstallerError::IndexError(e.to_string()))
    }
}
