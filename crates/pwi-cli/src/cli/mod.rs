//! CLI Command Definitions
//!
//! Defines the command-line interface using clap.

pub mod info;
pub mod init_config;
pub mod resolve;

use clap::{Parser, Subcommand};
use pwi_core::InstallerConfig;
use std::path::PathBuf;

/// packwiz-installer - modpack installer tools
///
/// Resolves CurseForge downloads for a pack, with automatic fallback to a
/// mirror API when the primary endpoint is unavailable.
#[derive(Parser, Debug)]
#[command(name = "packwiz-installer")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (defaults to the user config directory)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(InstallerConfig::default_config_path)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show application information
    ///
    /// Displays the product names, configuration path and API endpoints.
    #[command(visible_alias = "i")]
    Info,

    /// Resolve CurseForge download URLs for a mod list
    #[command(visible_alias = "r")]
    Resolve {
        /// TOML file of [[mod]] entries
        #[arg(value_name = "INDEX")]
        index: PathBuf,

        /// Folder the pack is installed into (defaults to the current directory)
        #[arg(short, long, value_name = "DIR")]
        pack_folder: Option<PathBuf>,
    },

    /// Write the default configuration file
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
