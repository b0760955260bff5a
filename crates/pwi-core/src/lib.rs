//! packwiz-installer Core Library
//!
//! This crate provides the core logic behind the packwiz-installer tools.
//! It includes:
//! - Application naming constants shared by every component
//! - Configuration of the CurseForge API endpoints
//! - Pack index entries
//! - CurseForge metadata resolution with mirror fallback

pub mod app_info;
pub mod config;
pub mod curseforge;
pub mod error;
pub mod index;

pub use config::InstallerConfig;
pub use curseforge::{resolve_metadata, CurseForgeClient, ResolveFailure};
pub use error::{InstallerError, Result};
pub use index::{IndexEntry, ModList};
