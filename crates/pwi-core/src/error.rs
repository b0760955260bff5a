//! Error types for packwiz-installer
//!
//! Provides a unified error handling strategy using thiserror.

use thiserror::Error;

/// Result type alias for installer operations
pub type Result<T> = std::result::Result<T, InstallerError>;

/// Unified error type for all installer operations
#[derive(Error, Debug)]
pub enum InstallerError {
    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Configuration file already exists: {0}")]
    ConfigExists(String),

    // ─────────────────────────────────────────────────────────────
    // HTTP / API Errors
    // ─────────────────────────────────────────────────────────────
    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("Failed to resolve CurseForge metadata for {operation}: error code {status}")]
    ApiStatus { operation: String, status: u16 },

    #[error(
        "Failed to resolve CurseForge metadata for {operation}: all endpoints failed. Last error: {last_error}"
    )]
    AllEndpointsFailed { operation: String, last_error: String },

    // ─────────────────────────────────────────────────────────────
    // Index Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read mod list: {0}")]
    IndexError(String),

    // ─────────────────────────────────────────────────────────────
    // IO Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for InstallerError {
    fn from(err: serde_json::Error) -> Self {
        InstallerError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for InstallerError {
    fn from(err: toml::de::Error) -> Self {
        InstallerError::ConfigError(err.to_string())
    }
}

impl From<toml::ser::Error> for InstallerError {
    fn from(err: toml::ser::Error) -> Self {
        InstallerError::Serialization(err.to_string())
    }
}

impl From<reqwest::Error> for InstallerError {
    fn from(err: reqwest::Error) -> Self {
        InstallerError::Http(err.to_string())
    }
}
