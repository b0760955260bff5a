//! Configuration File Test
//!
//! Verifies loading, saving and fallback behaviour of the config file.

use pwi_core::config::{DEFAULT_MIRROR_API, DEFAULT_PRIMARY_API};
use pwi_core::{InstallerConfig, InstallerError};

#[test]
fn test_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let config = InstallerConfig::new()
        .with_primary_api("https://cf.example.com/v1/")
        .with_api_key("abc123");
    config.save(&path).unwrap();

    let loaded = InstallerConfig::load(&path).unwrap();
    assert_eq!(loaded, config);
    assert_eq!(loaded.curseforge.api.primary_api_url(), "https://cf.example.com/v1");
    assert_eq!(loaded.curseforge.api.api_key(), Some("abc123"));
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = InstallerConfig::load_or_default(&dir.path().join("absent.toml"));

    assert_eq!(
        config.curseforge.api.api_urls(),
        vec![DEFAULT_PRIMARY_API.to_string(), DEFAULT_MIRROR_API.to_string()]
    );
}

#[test]
fn test_invalid_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[curseforge.api\nprimary = ").unwrap();

    assert!(matches!(
        InstallerConfig::load(&path),
        Err(InstallerError::ConfigError(_))
    ));
    assert_eq!(InstallerConfig::load_or_default(&path), InstallerConfig::default());
}

#[test]
fn test_write_default_refuses_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    InstallerConfig::write_default(&path, false).unwrap();
    assert!(matches!(
        InstallerConfig::write_default(&path, false),
        Err(InstallerError::ConfigExists(_))
    ));
    assert!(InstallerConfig::write_default(&path, true).is_ok());
}
