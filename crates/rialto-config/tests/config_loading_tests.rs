//! Loading configuration files from disk.

use rialto_config::{ConfigError, DerivativesConfig};
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_reads_file_and_keeps_defaults() {
    let file = write_config(
        r#"
[storage]
path = "/var/lib/rialto/derivatives.db"

[pipeline]
skip_relationships = true
"#,
    );

    let config = DerivativesConfig::load(file.path()).unwrap();
    assert_eq!(config.storage.path, PathBuf::from("/var/lib/rialto/derivatives.db"));
    assert!(config.storage.wal_mode);
    assert!(config.pipeline.skip_relationships);
    assert!(!config.pipeline.skip_enrichment);
    assert_eq!(config.pipeline.channel_capacity, 4);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    match DerivativesConfig::load(&path) {
        Err(ConfigError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn test_load_rejects_malformed_toml() {
    let file = write_config("[storage\npath = ");
    assert!(matches!(
        DerivativesConfig::load(file.path()),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_load_rejects_zero_capacity() {
    let file = write_config("[pipeline]\nchannel_capacity = 0\n");
    assert!(matches!(
        DerivativesConfig::load(file.path()),
        Err(ConfigError::Invalid(_))
    ));
}
