//! Connection settings

use rialto_config::StorageConfig;
use std::path::{Path, PathBuf};

const MEMORY_PATH: &str = ":memory:";

#[derive(Debug, Clone)]
pub struct SqliteConfig {
    pub path: PathBuf,
    pub wal_mode: bool,
    pub foreign_keys: bool,
    pub busy_timeout_ms: u32,
    /// Negative values are KiB, positive values are pages
    pub cache_size: i32,
}

impl SqliteConfig {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            ..Self::from(&StorageConfig::default())
        }
    }

    /// In-memory database for tests
    pub fn memory() -> Self {
        Self {
            wal_mode: false,
            ..Self::new(MEMORY_PATH)
        }
    }

    pub fn is_memory(&self) -> bool {
        self.path.as_os_str() == MEMORY_PATH
    }
}

impl From<&StorageConfig> for SqliteConfig {
    fn from(storage: &StorageConfig) -> Self {
        Self {
            path: storage.path.clone(),
            wal_mode: storage.wal_mode,
            foreign_keys: storage.foreign_keys,
            busy_timeout_ms: storage.busy_timeout_ms,
            cache_size: storage.cache_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_config() {
        let config = SqliteConfig::memory();
        assert!(config.is_memory());
        assert!(!config.wal_mode);
        assert_eq!(config.busy_timeout_ms, 5000);
    }

    #[test]
    fn test_from_storage_config() {
        let storage = StorageConfig {
            path: PathBuf::from("/var/lib/rialto/derivatives.db"),
            busy_timeout_ms: 250,
            ..StorageConfig::default()
        };
        let config = SqliteConfig::from(&storage);

        assert_eq!(config.path, storage.path);
        assert_eq!(config.busy_timeout_ms, 250);
        assert!(!config.is_memory());
    }
}
