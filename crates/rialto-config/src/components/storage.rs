//! Relational store configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Database file, or `:memory:`
    pub path: PathBuf,
    pub wal_mode: bool,
    pub foreign_keys: bool,
    pub busy_timeout_ms: u32,
    pub cache_size: i32,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./rialto.db"),
            wal_mode: true,
            foreign_keys: true,
            busy_timeout_ms: 5000,
            cache_size: -64000,
        }
    }
}
