//! Shared handle to the derivatives database
//!
//! Every writer clone goes through the same connection. Opening a pool
//! applies the configured pragmas and runs pending migrations before the
//! handle is returned.

use crate::config::SqliteConfig;
use crate::error::{SqliteError, SqliteResult};
use crate::schema;
use parking_lot::Mutex;
use rusqlite::Connection;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Clone)]
pub struct SqlitePool {
    conn: Arc<Mutex<Connection>>,
}

impl SqlitePool {
    pub fn new(config: SqliteConfig) -> SqliteResult<Self> {
        info!(path = ?config.path, wal = config.wal_mode, "Opening derivatives database");

        let conn = open(&config)?;
        conn.execute_batch(&pragma_batch(&config))?;
        schema::apply_migrations(&conn)?;
        debug!("Derivatives schema is current");

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn memory() -> SqliteResult<Self> {
        Self::new(SqliteConfig::memory())
    }

    pub fn with_connection<F, T>(&self, f: F) -> SqliteResult<T>
    where
        F: FnOnce(&Connection) -> SqliteResult<T>,
    {
        f(&self.conn.lock())
    }

    /// Mutable access, for transactions
    pub fn with_connection_mut<F, T>(&self, f: F) -> SqliteResult<T>
    where
        F: FnOnce(&mut Connection) -> SqliteResult<T>,
    {
        f(&mut self.conn.lock())
    }
}

fn open(config: &SqliteConfig) -> SqliteResult<Connection> {
    if config.is_memory() {
        return Ok(Connection::open_in_memory()?);
    }

    let path = &config.path;
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|e| {
            SqliteError::Connection(format!("cannot create {}: {e}", dir.display()))
        })?;
    }
    Connection::open(path).map_err(|e| SqliteError::Connection(format!("{}: {e}", path.display())))
}

fn pragma_batch(config: &SqliteConfig) -> String {
    let mut statements = Vec::new();
    if config.wal_mode {
        statements.push("PRAGMA journal_mode = WAL;".to_string());
        statements.push("PRAGMA synchronous = NORMAL;".to_string());
    }
    if config.foreign_keys {
        statements.push("PRAGMA foreign_keys = ON;".to_string());
    }
    statements.push(format!("PRAGMA busy_timeout = {};", config.busy_timeout_ms));
    statements.push(format!("PRAGMA cache_size = {};", config.cache_size));
    statements.join("\n")
}
