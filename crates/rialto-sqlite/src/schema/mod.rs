//! Schema management and migrations

use crate::error::{SqliteError, SqliteResult};
use rusqlite::{Connection, OptionalExtension};
use tracing::{debug, info};

/// Schema version - increment when making schema changes
const SCHEMA_VERSION: i32 = 1;

/// Tables emptied by a full reset, join table first.
pub const MANAGED_TABLES: &[&str] = &["people_publications", "publications", "organizations", "people"];

pub fn apply_migrations(conn: &Connection) -> SqliteResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        );",
    )?;

    let current_version = current_version(conn)?;
    debug!(current_version, target_version = SCHEMA_VERSION, "Checking migrations");

    if current_version < SCHEMA_VERSION {
        info!(from = current_version, to = SCHEMA_VERSION, "Applying schema migrations");
        apply_migration_v1(conn)?;
    }

    Ok(())
}

fn current_version(conn: &Connection) -> SqliteResult<i32> {
    let version: Option<i32> = conn
        .query_row("SELECT MAX(version) FROM schema_migrations", [], |row| row.get(0))
        .optional()?
        .flatten();
    Ok(version.unwrap_or(0))
}

fn apply_migration_v1(conn: &Connection) -> SqliteResult<()> {
    conn.execute_batch(SCHEMA_V1)
        .map_err(|e| SqliteError::Schema(format!("Failed to apply v1 schema: {}", e)))?;
    conn.execute("INSERT INTO schema_migrations (version) VALUES (?1)", [1])?;
    info!("Migration v1 applied");
    Ok(())
}

/// `metadata` holds the canonical JSON projection of the resource.
const SCHEMA_V1: &str = r#"
CREATE TABLE IF NOT EXISTS people (
    uri TEXT PRIMARY KEY NOT NULL,
    metadata TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS organizations (
    uri TEXT PRIMARY KEY NOT NULL,
    metadata TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS publications (
    uri TEXT PRIMARY KEY NOT NULL,
    metadata TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

-- Authors may be written before their person row exists, so no foreign keys
CREATE TABLE IF NOT EXISTS people_publications (
    publication_uri TEXT NOT NULL,
    person_uri TEXT NOT NULL,
    position INTEGER NOT NULL,
    PRIMARY KEY (publication_uri, position)
);

CREATE INDEX IF NOT EXISTS idx_people_publications_person ON people_publications(person_uri);
"#;
