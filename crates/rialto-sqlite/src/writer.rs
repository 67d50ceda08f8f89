//! Relational derivative writer
//!
//! Each variant has its own table keyed by subject URI, holding the canonical
//! JSON projection in `metadata`. Publication author links live in
//! `people_publications` and are rewritten together with the publication row.

use crate::canonical::to_canonical_string;
use crate::connection::SqlitePool;
use crate::error::{SqliteError, SqliteResult};
use crate::projection::{author_uris, OrganizationMetadata, PersonMetadata, PublicationMetadata};
use crate::schema::MANAGED_TABLES;
use async_trait::async_trait;
use chrono::Utc;
use rialto_core::{
    DerivativeWriter, Organization, Person, Publication, Resource, WriterResult,
};
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashSet;
use tracing::{debug, info};

#[derive(Clone)]
pub struct SqliteWriter {
    pool: SqlitePool,
}

impl SqliteWriter {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn add_person(&self, person: &Person) -> SqliteResult<()> {
        let metadata = to_canonical_string(&PersonMetadata::from(person))?;
        self.pool
            .with_connection(|conn| upsert(conn, "people", person.subject(), &metadata))
    }

    pub fn add_organization(&self, org: &Organization) -> SqliteResult<()> {
        let metadata = to_canonical_string(&OrganizationMetadata::from(org))?;
        self.pool
            .with_connection(|conn| upsert(conn, "organizations", org.subject(), &metadata))
    }

    /// Upsert the publication and replace its author links in one transaction.
    pub fn add_publication(&self, publication: &Publication) -> SqliteResult<()> {
        let metadata = to_canonical_string(&PublicationMetadata::from(publication))?;
        let subject = publication.subject();
        let authors = author_uris(publication);

        self.pool.with_connection_mut(|conn| {
            let tx = conn.transaction()?;
            upsert(&tx, "publications", subject, &metadata)?;

            tx.execute(
                "DELETE FROM people_publications WHERE publication_uri = ?1",
                [subject],
            )?;
            {
                let mut stmt = tx.prepare(
                    "INSERT INTO people_publications (publication_uri, person_uri, position)
                     VALUES (?1, ?2, ?3)",
                )?;
                for (position, author) in authors.iter().enumerate() {
                    stmt.execute(params![subject, author, position as i64])?;
                }
            }

            tx.commit()?;
            debug!(subject, authors = authors.len(), "Stored publication");
            Ok(())
        })
    }

    /// Route each resource to its table; generic resources have none.
    pub fn add_resources(&self, resources: &[Resource]) -> SqliteResult<()> {
        for resource in resources {
            match resource {
                Resource::Person(p) => self.add_person(p)?,
                Resource::Organization(o) => self.add_organization(o)?,
                Resource::Publication(p) => self.add_publication(p)?,
                Resource::Generic(_) => {
                    debug!(subject = resource.subject(), "No table for generic resource, skipping")
                }
            }
        }
        Ok(())
    }

    /// Empty every managed table, all or nothing.
    pub fn clear(&self) -> SqliteResult<()> {
        self.pool.with_connection_mut(|conn| {
            let tx = conn.transaction()?;
            for table in MANAGED_TABLES {
                tx.execute(&format!("DELETE FROM {table}"), [])?;
            }
            tx.commit()?;
            info!("Removed all relational derivatives");
            Ok(())
        })
    }

    pub fn retrieve_one_person(&self, subject: &str) -> SqliteResult<String> {
        self.retrieve_metadata("people", subject)
    }

    pub fn retrieve_one_organization(&self, subject: &str) -> SqliteResult<String> {
        self.retrieve_metadata("organizations", subject)
    }

    pub fn retrieve_one_publication(&self, subject: &str) -> SqliteResult<String> {
        self.retrieve_metadata("publications", subject)
    }

    /// Author subjects linked to a stored publication
    pub fn retrieve_people_publication_relationship(
        &self,
        subject: &str,
    ) -> SqliteResult<HashSet<String>> {
        self.pool.with_connection(|conn| {
            conn.query_row("SELECT 1 FROM publications WHERE uri = ?1", [subject], |_| Ok(()))
                .optional()?
                .ok_or_else(|| SqliteError::NotFound(subject.to_string()))?;

            let mut stmt = conn
                .prepare("SELECT person_uri FROM people_publications WHERE publication_uri = ?1")?;
            let rows = stmt.query_map([subject], |row| row.get::<_, String>(0))?;
            let uris = rows.collect::<Result<HashSet<_>, _>>()?;
            Ok(uris)
        })
    }

    fn retrieve_metadata(&self, table: &'static str, subject: &str) -> SqliteResult<String> {
        self.pool.with_connection(|conn| {
            conn.query_row(
                &format!("SELECT metadata FROM {table} WHERE uri = ?1"),
                [subject],
                |row| row.get(0),
            )
            .optional()?
            .ok_or_else(|| SqliteError::NotFound(subject.to_string()))
        })
    }
}

fn upsert(conn: &Connection, table: &'static str, subject: &str, metadata: &str) -> SqliteResult<()> {
    let now = Utc::now().to_rfc3339();
    conn.execute(
        &format!(
            "INSERT INTO {table} (uri, metadata, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?3)
             ON CONFLICT(uri) DO UPDATE SET
                 metadata = excluded.metadata,
                 updated_at = excluded.updated_at"
        ),
        params![subject, metadata, now],
    )?;
    Ok(())
}

#[async_trait]
impl DerivativeWriter for SqliteWriter {
    async fn remove_all(&self) -> WriterResult<()> {
        let writer = self.clone();
        tokio::task::spawn_blocking(move || writer.clear())
            .await
            .map_err(|e| SqliteError::Task(e.to_string()))??;
        Ok(())
    }

    async fn add(&self, resources: &[Resource]) -> WriterResult<()> {
        let writer = self.clone();
        let resources = resources.to_vec();
        tokio::task::spawn_blocking(move || writer.add_resources(&resources))
            .await
            .map_err(|e| SqliteError::Task(e.to_string()))??;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "sqlite"
    }
}
