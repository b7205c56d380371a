//! # mag-db
//!
//! libSQL data access for the Magazyn inventory tables.
//!
//! Handles the two related tables (`kategorie`, `produkty`) in a hosted
//! sqld/Turso database, or a local file/`:memory:` database for development
//! and tests. Uses the `libsql` crate (C `SQLite` fork, v0.9.29).
//!
//! No local cache is kept: every read goes to the store, so callers see the
//! latest committed state after each mutation.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;
mod test_support;

use error::StoreError;
use libsql::Builder;

/// Database handle for the inventory store.
///
/// Wraps a libSQL database and its single connection. Repository methods live
/// on [`service::MagService`], which owns one of these for the process
/// lifetime.
pub struct MagDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl MagDb {
    /// Open a local database at the given path (or `":memory:"`).
    ///
    /// Runs migrations automatically on first open and enables foreign-key
    /// enforcement, matching the hosted store's referential-integrity rule.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the database cannot be opened or migrations
    /// fail.
    pub async fn open_local(path: &str) -> Result<Self, StoreError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| StoreError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let mag_db = Self { db, conn };
        mag_db.run_migrations().await?;
        tracing::debug!(path, "opened local store");
        Ok(mag_db)
    }

    /// Connect to the hosted store over its URL and access token.
    ///
    /// Never runs DDL: the hosted schema is owned by the store. Connection
    /// and auth failures surface on the first query, per the client's
    /// lazy-connect behavior.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the client cannot be constructed.
    pub async fn open_remote(url: &str, auth_token: &str) -> Result<Self, StoreError> {
        let db = Builder::new_remote(url.to_string(), auth_token.to_string())
            .build()
            .await?;
        let conn = db.connect()?;
        tracing::debug!(url, "connected to remote store");
        Ok(Self { db, conn })
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper to create an in-memory database for testing.
    async fn test_db() -> MagDb {
        MagDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;

        for table in ["kategorie", "produkty"] {
            let mut rows = db
                .conn()
                .query(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    [table],
                )
                .await
                .unwrap();
            let row = rows.next().await.unwrap();
            assert!(row.is_some(), "table '{table}' should exist");
        }
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = test_db().await;
        // Run migrations again — should not fail
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn foreign_keys_are_enforced() {
        let db = test_db().await;

        let result = db
            .conn()
            .execute(
                "INSERT INTO produkty (nazwa, liczba, cena, kategoria_id) VALUES ('x', 1, 1.0, 999)",
                (),
            )
            .await;
        assert!(result.is_err(), "dangling kategoria_id should be rejected");
    }

    #[tokio::test]
    async fn quantity_check_constraint_holds() {
        let db = test_db().await;
        db.conn()
            .execute("INSERT INTO kategorie (nazwa) VALUES ('k')", ())
            .await
            .unwrap();

        let result = db
            .conn()
            .execute(
                "INSERT INTO produkty (nazwa, liczba, cena, kategoria_id) VALUES ('x', -1, 1.0, 1)",
                (),
            )
            .await;
        assert!(result.is_err(), "negative liczba should be rejected");
    }

    #[tokio::test]
    async fn open_local_persists_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("magazyn.db");
        let path = path.to_str().unwrap();

        {
            let db = MagDb::open_local(path).await.unwrap();
            db.conn()
                .execute("INSERT INTO kategorie (nazwa) VALUES ('persisted')", ())
                .await
                .unwrap();
        }

        let db = MagDb::open_local(path).await.unwrap();
        let mut rows = db
            .conn()
            .query("SELECT nazwa FROM kategorie", ())
            .await
            .unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<String>(0).unwrap(), "persisted");
    }
}
