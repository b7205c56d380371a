//! Service handle owning the store connection.
//!
//! `MagService` wraps [`MagDb`] and is constructed exactly once at process
//! startup, then injected into whatever front end drives it (the CLI context
//! here). All repo methods are implemented as `impl MagService` blocks under
//! `repos/`.

use crate::MagDb;
use crate::error::StoreError;

/// Process-scoped handle for all inventory data access.
pub struct MagService {
    db: MagDb,
}

impl MagService {
    /// Create a service over a local database file (or `":memory:"`).
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, StoreError> {
        let db = MagDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Create a service over the hosted store.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the remote client cannot be constructed.
    pub async fn new_remote(url: &str, auth_token: &str) -> Result<Self, StoreError> {
        let db = MagDb::open_remote(url, auth_token).await?;
        Ok(Self { db })
    }

    /// Create from an existing `MagDb` (for testing).
    #[must_use]
    pub const fn from_db(db: MagDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &MagDb {
        &self.db
    }
}
