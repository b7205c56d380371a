//! Database migration runner.
//!
//! Embeds the SQL migration file at compile time and executes it on local
//! database open. All statements use `IF NOT EXISTS` for idempotent
//! re-running. Remote opens never run DDL; the hosted store owns its schema.

use crate::MagDb;
use crate::error::StoreError;

/// Initial schema: the two inventory tables and the FK index.
const MIGRATION_001: &str = include_str!("../migrations/001_initial.sql");

impl MagDb {
    /// Run all embedded migrations in sequence.
    pub(crate) async fn run_migrations(&self) -> Result<(), StoreError> {
        self.conn()
            .execute_batch(MIGRATION_001)
            .await
            .map_err(|e| StoreError::Migration(format!("001_initial: {e}")))?;
        tracing::debug!("migrations applied");
        Ok(())
    }
}
