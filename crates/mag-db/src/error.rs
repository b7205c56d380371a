//! Store error types for mag-db.

use thiserror::Error;

/// Errors from data access operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Bad input rejected before any remote call was issued.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Referenced row does not exist.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    /// A delete (or insert) was blocked by the store's foreign-key rule.
    #[error("{entity} {id} still has dependent rows (foreign key)")]
    ReferentialIntegrity { entity: &'static str, id: i64 },

    /// A SQL query failed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Whether a libSQL error is the store's foreign-key rejection.
///
/// SQLite reports both blocked deletes and dangling inserts with the same
/// "FOREIGN KEY constraint failed" text, so callers supply the entity/id
/// context when mapping.
pub(crate) fn is_fk_violation(error: &libsql::Error) -> bool {
    error.to_string().contains("FOREIGN KEY constraint failed")
}

impl StoreError {
    /// Map a mutation failure, turning FK rejections into
    /// [`StoreError::ReferentialIntegrity`] for the given row.
    pub(crate) fn from_mutation(error: libsql::Error, entity: &'static str, id: i64) -> Self {
        if is_fk_violation(&error) {
            Self::ReferentialIntegrity { entity, id }
        } else {
            Self::LibSql(error)
        }
    }
}
