//! Row-to-entity parsing helpers.
//!
//! Repos convert `libsql::Row` (column-indexed) into typed entity structs.
//! These helpers isolate the nullable-column handling.

use crate::error::StoreError;

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty
/// string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""` —
/// nullable columns must go through `get::<Option<String>>()`.
///
/// # Errors
///
/// Returns `StoreError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, StoreError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Escape `LIKE` wildcards so a user-supplied substring matches literally.
///
/// Paired with `ESCAPE '\'` in the query.
#[must_use]
pub fn escape_like(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len());
    for ch in query.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
