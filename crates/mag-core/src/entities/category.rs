use serde::{Deserialize, Serialize};

/// A product category. Backed by the `kategorie` table.
///
/// Names are not unique in the store; every internal lookup is keyed by `id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Store-assigned row id.
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}
