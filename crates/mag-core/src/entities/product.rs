use serde::{Deserialize, Serialize};

/// A stocked product. Backed by the `produkty` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Store-assigned row id.
    pub id: i64,
    pub name: String,
    /// Units on hand, never negative.
    pub quantity: i64,
    /// Unit price, never negative.
    pub price: f64,
    /// References `Category::id`; enforced by the store.
    pub category_id: i64,
}

/// A product joined with its category name, as returned by the one
/// join read the store exposes.
///
/// `category_name` is `None` when the referenced category row is gone
/// (stale reference); display layers substitute the "Unknown" sentinel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductWithCategory {
    #[serde(flatten)]
    pub product: Product,
    pub category_name: Option<String>,
}
