//! Derived stock metrics over a product snapshot.
//!
//! Pure functions of a fetched snapshot and a caller-supplied threshold.
//! No persistence, no I/O — callers re-fetch and re-compute after every
//! mutation instead of subscribing to changes.

use std::collections::HashMap;

use crate::entities::{Category, Product};
use crate::enums::StockStatus;

/// Display name substituted when a product references a category id that is
/// absent from the lookup map.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Total inventory value: sum of `quantity * price` over the snapshot.
#[must_use]
pub fn inventory_value(products: &[Product]) -> f64 {
    products
        .iter()
        .map(|product| product.quantity as f64 * product.price)
        .sum()
}

/// Total units on hand across the snapshot.
#[must_use]
pub fn total_units(products: &[Product]) -> i64 {
    products.iter().map(|product| product.quantity).sum()
}

/// Products at or below the threshold, preserving snapshot order.
#[must_use]
pub fn low_stock(products: &[Product], threshold: u32) -> Vec<&Product> {
    products
        .iter()
        .filter(|product| product.quantity <= i64::from(threshold))
        .collect()
}

/// Classify a product's stock level relative to the threshold.
///
/// Zero quantity is `OutOfStock` for every threshold, including zero.
#[must_use]
pub fn stock_status(product: &Product, threshold: u32) -> StockStatus {
    if product.quantity == 0 {
        StockStatus::OutOfStock
    } else if product.quantity <= i64::from(threshold) {
        StockStatus::Low
    } else {
        StockStatus::Available
    }
}

/// Build the id-keyed category name map used for display resolution.
///
/// Duplicate category names are allowed by the store; keying by id keeps the
/// map collision-free regardless.
#[must_use]
pub fn category_name_index(categories: &[Category]) -> HashMap<i64, String> {
    categories
        .iter()
        .map(|category| (category.id, category.name.clone()))
        .collect()
}

/// Resolve a product's category name from an id-keyed map.
///
/// Returns [`UNKNOWN_CATEGORY`] for a stale reference rather than failing.
#[must_use]
pub fn resolve_category_name<'a>(product: &Product, names: &'a HashMap<i64, String>) -> &'a str {
    names
        .get(&product.category_id)
        .map_or(UNKNOWN_CATEGORY, String::as_str)
}
