//! Status enums for the Magazyn domain.

use serde::{Deserialize, Serialize};

/// Stock status of a product relative to a low-stock threshold.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    /// Quantity is exactly zero, regardless of threshold.
    OutOfStock,
    /// Quantity is positive but at or below the threshold.
    Low,
    /// Quantity is above the threshold.
    Available,
}

impl StockStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OutOfStock => "out_of_stock",
            Self::Low => "low",
            Self::Available => "available",
        }
    }
}
