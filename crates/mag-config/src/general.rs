//! General behavior settings.

use serde::{Deserialize, Serialize};

/// Default low-stock threshold (units).
const fn default_low_stock_threshold() -> u32 {
    5
}

/// Default list result cap.
const fn default_limit() -> u32 {
    20
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Quantity at or below which a product is flagged for reorder attention.
    /// The CLI restricts overrides to 0..=50; the metrics engine itself
    /// accepts any value.
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: u32,

    /// Default cap for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            low_stock_threshold: default_low_stock_threshold(),
            default_limit: default_limit(),
        }
    }
}
