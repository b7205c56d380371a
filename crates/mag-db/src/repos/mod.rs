//! Repository methods, one module per stored entity.
//!
//! All methods are `impl MagService` blocks; validation happens before any
//! query is issued, and store failures map onto [`crate::error::StoreError`].

mod category;
mod product;
