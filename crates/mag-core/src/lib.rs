//! # mag-core
//!
//! Core types and derived stock metrics for Magazyn.
//!
//! This crate provides the foundational pieces shared across the workspace:
//! - Entity structs for the two stored domain objects (categories, products)
//! - The stock status enum used by presentation and alerting
//! - Pure derived-metric functions over a product snapshot (no I/O)

pub mod entities;
pub mod enums;
pub mod metrics;
