//! Catalog store contracts and the static in-memory implementation.
//!
//! # Responsibility
//! - Define the read-only catalog contract shared by every view.
//! - Build the immutable catalog once from a static data source.
//!
//! # Invariants
//! - Catalog order is stable and identical across calls.
//! - Record ids are unique; construction rejects duplicates.
//! - Absence on lookup is a valid result, never an error.

pub mod store;
