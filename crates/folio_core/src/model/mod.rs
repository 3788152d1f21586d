//! Portfolio domain model.
//!
//! # Responsibility
//! - Define the fixed record shape for catalog entries.
//! - Define the closed filter vocabulary and the card/detail projections.
//!
//! # Invariants
//! - Every record is identified by a unique `ProjectId`.
//! - Every record belongs to exactly one `ProjectCategory`.
//! - `tags` and `features` are always present, possibly empty.

pub mod filter;
pub mod project;
