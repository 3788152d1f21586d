//! View-state services consumed by renderers.
//!
//! # Responsibility
//! - Own transient UI state (active filter, lookup query).
//! - Derive render data from the injected catalog on every read.
//! - Keep UI/FFI layers decoupled from catalog construction.

pub mod detail_resolver;
pub mod filter_view;
