//! FFI bridge crate for Flutter integration.
//!
//! # Responsibility
//! - Expose catalog/detail use-cases to Dart via flutter_rust_bridge.
//! - Keep the FFI surface thin; all invariants live in `folio_core`.

pub mod api;
