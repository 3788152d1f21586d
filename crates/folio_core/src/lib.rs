//! Core catalog logic for the Folio portfolio.
//! This crate owns every catalog, filter and lookup invariant; renderers only
//! consume what it derives.

pub mod catalog;
pub mod config;
pub mod logging;
pub mod model;
pub mod observer;
pub mod service;

pub use catalog::store::{CatalogError, CatalogResult, CatalogStore, StaticCatalog};
pub use config::FolioConfig;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::filter::{filter_options, FilterKey, FilterKeyError, FilterOption};
pub use model::project::{
    detail_location, ProjectCategory, ProjectDetail, ProjectId, ProjectRecord, ProjectSummary,
    ProjectValidationError,
};
pub use observer::{FilterChanged, Observers, ResolutionChanged, SubscriptionId};
pub use service::detail_resolver::{
    resolve, DetailResolver, LookupError, LookupQuery, ResolverStatus, UNRESOLVED_MESSAGE,
};
pub use service::filter_view::{CatalogViewState, FilterView, EMPTY_FILTER_MESSAGE};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
