//! Filterable catalog view.
//!
//! # Responsibility
//! - Hold the active filter, starting at `FilterKey::All`.
//! - Derive the visible subset of the catalog for the renderer.
//!
//! # Invariants
//! - `All` yields the catalog unchanged, in catalog order.
//! - Any other key yields the records of that category, in catalog order.
//! - An empty result means "no matches"; the catalog is always loaded.

use crate::catalog::store::CatalogStore;
use crate::model::filter::{filter_options, FilterKey, FilterKeyError, FilterOption};
use crate::model::project::{ProjectRecord, ProjectSummary};
use crate::observer::{FilterChanged, Observers, SubscriptionId};
use log::debug;

/// Message rendered when the active filter matches nothing.
pub const EMPTY_FILTER_MESSAGE: &str = "No projects found for this category.";

/// Render snapshot of the catalog view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogViewState {
    pub active_filter: FilterKey,
    /// Filter buttons in display order.
    pub filters: Vec<FilterOption>,
    /// Cards for the visible records, in catalog order.
    pub projects: Vec<ProjectSummary>,
}

impl CatalogViewState {
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

/// Catalog view over an injected, read-only catalog.
#[derive(Debug)]
pub struct FilterView<'c, C: CatalogStore> {
    catalog: &'c C,
    active_filter: FilterKey,
    observers: Observers<FilterChanged>,
}

impl<'c, C: CatalogStore> FilterView<'c, C> {
    pub fn new(catalog: &'c C) -> Self {
        Self {
            catalog,
            active_filter: FilterKey::All,
            observers: Observers::new(),
        }
    }

    pub fn active_filter(&self) -> FilterKey {
        self.active_filter
    }

    /// Filter buttons exposed to the renderer.
    pub fn filters(&self) -> Vec<FilterOption> {
        filter_options()
    }

    /// Replaces the active filter.
    ///
    /// Subscribers are notified only when the key actually changes.
    pub fn set_filter(&mut self, key: FilterKey) {
        let previous = std::mem::replace(&mut self.active_filter, key);
        if previous == key {
            return;
        }
        debug!(
            "event=filter_changed module=filter_view previous={} current={}",
            previous, key
        );
        self.observers.notify(&FilterChanged {
            previous,
            current: key,
        });
    }

    /// Parses a UI-provided key and applies it.
    ///
    /// # Errors
    /// - `FilterKeyError::Invalid` for keys outside the closed set; the active
    ///   filter is left untouched.
    pub fn select_filter(&mut self, key: &str) -> Result<FilterKey, FilterKeyError> {
        let parsed = FilterKey::parse(key)?;
        self.set_filter(parsed);
        Ok(parsed)
    }

    /// Records visible under the active filter, in catalog order.
    pub fn visible_projects(&self) -> Vec<&'c ProjectRecord> {
        let catalog: &'c C = self.catalog;
        let key = self.active_filter;
        catalog
            .all()
            .iter()
            .filter(|record| key.matches(record))
            .collect()
    }

    pub fn snapshot(&self) -> CatalogViewState {
        CatalogViewState {
            active_filter: self.active_filter,
            filters: self.filters(),
            projects: self
                .visible_projects()
                .into_iter()
                .map(ProjectRecord::to_summary)
                .collect(),
        }
    }

    /// Registers a "filter changed" callback.
    pub fn subscribe(
        &mut self,
        callback: impl FnMut(&FilterChanged) + Send + 'static,
    ) -> SubscriptionId {
        self.observers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }
}
