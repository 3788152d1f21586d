//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the catalog view and the detail lookup as sync calls.
//! - Hold the process-wide catalog and filter state for the Dart side.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - The catalog is loaded once and never reloaded.
//! - Failures are reported inside response envelopes, never thrown.

use folio_core::{
    core_version as core_version_inner, filter_options, init_logging as init_logging_inner,
    CatalogError, DetailResolver, FilterView, FolioConfig, ProjectDetail, ProjectSummary,
    StaticCatalog, EMPTY_FILTER_MESSAGE, UNRESOLVED_MESSAGE,
};
use log::warn;
use once_cell::sync::OnceCell;
use std::sync::{Mutex, PoisonError};

static CATALOG: OnceCell<StaticCatalog> = OnceCell::new();
static FILTER_VIEW: OnceCell<Mutex<FilterView<'static, StaticCatalog>>> = OnceCell::new();

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and an error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Filter button item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOptionItem {
    pub key: String,
    pub label: String,
}

/// Catalog card item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCardItem {
    pub id: i64,
    /// Category key (`web|design`).
    pub category: String,
    pub title: String,
    pub description: String,
    pub image: String,
    /// First three tags only.
    pub tags: Vec<String>,
    /// Detail page location, e.g. `/developer/ProjectDemo?id=1`.
    pub detail_location: String,
}

/// Catalog view envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogViewResponse {
    pub ok: bool,
    pub active_filter: String,
    pub filters: Vec<FilterOptionItem>,
    pub items: Vec<ProjectCardItem>,
    /// Empty-state or error message; empty when items are present.
    pub message: String,
}

/// Detail page item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDetailItem {
    pub id: i64,
    pub category: String,
    pub title: String,
    pub description: String,
    pub long_description: String,
    pub image: String,
    pub live_url: String,
    pub github_url: String,
    pub tags: Vec<String>,
    pub features: Vec<String>,
}

/// Detail lookup envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDetailResponse {
    /// `found|not_found`.
    pub status: String,
    pub project: Option<ProjectDetailItem>,
    pub message: String,
}

/// Lists the filter buttons in display order.
#[flutter_rust_bridge::frb(sync)]
pub fn catalog_filters() -> Vec<FilterOptionItem> {
    filter_options()
        .into_iter()
        .map(|option| FilterOptionItem {
            key: option.key.to_string(),
            label: option.label.to_string(),
        })
        .collect()
}

/// Returns the catalog view under the active filter.
///
/// # FFI contract
/// - Sync call; loads the catalog on first use.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn catalog_view() -> CatalogViewResponse {
    with_filter_view(|_| Ok(()))
}

/// Replaces the active filter and returns the updated view.
///
/// # FFI contract
/// - Unknown keys leave the active filter unchanged and return `ok=false`.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn catalog_set_filter(key: String) -> CatalogViewResponse {
    with_filter_view(|view| {
        view.select_filter(key.as_str())
            .map(|_| ())
            .map_err(|err| format!("catalog_set_filter failed: {err}"))
    })
}

/// Resolves the detail page for a location search string (`?id=<int>`).
///
/// # FFI contract
/// - Sync call, no I/O after the first catalog load.
/// - Never panics; every lookup failure maps to `not_found`.
#[flutter_rust_bridge::frb(sync)]
pub fn project_detail(search: String) -> ProjectDetailResponse {
    let catalog = match shared_catalog() {
        Ok(catalog) => catalog,
        Err(err) => {
            return ProjectDetailResponse {
                status: "not_found".to_string(),
                project: None,
                message: format!("project_detail failed: {err}"),
            };
        }
    };

    let resolver = DetailResolver::resolved(catalog, search.as_str());
    match resolver.detail() {
        Some(detail) => ProjectDetailResponse {
            status: resolver.status().as_str().to_string(),
            project: Some(to_detail_item(detail)),
            message: String::new(),
        },
        None => ProjectDetailResponse {
            status: resolver.status().as_str().to_string(),
            project: None,
            message: UNRESOLVED_MESSAGE.to_string(),
        },
    }
}

fn shared_catalog() -> Result<&'static StaticCatalog, CatalogError> {
    CATALOG.get_or_try_init(|| {
        FolioConfig::from_env().load_catalog().map_err(|err| {
            warn!("event=catalog_load module=ffi status=error reason={err}");
            err
        })
    })
}

fn with_filter_view(
    f: impl FnOnce(&mut FilterView<'static, StaticCatalog>) -> Result<(), String>,
) -> CatalogViewResponse {
    let catalog = match shared_catalog() {
        Ok(catalog) => catalog,
        Err(err) => return view_failure(format!("catalog load failed: {err}")),
    };
    let cell = FILTER_VIEW.get_or_init(|| Mutex::new(FilterView::new(catalog)));
    let mut view = cell.lock().unwrap_or_else(PoisonError::into_inner);

    let outcome = f(&mut *view);
    let snapshot = view.snapshot();
    let (ok, message) = match outcome {
        Err(err) => (false, err),
        Ok(()) if snapshot.is_empty() => (true, EMPTY_FILTER_MESSAGE.to_string()),
        Ok(()) => (true, String::new()),
    };

    CatalogViewResponse {
        ok,
        active_filter: snapshot.active_filter.as_str().to_string(),
        filters: catalog_filters(),
        items: snapshot.projects.into_iter().map(to_card_item).collect(),
        message,
    }
}

fn view_failure(message: String) -> CatalogViewResponse {
    CatalogViewResponse {
        ok: false,
        active_filter: String::new(),
        filters: catalog_filters(),
        items: Vec::new(),
        message,
    }
}

fn to_card_item(summary: ProjectSummary) -> ProjectCardItem {
    ProjectCardItem {
        id: summary.id,
        category: summary.category.as_str().to_string(),
        title: summary.title,
        description: summary.description,
        image: summary.image,
        tags: summary.tags,
        detail_location: summary.detail_location,
    }
}

fn to_detail_item(detail: ProjectDetail) -> ProjectDetailItem {
    ProjectDetailItem {
        id: detail.id,
        category: detail.category.as_str().to_string(),
        title: detail.title,
        description: detail.description,
        long_description: detail.long_description,
        image: detail.image,
        live_url: detail.live_url,
        github_url: detail.github_url,
        tags: detail.tags,
        features: detail.features,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        catalog_filters, catalog_set_filter, catalog_view, core_version, init_logging,
        project_detail,
    };

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "/tmp/folio-logs".to_string());
        assert!(error.contains("unsupported log level"));
    }

    #[test]
    fn filters_are_listed_in_display_order() {
        let keys = catalog_filters()
            .into_iter()
            .map(|item| item.key)
            .collect::<Vec<_>>();
        assert_eq!(keys, vec!["all", "web", "design"]);
    }

    // Filter state is process-wide, so the whole flow stays in one test.
    #[test]
    fn filter_flow_tracks_active_key() {
        let all = catalog_view();
        assert!(all.ok, "{}", all.message);
        assert_eq!(all.active_filter, "all");
        assert!(!all.items.is_empty());

        let web = catalog_set_filter("web".to_string());
        assert!(web.ok, "{}", web.message);
        assert_eq!(web.active_filter, "web");
        assert!(web.items.iter().all(|item| item.category == "web"));
        assert!(web.items.iter().all(|item| item.tags.len() <= 3));

        let rejected = catalog_set_filter("mobile".to_string());
        assert!(!rejected.ok);
        assert_eq!(rejected.active_filter, "web");
        assert!(rejected.message.contains("mobile"));

        let reset = catalog_set_filter("ALL".to_string());
        assert_eq!(reset.items.len(), all.items.len());
    }

    #[test]
    fn project_detail_resolves_known_and_unknown_ids() {
        let card = catalog_view().items.into_iter().next().expect("bundled card");
        let search = card
            .detail_location
            .split_once('?')
            .map(|(_, query)| format!("?{query}"))
            .expect("detail location has a query");

        let found = project_detail(search);
        assert_eq!(found.status, "found");
        assert_eq!(found.project.map(|p| p.id), Some(card.id));

        for search in ["?id=987654", "?id=abc", ""] {
            let missing = project_detail(search.to_string());
            assert_eq!(missing.status, "not_found");
            assert!(missing.project.is_none());
        }
    }
}
