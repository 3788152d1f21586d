//! Detail page resolution from a navigation query string.
//!
//! # Responsibility
//! - Parse the `id` query parameter into a `LookupQuery`.
//! - Resolve the query against the catalog into a `ResolverStatus`.
//!
//! # Invariants
//! - Resolution is a pure function of `(query string, catalog)`.
//! - Missing, unparseable and unknown ids all end in `NotFound`; no lookup
//!   failure is raised to the caller.
//! - `Pending` only exists before the first resolution pass.

use crate::catalog::store::CatalogStore;
use crate::model::project::{ProjectDetail, ProjectId, ProjectRecord, DETAIL_QUERY_KEY};
use crate::observer::{Observers, ResolutionChanged, SubscriptionId};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};
use url::form_urlencoded;

/// Message rendered while pending or when nothing matched.
pub const UNRESOLVED_MESSAGE: &str = "Loading project or project not found...";

/// Identifier extracted from one navigation location.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupQuery {
    /// Decoded value of the first `id` parameter.
    pub raw: Option<String>,
    /// Integer form of `raw`, when it parses.
    pub parsed: Option<ProjectId>,
}

impl LookupQuery {
    /// Extracts the lookup query from a location search string.
    ///
    /// The leading `?` is optional. Only the first `id` parameter is used.
    pub fn from_search(search: &str) -> Self {
        let trimmed = search.strip_prefix('?').unwrap_or(search);
        let raw = form_urlencoded::parse(trimmed.as_bytes())
            .find(|(key, _)| key == DETAIL_QUERY_KEY)
            .map(|(_, value)| value.into_owned());
        let parsed = raw.as_deref().and_then(parse_leading_int);
        Self { raw, parsed }
    }

    /// Validated identifier for catalog lookup.
    ///
    /// # Errors
    /// - `IdentifierMissing` when no `id` parameter is present.
    /// - `IdentifierUnparseable` when the value has no leading integer.
    pub fn identifier(&self) -> Result<ProjectId, LookupError> {
        match (&self.raw, self.parsed) {
            (None, _) => Err(LookupError::IdentifierMissing),
            (Some(_), Some(id)) => Ok(id),
            (Some(raw), None) => Err(LookupError::IdentifierUnparseable(raw.clone())),
        }
    }
}

/// Parses a base-10 integer prefix.
///
/// Leading whitespace and one sign are accepted and trailing characters are
/// ignored, so `" 12abc"` is `12`. Returns `None` without digits or on
/// overflow.
fn parse_leading_int(value: &str) -> Option<ProjectId> {
    let trimmed = value.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digits_end == 0 {
        return None;
    }
    let magnitude = unsigned[..digits_end].parse::<ProjectId>().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Why a lookup ended in `NotFound`. Diagnostic only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    IdentifierMissing,
    IdentifierUnparseable(String),
    IdentifierNotFound(ProjectId),
}

impl Display for LookupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IdentifierMissing => write!(f, "missing `{DETAIL_QUERY_KEY}` query parameter"),
            Self::IdentifierUnparseable(raw) => {
                write!(f, "`{DETAIL_QUERY_KEY}` is not an integer: `{raw}`")
            }
            Self::IdentifierNotFound(id) => write!(f, "project not found: {id}"),
        }
    }
}

impl Error for LookupError {}

/// Resolves a location search string against the catalog.
pub fn resolve<'c, C: CatalogStore>(
    catalog: &'c C,
    search: &str,
) -> Result<&'c ProjectRecord, LookupError> {
    resolve_query(catalog, &LookupQuery::from_search(search))
}

fn resolve_query<'c, C: CatalogStore>(
    catalog: &'c C,
    query: &LookupQuery,
) -> Result<&'c ProjectRecord, LookupError> {
    let id = query.identifier()?;
    catalog
        .get_by_id(id)
        .ok_or(LookupError::IdentifierNotFound(id))
}

/// Outcome of resolving the current location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolverStatus<'c> {
    /// No resolution pass has run yet.
    Pending,
    Found(&'c ProjectRecord),
    NotFound(LookupError),
}

impl<'c> ResolverStatus<'c> {
    pub fn record(&self) -> Option<&'c ProjectRecord> {
        match self {
            Self::Found(record) => Some(*record),
            Self::Pending | Self::NotFound(_) => None,
        }
    }

    /// Stable status name for renderers.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Found(_) => "found",
            Self::NotFound(_) => "not_found",
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Detail page state driven by location changes.
#[derive(Debug)]
pub struct DetailResolver<'c, C: CatalogStore> {
    catalog: &'c C,
    query: Option<LookupQuery>,
    status: ResolverStatus<'c>,
    observers: Observers<ResolutionChanged>,
}

impl<'c, C: CatalogStore> DetailResolver<'c, C> {
    /// Creates a resolver in the `Pending` state.
    pub fn new(catalog: &'c C) -> Self {
        Self {
            catalog,
            query: None,
            status: ResolverStatus::Pending,
            observers: Observers::new(),
        }
    }

    /// Creates a resolver and runs the first pass immediately.
    pub fn resolved(catalog: &'c C, search: &str) -> Self {
        let mut resolver = Self::new(catalog);
        resolver.on_location_change(search);
        resolver
    }

    /// Re-resolves for a new location search string and notifies subscribers.
    pub fn on_location_change(&mut self, search: &str) -> &ResolverStatus<'c> {
        let catalog: &'c C = self.catalog;
        let query = LookupQuery::from_search(search);
        self.status = match resolve_query(catalog, &query) {
            Ok(record) => ResolverStatus::Found(record),
            Err(err) => {
                debug!(
                    "event=detail_unresolved module=detail_resolver reason={}",
                    err
                );
                ResolverStatus::NotFound(err)
            }
        };
        self.query = Some(query);

        let event = ResolutionChanged {
            query: search.to_string(),
            found: self.status.record().map(|record| record.id),
        };
        self.observers.notify(&event);
        &self.status
    }

    pub fn status(&self) -> &ResolverStatus<'c> {
        &self.status
    }

    /// Lookup query of the latest pass, `None` while pending.
    pub fn query(&self) -> Option<&LookupQuery> {
        self.query.as_ref()
    }

    pub fn detail(&self) -> Option<ProjectDetail> {
        self.status.record().map(ProjectRecord::to_detail)
    }

    /// Registers a "resolution changed" callback.
    pub fn subscribe(
        &mut self,
        callback: impl FnMut(&ResolutionChanged) + Send + 'static,
    ) -> SubscriptionId {
        self.observers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }
}
