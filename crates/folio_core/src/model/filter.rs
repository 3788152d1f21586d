//! Closed filter vocabulary for the catalog view.

use crate::model::project::{ProjectCategory, ProjectRecord};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Key of the identity filter.
pub const FILTER_KEY_ALL: &str = "all";
const FILTER_LABEL_ALL: &str = "All Projects";

/// One selectable catalog filter.
///
/// `All` applies no filtering; every other key selects a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterKey {
    #[default]
    All,
    Category(ProjectCategory),
}

impl FilterKey {
    /// Every key, in button display order.
    pub const ALL_KEYS: [FilterKey; 3] = [
        FilterKey::All,
        FilterKey::Category(ProjectCategory::Web),
        FilterKey::Category(ProjectCategory::Design),
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => FILTER_KEY_ALL,
            Self::Category(category) => category.as_str(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => FILTER_LABEL_ALL,
            Self::Category(category) => category.label(),
        }
    }

    /// Parses a key string coming from a UI host.
    ///
    /// Matching is trimmed and case-insensitive.
    ///
    /// # Errors
    /// - `FilterKeyError::Invalid` when the key is outside the closed set.
    pub fn parse(value: &str) -> Result<Self, FilterKeyError> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL_KEYS
            .into_iter()
            .find(|key| key.as_str() == normalized)
            .ok_or_else(|| FilterKeyError::Invalid(value.to_string()))
    }

    /// Returns whether `record` is visible under this filter.
    pub fn matches(self, record: &ProjectRecord) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => record.category == category,
        }
    }

    pub fn to_option(self) -> FilterOption {
        FilterOption {
            key: self.as_str(),
            label: self.label(),
        }
    }
}

impl From<ProjectCategory> for FilterKey {
    fn from(value: ProjectCategory) -> Self {
        Self::Category(value)
    }
}

impl Display for FilterKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `{key, label}` pair handed to the renderer for filter buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub key: &'static str,
    pub label: &'static str,
}

/// Filter buttons in display order.
pub fn filter_options() -> Vec<FilterOption> {
    FilterKey::ALL_KEYS
        .into_iter()
        .map(FilterKey::to_option)
        .collect()
}

/// Filter key parse errors.
///
/// The key set is closed, so this only surfaces on integration bugs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterKeyError {
    Invalid(String),
}

impl Display for FilterKeyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(value) => write!(
                f,
                "unsupported filter key `{value}`; expected one of {}",
                FilterKey::ALL_KEYS
                    .iter()
                    .map(|key| key.as_str())
                    .collect::<Vec<_>>()
                    .join("|")
            ),
        }
    }
}

impl Error for FilterKeyError {}

#[cfg(test)]
mod tests {
    use super::{filter_options, FilterKey, FilterKeyError};
    use crate::model::project::ProjectCategory;

    #[test]
    fn parse_accepts_known_keys_case_insensitively() {
        assert_eq!(FilterKey::parse("all").unwrap(), FilterKey::All);
        assert_eq!(
            FilterKey::parse(" WEB ").unwrap(),
            FilterKey::Category(ProjectCategory::Web)
        );
        assert_eq!(
            FilterKey::parse("Design").unwrap(),
            FilterKey::Category(ProjectCategory::Design)
        );
    }

    #[test]
    fn parse_rejects_unknown_key() {
        let err = FilterKey::parse("mobile").unwrap_err();
        assert_eq!(err, FilterKeyError::Invalid("mobile".to_string()));
        assert!(err.to_string().contains("all|web|design"));
    }

    #[test]
    fn options_keep_display_order_and_labels() {
        let options = filter_options();
        let pairs = options
            .iter()
            .map(|option| (option.key, option.label))
            .collect::<Vec<_>>();
        assert_eq!(
            pairs,
            vec![
                ("all", "All Projects"),
                ("web", "Web Apps"),
                ("design", "UI/UX Design"),
            ]
        );
    }
}
