//! Project record model and its render projections.
//!
//! # Responsibility
//! - Define the canonical, immutable catalog record.
//! - Derive card (`ProjectSummary`) and detail (`ProjectDetail`) views.
//!
//! # Invariants
//! - Records are never mutated after the catalog is built.
//! - Summary tags are truncated to the first `SUMMARY_TAG_LIMIT` entries;
//!   detail tags are never truncated.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Primary lookup key for catalog records.
pub type ProjectId = i64;

/// Number of tags shown on a catalog card.
pub const SUMMARY_TAG_LIMIT: usize = 3;

/// Route of the detail page; the record is selected by the `id` query parameter.
pub const DETAIL_ROUTE: &str = "/developer/ProjectDemo";

/// Query parameter key carrying the project identifier.
pub const DETAIL_QUERY_KEY: &str = "id";

/// Closed category vocabulary used for filter matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectCategory {
    /// Web applications.
    Web,
    /// UI/UX design work.
    Design,
}

impl ProjectCategory {
    /// Every category, in filter display order.
    pub const ALL: [ProjectCategory; 2] = [ProjectCategory::Web, ProjectCategory::Design];

    /// Stable wire/filter key.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Design => "design",
        }
    }

    /// Human label shown on the filter button.
    pub fn label(self) -> &'static str {
        match self {
            Self::Web => "Web Apps",
            Self::Design => "UI/UX Design",
        }
    }
}

impl Display for ProjectCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One immutable portfolio entry.
///
/// Field names on the wire follow the catalog data source, which mixes
/// `long_description` with camel-cased URL fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Unique across the catalog.
    pub id: ProjectId,
    pub category: ProjectCategory,
    pub title: String,
    /// Short text used on the catalog card.
    pub description: String,
    /// Long-form text used on the detail page.
    #[serde(default)]
    pub long_description: String,
    /// Cover image locator.
    #[serde(default)]
    pub image: String,
    #[serde(rename = "liveUrl", default)]
    pub live_url: String,
    #[serde(rename = "githubUrl", default)]
    pub github_url: String,
    /// Ordered tech-stack tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Ordered feature bullets.
    #[serde(default)]
    pub features: Vec<String>,
}

impl ProjectRecord {
    /// Creates a record with the required fields; optional display fields
    /// start empty.
    pub fn new(
        id: ProjectId,
        category: ProjectCategory,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            category,
            title: title.into(),
            description: description.into(),
            long_description: String::new(),
            image: String::new(),
            live_url: String::new(),
            github_url: String::new(),
            tags: Vec::new(),
            features: Vec::new(),
        }
    }

    /// Validates record-level invariants.
    ///
    /// # Errors
    /// - `NegativeId` when `id < 0`.
    /// - `EmptyTitle` when the title is blank.
    pub fn validate(&self) -> Result<(), ProjectValidationError> {
        if self.id < 0 {
            return Err(ProjectValidationError::NegativeId(self.id));
        }
        if self.title.trim().is_empty() {
            return Err(ProjectValidationError::EmptyTitle(self.id));
        }
        Ok(())
    }

    /// Tags shown on the catalog card.
    pub fn summary_tags(&self) -> &[String] {
        let end = self.tags.len().min(SUMMARY_TAG_LIMIT);
        &self.tags[..end]
    }

    /// Location of this record's detail page.
    pub fn detail_location(&self) -> String {
        detail_location(self.id)
    }

    pub fn to_summary(&self) -> ProjectSummary {
        ProjectSummary {
            id: self.id,
            category: self.category,
            title: self.title.clone(),
            description: self.description.clone(),
            image: self.image.clone(),
            tags: self.summary_tags().to_vec(),
            detail_location: self.detail_location(),
        }
    }

    pub fn to_detail(&self) -> ProjectDetail {
        ProjectDetail {
            id: self.id,
            category: self.category,
            title: self.title.clone(),
            description: self.description.clone(),
            long_description: self.long_description.clone(),
            image: self.image.clone(),
            live_url: self.live_url.clone(),
            github_url: self.github_url.clone(),
            tags: self.tags.clone(),
            features: self.features.clone(),
        }
    }
}

/// Builds the detail page location for one project id.
pub fn detail_location(id: ProjectId) -> String {
    format!("{DETAIL_ROUTE}?{DETAIL_QUERY_KEY}={id}")
}

/// Card projection rendered in the filtered catalog grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectSummary {
    pub id: ProjectId,
    pub category: ProjectCategory,
    pub title: String,
    pub description: String,
    pub image: String,
    /// At most `SUMMARY_TAG_LIMIT` tags, in record order.
    pub tags: Vec<String>,
    /// Link target for "View Case Study".
    pub detail_location: String,
}

/// Full projection rendered on the detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectDetail {
    pub id: ProjectId,
    pub category: ProjectCategory,
    pub title: String,
    pub description: String,
    pub long_description: String,
    pub image: String,
    pub live_url: String,
    pub github_url: String,
    pub tags: Vec<String>,
    pub features: Vec<String>,
}

/// Record-level validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectValidationError {
    NegativeId(ProjectId),
    EmptyTitle(ProjectId),
}

impl Display for ProjectValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeId(id) => write!(f, "project id must be >= 0, got {id}"),
            Self::EmptyTitle(id) => write!(f, "project {id} has an empty title"),
        }
    }
}

impl Error for ProjectValidationError {}

#[cfg(test)]
mod tests {
    use super::{detail_location, ProjectCategory, ProjectRecord, ProjectValidationError};

    #[test]
    fn summary_truncates_tags_to_three() {
        let mut record = ProjectRecord::new(4, ProjectCategory::Web, "Shop", "store front");
        record.tags = ["React", "Node", "Stripe", "Redis", "Docker"]
            .iter()
            .map(|tag| tag.to_string())
            .collect();

        let summary = record.to_summary();
        assert_eq!(summary.tags, vec!["React", "Node", "Stripe"]);
        assert_eq!(record.to_detail().tags.len(), 5);
    }

    #[test]
    fn summary_keeps_short_tag_lists_intact() {
        let mut record = ProjectRecord::new(4, ProjectCategory::Design, "Kit", "ui kit");
        record.tags = vec!["Figma".to_string()];
        assert_eq!(record.summary_tags(), ["Figma".to_string()]);
    }

    #[test]
    fn detail_location_uses_id_query_parameter() {
        assert_eq!(detail_location(7), "/developer/ProjectDemo?id=7");
    }

    #[test]
    fn validate_rejects_negative_id() {
        let record = ProjectRecord::new(-4, ProjectCategory::Web, "Shop", "x");
        assert_eq!(
            record.validate().unwrap_err(),
            ProjectValidationError::NegativeId(-4)
        );
    }

    #[test]
    fn validate_rejects_blank_title() {
        let record = ProjectRecord::new(1, ProjectCategory::Web, "  ", "x");
        assert_eq!(
            record.validate().unwrap_err(),
            ProjectValidationError::EmptyTitle(1)
        );
    }
}
