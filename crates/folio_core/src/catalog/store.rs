//! Catalog store contract and `StaticCatalog` implementation.

use crate::model::project::{ProjectId, ProjectRecord, ProjectValidationError};
use log::info;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

const BUNDLED_CATALOG_JSON: &str = include_str!("../../data/projects.json");

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Read-only access to the project collection.
pub trait CatalogStore {
    /// Every record, in catalog order.
    fn all(&self) -> &[ProjectRecord];
    /// Record with the given id, if any.
    fn get_by_id(&self, id: ProjectId) -> Option<&ProjectRecord>;

    fn len(&self) -> usize {
        self.all().len()
    }

    fn is_empty(&self) -> bool {
        self.all().is_empty()
    }
}

/// Catalog construction/load errors.
#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    DuplicateId(ProjectId),
    InvalidRecord(ProjectValidationError),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read catalog: {err}"),
            Self::Parse(err) => write!(f, "failed to parse catalog: {err}"),
            Self::DuplicateId(id) => write!(f, "duplicate project id in catalog: {id}"),
            Self::InvalidRecord(err) => write!(f, "invalid catalog record: {err}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::DuplicateId(_) => None,
            Self::InvalidRecord(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

impl From<ProjectValidationError> for CatalogError {
    fn from(value: ProjectValidationError) -> Self {
        Self::InvalidRecord(value)
    }
}

/// Immutable catalog built once at startup and shared by reference.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    records: Vec<ProjectRecord>,
    index: HashMap<ProjectId, usize>,
}

impl StaticCatalog {
    /// Builds a catalog, keeping the given order.
    ///
    /// # Errors
    /// - `InvalidRecord` when any record fails validation.
    /// - `DuplicateId` when two records share an id.
    pub fn new(records: Vec<ProjectRecord>) -> CatalogResult<Self> {
        let mut index = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            record.validate()?;
            if index.insert(record.id, position).is_some() {
                return Err(CatalogError::DuplicateId(record.id));
            }
        }
        Ok(Self { records, index })
    }

    /// Builds a catalog from a JSON array of records.
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let records: Vec<ProjectRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    /// Reads and builds a catalog from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&json)?;
        info!(
            "event=catalog_load module=catalog status=ok count={} source=file path={}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Builds the catalog compiled into this crate.
    pub fn bundled() -> CatalogResult<Self> {
        let catalog = Self::from_json_str(BUNDLED_CATALOG_JSON)?;
        info!(
            "event=catalog_load module=catalog status=ok count={} source=bundled",
            catalog.len()
        );
        Ok(catalog)
    }
}

impl CatalogStore for StaticCatalog {
    fn all(&self) -> &[ProjectRecord] {
        &self.records
    }

    fn get_by_id(&self, id: ProjectId) -> Option<&ProjectRecord> {
        self.index
            .get(&id)
            .and_then(|position| self.records.get(*position))
    }
}

#[cfg(test)]
mod tests {
    use super::{CatalogStore, StaticCatalog};

    #[test]
    fn bundled_catalog_loads_with_unique_ids() {
        let catalog = StaticCatalog::bundled().expect("bundled catalog should parse");
        assert!(!catalog.is_empty());
        for record in catalog.all() {
            assert_eq!(
                catalog.get_by_id(record.id).map(|found| found.id),
                Some(record.id)
            );
        }
    }
}
