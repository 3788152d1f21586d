//! Process configuration read from the environment.
//!
//! # Responsibility
//! - Resolve where the catalog comes from and how logging is set up.
//!
//! # Invariants
//! - Blank environment values are treated as unset.
//! - Without `FOLIO_CATALOG_PATH` the bundled catalog is used.

use crate::catalog::store::{CatalogResult, StaticCatalog};
use crate::logging::default_log_level;
use std::path::PathBuf;

/// Path of a JSON catalog file overriding the bundled one.
pub const ENV_CATALOG_PATH: &str = "FOLIO_CATALOG_PATH";
/// Log level (`trace|debug|info|warn|error`).
pub const ENV_LOG_LEVEL: &str = "FOLIO_LOG_LEVEL";
/// Absolute directory for rolling log files.
pub const ENV_LOG_DIR: &str = "FOLIO_LOG_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolioConfig {
    pub catalog_path: Option<PathBuf>,
    pub log_level: String,
    /// File logging stays off when unset.
    pub log_dir: Option<PathBuf>,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}

impl FolioConfig {
    /// Reads configuration from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        Self {
            catalog_path: non_blank(ENV_CATALOG_PATH).map(PathBuf::from),
            log_level: non_blank(ENV_LOG_LEVEL)
                .unwrap_or_else(|| default_log_level().to_string()),
            log_dir: non_blank(ENV_LOG_DIR).map(PathBuf::from),
        }
    }

    /// Loads the configured catalog.
    pub fn load_catalog(&self) -> CatalogResult<StaticCatalog> {
        match &self.catalog_path {
            Some(path) => StaticCatalog::from_json_file(path),
            None => StaticCatalog::bundled(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FolioConfig, ENV_CATALOG_PATH, ENV_LOG_DIR, ENV_LOG_LEVEL};
    use crate::logging::default_log_level;
    use std::collections::HashMap;
    use std::path::PathBuf;

    #[test]
    fn from_lookup_reads_values_and_ignores_blanks() {
        let env = HashMap::from([
            (ENV_CATALOG_PATH, " /srv/folio/projects.json "),
            (ENV_LOG_LEVEL, "warn"),
            (ENV_LOG_DIR, "   "),
        ]);
        let config = FolioConfig::from_lookup(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(
            config.catalog_path,
            Some(PathBuf::from("/srv/folio/projects.json"))
        );
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn empty_lookup_falls_back_to_defaults() {
        let config = FolioConfig::from_lookup(|_| None);
        assert_eq!(config, FolioConfig::default());
        assert_eq!(config.log_level, default_log_level());
    }
}
