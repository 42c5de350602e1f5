//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading tax rate
//! tables from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{FederalTables, FicaTables, StateTables, TaxTableMetadata, TaxTables};

/// Loads and provides access to tax rate tables.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// exposes the resulting immutable [`TaxTables`].
///
/// # Directory Structure
///
/// ```text
/// config/us2024/
/// ├── tables.yaml   # Metadata and validity window
/// ├── federal.yaml  # Allowance value and bracket tables per filing status
/// ├── states.yaml   # Zero-tax states and flat rates
/// └── fica.yaml     # Social Security and Medicare rates
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/us2024").unwrap();
/// let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
/// assert!(loader.tables().is_valid_for(date));
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    tables: TaxTables,
}

impl ConfigLoader {
    /// Loads tax tables from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/us2024")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<TaxTableMetadata>(&path.join("tables.yaml"))?;
        let federal = Self::load_yaml::<FederalTables>(&path.join("federal.yaml"))?;
        let state = Self::load_yaml::<StateTables>(&path.join("states.yaml"))?;
        let fica = Self::load_yaml::<FicaTables>(&path.join("fica.yaml"))?;

        Ok(Self {
            tables: TaxTables::new(metadata, federal, state, fica),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded tax tables.
    pub fn tables(&self) -> &TaxTables {
        &self.tables
    }
}
