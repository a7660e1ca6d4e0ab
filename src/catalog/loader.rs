//! Catalog loading functionality.
//!
//! This module provides the [`CatalogLoader`] type for loading the rate
//! catalog from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{LaborRatesFile, RateCatalog, TestsFile};

/// Loads and provides access to the rate catalog.
///
/// The `CatalogLoader` reads YAML catalog files from a directory and exposes
/// the resulting [`RateCatalog`] snapshot. The constituent tables may be
/// maintained independently upstream, so no ordering between them is assumed.
///
/// # Directory Structure
///
/// ```text
/// catalog/
/// ├── labor_rates.yaml   # Labor role -> hourly rate table
/// └── tests.yaml         # Lab tests, categories and turnaround prices
/// ```
///
/// # Example
///
/// ```no_run
/// use fieldcost_engine::catalog::CatalogLoader;
///
/// let loader = CatalogLoader::load("./catalog").unwrap();
/// let rate = loader.catalog().labor_rate("Technician");
/// println!("Technician rate: {:?}", rate);
/// ```
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    catalog: RateCatalog,
}

impl CatalogLoader {
    /// Loads the catalog from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the catalog directory (e.g., "./catalog")
    ///
    /// # Returns
    ///
    /// Returns a `CatalogLoader` instance on success, or an error if:
    /// - Any required file is missing (`CatalogNotFound`)
    /// - Any file contains invalid YAML (`CatalogParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let labor_rates_path = path.join("labor_rates.yaml");
        let labor_rates = Self::load_yaml::<LaborRatesFile>(&labor_rates_path)?;

        let tests_path = path.join("tests.yaml");
        let tests = Self::load_yaml::<TestsFile>(&tests_path)?;

        debug!(
            labor_rates = labor_rates.labor_rates.len(),
            tests = tests.tests.len(),
            "Loaded rate catalog"
        );

        Ok(Self {
            catalog: RateCatalog::new(labor_rates.labor_rates, tests.tests),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::CatalogNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::CatalogParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded catalog.
    pub fn catalog(&self) -> &RateCatalog {
        &self.catalog
    }
}
