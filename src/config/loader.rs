//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading billing
//! conventions from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{BillingError, BillingResult};

use super::types::BillingConfig;

/// Loads and provides access to the billing configuration.
///
/// # Example
///
/// ```no_run
/// use billing_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/billing.yaml").unwrap();
/// assert_eq!(loader.billing().rounding_scale, 2);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    billing: BillingConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` if the file cannot be read, or
    /// `ConfigParseError` if it contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> BillingResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| BillingError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let billing =
            serde_yaml::from_str(&content).map_err(|e| BillingError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Ok(Self { billing })
    }

    /// Creates a loader carrying the default billing conventions.
    ///
    /// Used by tests and benchmarks, and by deployments that do not ship a
    /// configuration file.
    pub fn with_defaults() -> Self {
        Self {
            billing: BillingConfig::default(),
        }
    }

    /// Returns the billing conventions.
    pub fn billing(&self) -> &BillingConfig {
        &self.billing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AllocationMethod;

    #[test]
    fn test_missing_file_returns_config_not_found() {
        let result = ConfigLoader::load("/nonexistent/billing.yaml");
        match result.unwrap_err() {
            BillingError::ConfigNotFound { path } => {
                assert!(path.contains("billing.yaml"));
            }
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let dir = std::env::temp_dir().join("billing-engine-config-test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.yaml");
        fs::write(&path, "rounding_scale: [not a number").unwrap();

        let result = ConfigLoader::load(&path);
        assert!(matches!(
            result.unwrap_err(),
            BillingError::ConfigParseError { .. }
        ));
    }

    #[test]
    fn test_valid_yaml_loads() {
        let dir = std::env::temp_dir().join("billing-engine-config-test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("good.yaml");
        fs::write(&path, "ratio_scale: 6\n").unwrap();

        let loader = ConfigLoader::load(&path).unwrap();
        assert_eq!(loader.billing().ratio_scale, 6);
        assert_eq!(loader.billing().rounding_scale, 2);
    }

    #[test]
    fn test_with_defaults() {
        let loader = ConfigLoader::with_defaults();
        assert_eq!(loader.billing().rounding_scale, 2);
        assert_eq!(loader.billing().default_method, AllocationMethod::DaysBased);
    }
}
