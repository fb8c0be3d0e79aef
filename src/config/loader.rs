//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the
//! application configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{StoreError, StoreResult};

use super::types::{AppConfig, AttendanceConfig, StoreConfig};

/// Loads and provides access to the application configuration.
///
/// # File Layout
///
/// ```text
/// store:
///   data_file: employees.json
///   strict_load: false
/// attendance:
///   office_start: "08:00:00"
///   office_end: "18:00:00"
/// ```
///
/// Every key is optional and falls back to its default.
///
/// # Example
///
/// ```no_run
/// use employee_records::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./emprec.yaml").unwrap();
/// println!("Data file: {}", loader.store().data_file.display());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML (`ConfigParseError`)
    /// - The values are inconsistent (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| StoreError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content).map_err(|err| match err {
            StoreError::ConfigParseError { message, .. } => StoreError::ConfigParseError {
                path: path_str,
                message,
            },
            other => other,
        })
    }

    /// Loads configuration from `path` when given, otherwise uses defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> StoreResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Parses configuration from YAML text.
    pub fn from_yaml_str(content: &str) -> StoreResult<Self> {
        // An empty document deserializes to unit, not to a mapping.
        let config: AppConfig = if content.trim().is_empty() {
            AppConfig::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| StoreError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?
        };

        Self::validate(&config)?;
        Ok(Self { config })
    }

    fn validate(config: &AppConfig) -> StoreResult<()> {
        if config.store.data_file.as_os_str().is_empty() {
            return Err(StoreError::InvalidConfig {
                message: "store.data_file must not be empty".to_string(),
            });
        }
        if config.attendance.office_end <= config.attendance.office_start {
            return Err(StoreError::InvalidConfig {
                message: format!(
                    "attendance.office_end ({}) must be after attendance.office_start ({})",
                    config.attendance.office_end, config.attendance.office_start
                ),
            });
        }
        Ok(())
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the record store settings.
    pub fn store(&self) -> &StoreConfig {
        &self.config.store
    }

    /// Returns the attendance defaults.
    pub fn attendance(&self) -> &AttendanceConfig {
        &self.config.attendance
    }

    /// Consumes the loader and returns the configuration.
    pub fn into_config(self) -> AppConfig {
        self.config
    }
}
