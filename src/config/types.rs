//! Configuration types for the record store and its front end.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file.

use std::path::PathBuf;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Default backing file name, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "employees.json";

/// Top-level configuration file structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Record store settings.
    pub store: StoreConfig,
    /// Attendance entry defaults.
    pub attendance: AttendanceConfig,
}

/// Record store settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Path to the JSON file holding every employee.
    pub data_file: PathBuf,
    /// Refuse to open a data file that exists but cannot be parsed,
    /// instead of starting with an empty collection.
    pub strict_load: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            strict_load: false,
        }
    }
}

/// Office hours used to prefill check-in and check-out times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttendanceConfig {
    /// Default check-in time.
    pub office_start: NaiveTime,
    /// Default check-out time.
    pub office_end: NaiveTime,
}

impl Default for AttendanceConfig {
    fn default() -> Self {
        Self {
            office_start: NaiveTime::from_hms_opt(8, 0, 0).unwrap_or(NaiveTime::MIN),
            office_end: NaiveTime::from_hms_opt(18, 0, 0).unwrap_or(NaiveTime::MIN),
        }
    }
}
