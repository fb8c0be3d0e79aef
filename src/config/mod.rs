//! Configuration loading for the record store.
//!
//! This module loads the YAML configuration that tells the store where its
//! backing file lives and how strictly to treat a damaged file, plus the
//! office-hour defaults the command-line front end uses for attendance.
//!
//! # Example
//!
//! ```no_run
//! use employee_records::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./emprec.yaml").unwrap();
//! println!("Data file: {}", config.store().data_file.display());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, AttendanceConfig, DEFAULT_DATA_FILE, StoreConfig};
