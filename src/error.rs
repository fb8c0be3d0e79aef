//! Error types for the employee record store.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure a store operation, the configuration loader, or the
//! persistence layer can report.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for the record store.
///
/// Domain failures (`NotFound`, `DuplicateId`, `Validation`) carry a
/// human-readable message suitable for showing directly to a user. I/O and
/// parse failures carry the path involved.
///
/// # Example
///
/// ```
/// use employee_records::error::StoreError;
///
/// let error = StoreError::NotFound { id: 42 };
/// assert_eq!(error.to_string(), "Employee ID 42 not found.");
/// ```
#[derive(Debug, Error)]
pub enum StoreError {
    /// An operation referenced an employee id that is not in the store.
    #[error("Employee ID {id} not found.")]
    NotFound {
        /// The id that was looked up.
        id: u32,
    },

    /// An employee was added with an id that is already taken.
    #[error("Employee ID {id} already exists.")]
    DuplicateId {
        /// The conflicting id.
        id: u32,
    },

    /// A field constraint was violated.
    #[error("{message}")]
    Validation {
        /// The input that was rejected (e.g. "age", "percentage").
        field: String,
        /// A human-readable reason.
        message: String,
    },

    /// Reading or writing a file failed.
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        /// The file being accessed.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The backing data file exists but could not be parsed.
    #[error("Failed to parse data file '{}': {message}", path.display())]
    DataFileParse {
        /// The data file path.
        path: PathBuf,
        /// A description of the parse error.
        message: String,
    },

    /// An aggregate over the collection does not fit in a `Decimal`.
    #[error("{quantity} is out of range.")]
    Overflow {
        /// The quantity being computed (e.g. "Annual payroll").
        quantity: String,
    },

    /// The employee collection could not be serialized.
    #[error("Failed to serialize employee records: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds inconsistent values.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// What is wrong with the configuration.
        message: String,
    },
}

impl StoreError {
    /// Builds a [`StoreError::Validation`] for the given field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns true for [`StoreError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns true for [`StoreError::DuplicateId`].
    pub fn is_duplicate_id(&self) -> bool {
        matches!(self, Self::DuplicateId { .. })
    }

    /// Returns true for [`StoreError::Validation`].
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

/// A type alias for Results that return StoreError.
pub type StoreResult<T> = Result<T, StoreError>;
