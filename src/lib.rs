//! Employee record store
//!
//! This crate keeps a small organisation's employees, their daily
//! attendance, vacation balances and salaries in a single JSON file, and
//! answers payroll and workforce questions about them.
//!
//! The [`store::RecordStore`] owns the collection and the backing file;
//! [`models`] holds the persisted types; [`calendar`] knows which days are
//! working days.

#![warn(missing_docs)]

pub mod calendar;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod store;

pub use config::{AppConfig, ConfigLoader};
pub use error::{StoreError, StoreResult};
pub use logging::{Verbosity, init_logging};
pub use store::{LoadOutcome, RecordStore, SearchFilter};
