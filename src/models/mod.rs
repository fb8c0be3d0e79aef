//! Core data models for the employee record store.
//!
//! This module contains all the domain models used throughout the crate.

mod attendance;
mod employee;
mod statistics;
pub(crate) mod tags;

pub use attendance::{AttendanceRecord, AttendanceStatus, AttendanceSummary};
pub use employee::{DEFAULT_VACATION_DAYS, Employee, EmployeeStatus};
pub use statistics::{UNASSIGNED_DEPARTMENT, WorkforceStatistics};
