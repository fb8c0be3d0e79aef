//! Employee model and related types.
//!
//! This module defines the Employee struct and EmployeeStatus enum
//! for representing staff in the record store.

use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::attendance::AttendanceRecord;
use super::tags::{StatusTag, TagRepr, day_date, parse_tag, tag_from_repr};
use crate::error::StoreError;

/// Vacation balance given to an employee when none is recorded.
pub const DEFAULT_VACATION_DAYS: u32 = 20;

/// Employment status of an employee.
///
/// A free tag: any status may change to any other through an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "TagRepr")]
pub enum EmployeeStatus {
    /// Currently employed and working.
    #[default]
    Active,
    /// Employed but on extended leave.
    OnLeave,
    /// Left voluntarily.
    Resigned,
    /// Employment ended by the employer.
    Terminated,
}

impl StatusTag for EmployeeStatus {
    const ALL: &'static [Self] = &[
        Self::Active,
        Self::OnLeave,
        Self::Resigned,
        Self::Terminated,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::OnLeave => "OnLeave",
            Self::Resigned => "Resigned",
            Self::Terminated => "Terminated",
        }
    }
}

impl TryFrom<TagRepr> for EmployeeStatus {
    type Error = String;

    fn try_from(repr: TagRepr) -> Result<Self, Self::Error> {
        tag_from_repr(repr)
    }
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EmployeeStatus {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_tag(s).ok_or_else(|| {
            StoreError::validation("status", format!("Unknown employee status '{s}'."))
        })
    }
}

/// Represents an employee tracked by the record store.
///
/// Field names are persisted in PascalCase to stay compatible with existing
/// data files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Employee {
    /// Unique, positive identifier.
    pub id: u32,
    /// Full name.
    pub name: String,
    /// Age in years.
    pub age: u32,
    /// Department name; blank when unassigned.
    #[serde(default)]
    pub department: String,
    /// Job title.
    #[serde(default)]
    pub position: String,
    /// Contact email; blank when not provided.
    #[serde(default)]
    pub email: String,
    /// Contact phone number.
    #[serde(default)]
    pub phone: String,
    /// Annual salary.
    #[serde(default)]
    pub salary: Decimal,
    /// The day the employee joined.
    #[serde(with = "day_date")]
    pub join_date: NaiveDate,
    /// Remaining vacation balance in days.
    #[serde(default = "default_vacation_days")]
    pub vacation_days: u32,
    /// Employment status.
    #[serde(default)]
    pub status: EmployeeStatus,
    /// Attendance history, one record per calendar day.
    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
}

fn default_vacation_days() -> u32 {
    DEFAULT_VACATION_DAYS
}

impl Employee {
    /// Returns the monthly salary, rounded to cents.
    ///
    /// # Examples
    ///
    /// ```
    /// use employee_records::models::{Employee, EmployeeStatus};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee {
    ///     id: 1,
    ///     name: "Alice".to_string(),
    ///     age: 30,
    ///     department: "IT".to_string(),
    ///     position: "Engineer".to_string(),
    ///     email: String::new(),
    ///     phone: String::new(),
    ///     salary: Decimal::new(50000, 0),
    ///     join_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
    ///     vacation_days: 20,
    ///     status: EmployeeStatus::Active,
    ///     attendance: vec![],
    /// };
    /// assert_eq!(employee.monthly_salary(), Decimal::new(416667, 2));
    /// ```
    pub fn monthly_salary(&self) -> Decimal {
        (self.salary / Decimal::from(12)).round_dp(2)
    }

    /// Returns whole years of service as of today.
    pub fn years_of_service(&self) -> u32 {
        self.years_of_service_on(Local::now().date_naive())
    }

    /// Returns whole years of service as of `today`, counting 365-day years.
    ///
    /// A join date in the future counts as zero years.
    pub fn years_of_service_on(&self, today: NaiveDate) -> u32 {
        let days = (today - self.join_date).num_days().max(0);
        u32::try_from(days / 365).unwrap_or(u32::MAX)
    }

    /// Returns true if the employee's status is [`EmployeeStatus::Active`].
    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }

    /// Returns the attendance record for a calendar day, if one exists.
    pub fn attendance_on(&self, date: NaiveDate) -> Option<&AttendanceRecord> {
        self.attendance.iter().find(|record| record.date == date)
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.id, self.name, self.position)
    }
}
