//! Command definitions for the CLI.

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveTime};
use clap::{Args, Subcommand};
use rust_decimal::Decimal;

use crate::config::AttendanceConfig;
use crate::models::{AttendanceStatus, DEFAULT_VACATION_DAYS, Employee, EmployeeStatus};

/// List or search employees.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Only names containing this text (case-insensitive)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Only this department (case-insensitive exact match)
    #[arg(short, long)]
    pub department: Option<String>,

    /// Only positions containing this text (case-insensitive)
    #[arg(short, long)]
    pub position: Option<String>,

    /// Only this status (Active, OnLeave, Resigned, Terminated)
    #[arg(short, long)]
    pub status: Option<EmployeeStatus>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Show one employee.
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Employee id
    pub id: u32,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Add a new employee.
#[derive(Debug, Args)]
pub struct AddCommand {
    /// Employee id (defaults to the next free id)
    #[arg(long)]
    pub id: Option<u32>,

    /// Full name
    #[arg(long)]
    pub name: String,

    /// Age in years (18-100)
    #[arg(long)]
    pub age: u32,

    /// Department
    #[arg(long, default_value = "")]
    pub department: String,

    /// Job title
    #[arg(long, default_value = "")]
    pub position: String,

    /// Email address
    #[arg(long, default_value = "")]
    pub email: String,

    /// Phone number
    #[arg(long, default_value = "")]
    pub phone: String,

    /// Annual salary
    #[arg(long)]
    pub salary: Decimal,

    /// Join date, YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub join_date: Option<NaiveDate>,

    /// Vacation balance in days
    #[arg(long, default_value_t = DEFAULT_VACATION_DAYS)]
    pub vacation_days: u32,

    /// Employment status (Active, OnLeave, Resigned, Terminated)
    #[arg(long, default_value = "Active")]
    pub status: EmployeeStatus,
}

/// Edit an existing employee; only the given fields change.
#[derive(Debug, Args)]
pub struct UpdateCommand {
    /// Employee id
    pub id: u32,

    /// Full name
    #[arg(long)]
    pub name: Option<String>,

    /// Age in years (18-100)
    #[arg(long)]
    pub age: Option<u32>,

    /// Department
    #[arg(long)]
    pub department: Option<String>,

    /// Job title
    #[arg(long)]
    pub position: Option<String>,

    /// Email address
    #[arg(long)]
    pub email: Option<String>,

    /// Phone number
    #[arg(long)]
    pub phone: Option<String>,

    /// Annual salary
    #[arg(long)]
    pub salary: Option<Decimal>,

    /// Join date, YYYY-MM-DD
    #[arg(long)]
    pub join_date: Option<NaiveDate>,

    /// Vacation balance in days
    #[arg(long)]
    pub vacation_days: Option<u32>,

    /// Employment status (Active, OnLeave, Resigned, Terminated)
    #[arg(long)]
    pub status: Option<EmployeeStatus>,
}

impl UpdateCommand {
    /// Overwrites the fields given on the command line, leaving the rest
    /// (including attendance history) untouched.
    pub fn apply_to(&self, employee: &mut Employee) {
        if let Some(name) = &self.name {
            employee.name.clone_from(name);
        }
        if let Some(age) = self.age {
            employee.age = age;
        }
        if let Some(department) = &self.department {
            employee.department.clone_from(department);
        }
        if let Some(position) = &self.position {
            employee.position.clone_from(position);
        }
        if let Some(email) = &self.email {
            employee.email.clone_from(email);
        }
        if let Some(phone) = &self.phone {
            employee.phone.clone_from(phone);
        }
        if let Some(salary) = self.salary {
            employee.salary = salary;
        }
        if let Some(join_date) = self.join_date {
            employee.join_date = join_date;
        }
        if let Some(vacation_days) = self.vacation_days {
            employee.vacation_days = vacation_days;
        }
        if let Some(status) = self.status {
            employee.status = status;
        }
    }
}

/// Change one employee's salary by a percentage.
#[derive(Debug, Args)]
pub struct RaiseCommand {
    /// Employee id
    pub id: u32,

    /// Percentage change between -50 and 100
    #[arg(allow_negative_numbers = true)]
    pub percentage: Decimal,

    /// Show the result without saving it
    #[arg(long)]
    pub preview: bool,
}

/// Change every employee's salary by a percentage.
#[derive(Debug, Args)]
pub struct RaiseAllCommand {
    /// Percentage change between -50 and 100
    #[arg(allow_negative_numbers = true)]
    pub percentage: Decimal,
}

/// Vacation balance commands.
#[derive(Debug, Subcommand)]
pub enum VacationCommand {
    /// Grant vacation days
    Add {
        /// Employee id
        id: u32,
        /// Number of days
        #[arg(allow_negative_numbers = true)]
        days: i32,
    },

    /// Take vacation days
    Deduct {
        /// Employee id
        id: u32,
        /// Number of days
        #[arg(allow_negative_numbers = true)]
        days: i32,
    },
}

/// Record attendance for one day.
#[derive(Debug, Args)]
pub struct AttendCommand {
    /// Employee id
    pub id: u32,

    /// Day, YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Present, Absent, Leave, Late or EarlyLeave
    #[arg(long, default_value = "Present")]
    pub status: AttendanceStatus,

    /// Check-in time, HH:MM:SS (defaults to office start when present)
    #[arg(long)]
    pub check_in: Option<NaiveTime>,

    /// Check-out time, HH:MM:SS (defaults to office end when present)
    #[arg(long)]
    pub check_out: Option<NaiveTime>,

    /// Do not fill in office hours for missing times
    #[arg(long)]
    pub no_default_times: bool,

    /// Free-text notes
    #[arg(long)]
    pub notes: Option<String>,
}

impl AttendCommand {
    /// Check-in and check-out times to record.
    ///
    /// Missing times default to office hours for statuses that count as
    /// presence, unless `--no-default-times` is set.
    pub fn resolved_times(
        &self,
        office: &AttendanceConfig,
    ) -> (Option<NaiveTime>, Option<NaiveTime>) {
        if self.no_default_times || !self.status.counts_as_presence() {
            return (self.check_in, self.check_out);
        }
        (
            self.check_in.or(Some(office.office_start)),
            self.check_out.or(Some(office.office_end)),
        )
    }
}

/// Show a month of attendance.
#[derive(Debug, Args)]
pub struct AttendanceCommand {
    /// Employee id
    pub id: u32,

    /// Year (defaults to the current year)
    #[arg(long)]
    pub year: Option<i32>,

    /// Month 1-12 (defaults to the current month)
    #[arg(long)]
    pub month: Option<u32>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Show workforce statistics.
#[derive(Debug, Args)]
pub struct StatsCommand {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Export all employees as CSV.
#[derive(Debug, Args)]
pub struct ExportCommand {
    /// Destination file
    pub path: PathBuf,
}
