//! Workforce statistics snapshot.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

/// Bucket name for employees without a department.
pub const UNASSIGNED_DEPARTMENT: &str = "Unassigned";

/// Every aggregate the store can compute, gathered at one point in time.
///
/// Averages are zero for an empty store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkforceStatistics {
    /// Number of employees.
    pub total_employees: usize,
    /// Number of employees with status Active.
    pub active_employees: usize,
    /// Mean annual salary, rounded to cents.
    pub average_salary: Decimal,
    /// Mean age, rounded to one decimal.
    pub average_age: Decimal,
    /// Mean whole years of service, rounded to one decimal.
    pub average_years_of_service: Decimal,
    /// Highest annual salary.
    pub highest_salary: Decimal,
    /// Lowest annual salary.
    pub lowest_salary: Decimal,
    /// Sum of annual salaries.
    pub total_annual_payroll: Decimal,
    /// Sum of monthly salaries.
    pub total_monthly_payroll: Decimal,
    /// Distinct department names, sorted.
    pub departments: Vec<String>,
    /// Distinct position titles, sorted.
    pub positions: Vec<String>,
    /// Headcount per department.
    pub department_counts: BTreeMap<String, usize>,
    /// Annual salary total per department.
    pub department_payroll: BTreeMap<String, Decimal>,
}
