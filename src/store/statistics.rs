//! Aggregate queries over the employee collection.
//!
//! Everything here is computed on demand from the current collection;
//! nothing is cached.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;

use super::RecordStore;
use crate::error::{StoreError, StoreResult};
use crate::models::{Employee, UNASSIGNED_DEPARTMENT, WorkforceStatistics};

impl RecordStore {
    /// Number of employees.
    pub fn total_employees(&self) -> usize {
        self.employees.len()
    }

    /// Number of employees whose status is Active.
    pub fn active_employees(&self) -> usize {
        self.employees.iter().filter(|e| e.is_active()).count()
    }

    /// Mean annual salary rounded to cents; zero for an empty store.
    pub fn average_salary(&self) -> StoreResult<Decimal> {
        if self.employees.is_empty() {
            return Ok(Decimal::ZERO);
        }
        let total = self.total_annual_payroll()?;
        Ok((total / Decimal::from(self.employees.len())).round_dp(2))
    }

    /// Mean age rounded to one decimal; zero for an empty store.
    pub fn average_age(&self) -> Decimal {
        self.mean(|e| e.age, 1)
    }

    /// Mean years of service as of today.
    pub fn average_years_of_service(&self) -> Decimal {
        self.average_years_of_service_on(Local::now().date_naive())
    }

    /// Mean years of service as of `today`, rounded to one decimal.
    pub fn average_years_of_service_on(&self, today: NaiveDate) -> Decimal {
        self.mean(|e| e.years_of_service_on(today), 1)
    }

    /// Highest annual salary; zero for an empty store.
    pub fn highest_salary(&self) -> Decimal {
        self.employees
            .iter()
            .map(|e| e.salary)
            .max()
            .unwrap_or(Decimal::ZERO)
    }

    /// Lowest annual salary; zero for an empty store.
    pub fn lowest_salary(&self) -> Decimal {
        self.employees
            .iter()
            .map(|e| e.salary)
            .min()
            .unwrap_or(Decimal::ZERO)
    }

    /// Distinct non-blank department names, sorted.
    pub fn departments(&self) -> Vec<String> {
        distinct_non_blank(self.employees.iter().map(|e| e.department.as_str()))
    }

    /// Distinct non-blank positions, sorted.
    pub fn positions(&self) -> Vec<String> {
        distinct_non_blank(self.employees.iter().map(|e| e.position.as_str()))
    }

    /// Headcount per department; blank departments count as "Unassigned".
    pub fn department_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for employee in &self.employees {
            *counts.entry(department_bucket(employee)).or_insert(0) += 1;
        }
        counts
    }

    /// Annual salary total per department; blank departments count as
    /// "Unassigned".
    pub fn department_payroll(&self) -> StoreResult<BTreeMap<String, Decimal>> {
        let mut payroll = BTreeMap::new();
        for employee in &self.employees {
            let department = department_bucket(employee);
            let total = payroll.entry(department.clone()).or_insert(Decimal::ZERO);
            *total = total
                .checked_add(employee.salary)
                .ok_or_else(|| StoreError::Overflow {
                    quantity: format!("Payroll of department {department}"),
                })?;
        }
        Ok(payroll)
    }

    /// Gathers every aggregate as of today.
    pub fn statistics(&self) -> StoreResult<WorkforceStatistics> {
        self.statistics_on(Local::now().date_naive())
    }

    /// Gathers every aggregate, computing service time as of `today`.
    ///
    /// Fails with [`StoreError::Overflow`] when a salary total does not fit
    /// in a `Decimal`.
    pub fn statistics_on(&self, today: NaiveDate) -> StoreResult<WorkforceStatistics> {
        Ok(WorkforceStatistics {
            total_employees: self.total_employees(),
            active_employees: self.active_employees(),
            average_salary: self.average_salary()?,
            average_age: self.average_age(),
            average_years_of_service: self.average_years_of_service_on(today),
            highest_salary: self.highest_salary(),
            lowest_salary: self.lowest_salary(),
            total_annual_payroll: self.total_annual_payroll()?,
            total_monthly_payroll: self.total_monthly_payroll()?,
            departments: self.departments(),
            positions: self.positions(),
            department_counts: self.department_counts(),
            department_payroll: self.department_payroll()?,
        })
    }

    // Whole-number fields summed in u64 cannot overflow for any realistic
    // headcount.
    fn mean(&self, value: impl Fn(&Employee) -> u32, dp: u32) -> Decimal {
        if self.employees.is_empty() {
            return Decimal::ZERO;
        }
        let total: u64 = self.employees.iter().map(|e| u64::from(value(e))).sum();
        (Decimal::from(total) / Decimal::from(self.employees.len())).round_dp(dp)
    }
}

fn department_bucket(employee: &Employee) -> String {
    if employee.department.trim().is_empty() {
        UNASSIGNED_DEPARTMENT.to_string()
    } else {
        employee.department.clone()
    }
}

fn distinct_non_blank<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .filter(|v| !v.trim().is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
