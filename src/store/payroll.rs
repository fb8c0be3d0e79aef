//! Salary raises and vacation balances.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

use super::validation::{validate_raise_percentage, validate_vacation_delta};
use super::{RecordStore, employee_mut};
use crate::error::{StoreError, StoreResult};

/// The effect a raise would have on one employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RaisePreview {
    /// Salary before the raise.
    pub current: Decimal,
    /// Salary after the raise.
    pub raised: Decimal,
    /// `raised - current`; negative for a cut.
    pub difference: Decimal,
}

/// Applies a percentage change to `salary`, rounded to cents.
///
/// Returns `None` if the result overflows.
///
/// # Example
///
/// ```
/// use employee_records::store::raised_salary;
/// use rust_decimal::Decimal;
///
/// let raised = raised_salary(Decimal::from(50000), Decimal::from(10)).unwrap();
/// assert_eq!(raised.to_string(), "55000.00");
/// ```
pub fn raised_salary(salary: Decimal, percentage: Decimal) -> Option<Decimal> {
    let factor = Decimal::ONE.checked_add(percentage.checked_div(Decimal::ONE_HUNDRED)?)?;
    let mut raised = salary.checked_mul(factor)?.round_dp(2);
    raised.rescale(2);
    Some(raised)
}

/// Adds up `amounts`, failing instead of panicking on overflow.
fn checked_total(
    amounts: impl IntoIterator<Item = Decimal>,
    quantity: &str,
) -> StoreResult<Decimal> {
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |total, amount| total.checked_add(amount))
        .ok_or_else(|| StoreError::Overflow {
            quantity: quantity.to_string(),
        })
}

fn raise_or_overflow(salary: Decimal, percentage: Decimal) -> StoreResult<Decimal> {
    raised_salary(salary, percentage)
        .ok_or_else(|| StoreError::validation("salary", "Raised salary is out of range."))
}

impl RecordStore {
    /// Sum of annual salaries.
    ///
    /// Fails with [`StoreError::Overflow`] if the total does not fit in a
    /// `Decimal`.
    pub fn total_annual_payroll(&self) -> StoreResult<Decimal> {
        checked_total(self.employees.iter().map(|e| e.salary), "Annual payroll")
    }

    /// Sum of monthly salaries, each rounded to cents first.
    pub fn total_monthly_payroll(&self) -> StoreResult<Decimal> {
        checked_total(
            self.employees.iter().map(|e| e.monthly_salary()),
            "Monthly payroll",
        )
    }

    /// Shows what [`apply_salary_raise`](Self::apply_salary_raise) would do
    /// without changing anything.
    pub fn preview_raise(&self, id: u32, percentage: Decimal) -> StoreResult<RaisePreview> {
        let employee = self.find_by_id(id).ok_or(StoreError::NotFound { id })?;
        validate_raise_percentage(percentage)?;
        let raised = raise_or_overflow(employee.salary, percentage)?;
        Ok(RaisePreview {
            current: employee.salary,
            raised,
            difference: raised - employee.salary,
        })
    }

    /// Changes one employee's salary by `percentage` (between -50 and 100)
    /// and returns the new salary.
    pub fn apply_salary_raise(&mut self, id: u32, percentage: Decimal) -> StoreResult<Decimal> {
        if !self.id_exists(id) {
            return Err(StoreError::NotFound { id });
        }
        validate_raise_percentage(percentage)?;

        let salary = self.commit(|employees| {
            let employee = employee_mut(employees, id)?;
            employee.salary = raise_or_overflow(employee.salary, percentage)?;
            Ok(employee.salary)
        })?;
        info!(employee_id = id, percentage = %percentage, salary = %salary, "Applied salary raise");
        Ok(salary)
    }

    /// Changes every employee's salary by `percentage` in one write and
    /// returns how many employees were updated.
    pub fn apply_raise_to_all(&mut self, percentage: Decimal) -> StoreResult<usize> {
        validate_raise_percentage(percentage)?;

        let count = self.commit(|employees| {
            for employee in employees.iter_mut() {
                employee.salary = raise_or_overflow(employee.salary, percentage)?;
            }
            Ok(employees.len())
        })?;
        info!(percentage = %percentage, employees = count, "Applied salary raise to all employees");
        Ok(count)
    }

    /// Grants vacation days and returns the new balance.
    pub fn add_vacation_days(&mut self, id: u32, days: i32) -> StoreResult<u32> {
        if !self.id_exists(id) {
            return Err(StoreError::NotFound { id });
        }
        let days = validate_vacation_delta(days)?;

        let balance = self.commit(|employees| {
            let employee = employee_mut(employees, id)?;
            employee.vacation_days = employee
                .vacation_days
                .checked_add(days)
                .ok_or_else(|| StoreError::validation("days", "Vacation balance is out of range."))?;
            Ok(employee.vacation_days)
        })?;
        info!(employee_id = id, days, balance, "Added vacation days");
        Ok(balance)
    }

    /// Takes vacation days and returns the new balance.
    ///
    /// Fails without changing anything if the balance is too small.
    pub fn deduct_vacation_days(&mut self, id: u32, days: i32) -> StoreResult<u32> {
        let available = self
            .find_by_id(id)
            .ok_or(StoreError::NotFound { id })?
            .vacation_days;
        let days = validate_vacation_delta(days)?;
        if days > available {
            return Err(StoreError::validation(
                "days",
                format!("Not enough vacation days. Available: {available}"),
            ));
        }

        let balance = self.commit(|employees| {
            let employee = employee_mut(employees, id)?;
            employee.vacation_days -= days;
            Ok(employee.vacation_days)
        })?;
        info!(employee_id = id, days, balance, "Deducted vacation days");
        Ok(balance)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{employee, temp_store};
    use super::*;

    #[test]
    fn test_raised_salary_rounds_and_fixes_scale() {
        assert_eq!(
            raised_salary(Decimal::new(3333333, 2), Decimal::new(33, 1)).unwrap(),
            Decimal::new(3443333, 2)
        );
        assert_eq!(
            raised_salary(Decimal::from(40000), Decimal::from(-50))
                .unwrap()
                .to_string(),
            "20000.00"
        );
    }

    #[test]
    fn test_raised_salary_overflow_is_none() {
        assert!(raised_salary(Decimal::MAX, Decimal::from(100)).is_none());
    }

    #[test]
    fn test_apply_salary_raise_ten_percent() {
        let (_dir, mut store) = temp_store();
        store.add(employee(1, "Alice", "IT", 50000)).unwrap();

        let salary = store.apply_salary_raise(1, Decimal::from(10)).unwrap();
        assert_eq!(salary, Decimal::new(5500000, 2));
        assert_eq!(store.find_by_id(1).unwrap().salary.to_string(), "55000.00");
    }

    #[test]
    fn test_apply_salary_raise_out_of_band_changes_nothing() {
        let (_dir, mut store) = temp_store();
        store.add(employee(1, "Alice", "IT", 50000)).unwrap();

        let error = store.apply_salary_raise(1, Decimal::from(-110)).unwrap_err();
        assert!(error.is_validation());
        assert_eq!(store.find_by_id(1).unwrap().salary, Decimal::from(50000));
    }

    #[test]
    fn test_apply_salary_raise_unknown_employee_checked_first() {
        let (_dir, mut store) = temp_store();
        let error = store.apply_salary_raise(5, Decimal::from(500)).unwrap_err();
        assert!(error.is_not_found());
    }

    #[test]
    fn test_preview_raise_does_not_mutate() {
        let (_dir, mut store) = temp_store();
        store.add(employee(1, "Alice", "IT", 48000)).unwrap();

        let preview = store.preview_raise(1, Decimal::new(-25, 1)).unwrap();
        assert_eq!(preview.current, Decimal::from(48000));
        assert_eq!(preview.raised, Decimal::from(46800));
        assert_eq!(preview.difference, Decimal::from(-1200));
        assert_eq!(store.find_by_id(1).unwrap().salary, Decimal::from(48000));
    }

    #[test]
    fn test_apply_raise_to_all() {
        let (_dir, mut store) = temp_store();
        store.add(employee(1, "Alice", "IT", 50000)).unwrap();
        store.add(employee(2, "Bob", "HR", 30000)).unwrap();

        assert_eq!(store.apply_raise_to_all(Decimal::from(5)).unwrap(), 2);
        assert_eq!(store.find_by_id(1).unwrap().salary, Decimal::from(52500));
        assert_eq!(store.find_by_id(2).unwrap().salary, Decimal::from(31500));
        assert!(store.apply_raise_to_all(Decimal::from(101)).is_err());
    }

    #[test]
    fn test_payroll_totals() {
        let (_dir, mut store) = temp_store();
        assert_eq!(store.total_annual_payroll().unwrap(), Decimal::ZERO);
        store.add(employee(1, "Alice", "IT", 50000)).unwrap();
        store.add(employee(2, "Bob", "HR", 36000)).unwrap();

        assert_eq!(store.total_annual_payroll().unwrap(), Decimal::from(86000));
        // 4166.67 + 3000.00
        assert_eq!(store.total_monthly_payroll().unwrap(), Decimal::new(716667, 2));
    }

    #[test]
    fn test_payroll_total_past_decimal_max_is_an_error() {
        let (_dir, mut store) = temp_store();
        let half = Decimal::MAX / Decimal::from(2) + Decimal::ONE;
        for id in [1, 2] {
            let mut e = employee(id, "Rich", "Board", 0);
            e.salary = half;
            store.add(e).unwrap();
        }

        match store.total_annual_payroll() {
            Err(StoreError::Overflow { quantity }) => assert_eq!(quantity, "Annual payroll"),
            other => panic!("Expected Overflow, got {other:?}"),
        }
        // Twelfths still fit.
        assert!(store.total_monthly_payroll().is_ok());
    }

    #[test]
    fn test_vacation_add_then_deduct_restores_balance() {
        let (_dir, mut store) = temp_store();
        store.add(employee(1, "Alice", "IT", 1)).unwrap();

        assert_eq!(store.add_vacation_days(1, 4).unwrap(), 24);
        assert_eq!(store.deduct_vacation_days(1, 4).unwrap(), 20);
    }

    #[test]
    fn test_deduct_more_than_balance_is_rejected() {
        let (_dir, mut store) = temp_store();
        store.add(employee(1, "Alice", "IT", 1)).unwrap();

        let error = store.deduct_vacation_days(1, 21).unwrap_err();
        assert_eq!(error.to_string(), "Not enough vacation days. Available: 20");
        assert_eq!(store.find_by_id(1).unwrap().vacation_days, 20);
        assert_eq!(store.deduct_vacation_days(1, 20).unwrap(), 0);
    }

    #[test]
    fn test_vacation_days_must_be_positive() {
        let (_dir, mut store) = temp_store();
        store.add(employee(1, "Alice", "IT", 1)).unwrap();

        assert!(store.add_vacation_days(1, 0).unwrap_err().is_validation());
        assert!(store.deduct_vacation_days(1, -3).unwrap_err().is_validation());
        assert!(store.add_vacation_days(2, 1).unwrap_err().is_not_found());
    }
}
