//! Field constraints enforced before any mutation.

use chrono::NaiveTime;
use rust_decimal::Decimal;

use crate::error::{StoreError, StoreResult};
use crate::models::Employee;

/// Youngest age accepted for an employee.
pub const MIN_AGE: u32 = 18;
/// Oldest age accepted for an employee.
pub const MAX_AGE: u32 = 100;
/// Lowest accepted raise percentage (a 50% cut).
pub const MIN_RAISE_PERCENTAGE: i64 = -50;
/// Highest accepted raise percentage.
pub const MAX_RAISE_PERCENTAGE: i64 = 100;

/// Checks the constraints shared by add and update.
pub fn validate_employee(employee: &Employee) -> StoreResult<()> {
    if employee.id == 0 {
        return Err(StoreError::validation(
            "id",
            "Employee ID must be a positive number.",
        ));
    }
    if employee.name.trim().is_empty() {
        return Err(StoreError::validation("name", "Employee name is required."));
    }
    if !(MIN_AGE..=MAX_AGE).contains(&employee.age) {
        return Err(StoreError::validation(
            "age",
            format!("Age must be between {MIN_AGE} and {MAX_AGE}."),
        ));
    }
    if employee.salary < Decimal::ZERO {
        return Err(StoreError::validation("salary", "Salary cannot be negative."));
    }
    if !employee.email.trim().is_empty() && !employee.email.contains('@') {
        return Err(StoreError::validation("email", "Invalid email format."));
    }
    Ok(())
}

/// Checks that a raise percentage lies within the accepted band.
pub fn validate_raise_percentage(percentage: Decimal) -> StoreResult<()> {
    let range = Decimal::from(MIN_RAISE_PERCENTAGE)..=Decimal::from(MAX_RAISE_PERCENTAGE);
    if range.contains(&percentage) {
        Ok(())
    } else {
        Err(StoreError::validation(
            "percentage",
            format!(
                "Raise percentage must be between {MIN_RAISE_PERCENTAGE}% and {MAX_RAISE_PERCENTAGE}%."
            ),
        ))
    }
}

/// Checks that a vacation adjustment is a positive number of days.
pub fn validate_vacation_delta(days: i32) -> StoreResult<u32> {
    u32::try_from(days)
        .ok()
        .filter(|days| *days > 0)
        .ok_or_else(|| StoreError::validation("days", "Days must be positive."))
}

/// Checks that check-out follows check-in when both are given.
///
/// The store itself accepts any pair; front ends call this before
/// marking attendance.
///
/// # Example
///
/// ```
/// use employee_records::store::validate_attendance_times;
/// use chrono::NaiveTime;
///
/// let nine = NaiveTime::from_hms_opt(9, 0, 0);
/// let five = NaiveTime::from_hms_opt(17, 0, 0);
/// assert!(validate_attendance_times(nine, five).is_ok());
/// assert!(validate_attendance_times(five, nine).is_err());
/// assert!(validate_attendance_times(nine, None).is_ok());
/// ```
pub fn validate_attendance_times(
    check_in: Option<NaiveTime>,
    check_out: Option<NaiveTime>,
) -> StoreResult<()> {
    match (check_in, check_out) {
        (Some(check_in), Some(check_out)) if check_out <= check_in => Err(StoreError::validation(
            "check_out",
            "Check-out time must be after check-in time.",
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EmployeeStatus;
    use chrono::NaiveDate;

    fn valid_employee() -> Employee {
        Employee {
            id: 1,
            name: "Ali Hassan".to_string(),
            age: 30,
            department: "IT".to_string(),
            position: "Analyst".to_string(),
            email: "ali@example.com".to_string(),
            phone: String::new(),
            salary: Decimal::new(45000, 0),
            join_date: NaiveDate::from_ymd_opt(2021, 4, 1).unwrap(),
            vacation_days: 20,
            status: EmployeeStatus::Active,
            attendance: vec![],
        }
    }

    fn rejected_field(employee: &Employee) -> String {
        match validate_employee(employee) {
            Err(StoreError::Validation { field, .. }) => field,
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_employee_passes() {
        assert!(validate_employee(&valid_employee()).is_ok());
    }

    #[test]
    fn test_zero_id_is_rejected() {
        let mut employee = valid_employee();
        employee.id = 0;
        assert_eq!(rejected_field(&employee), "id");
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let mut employee = valid_employee();
        employee.name = "   ".to_string();
        assert_eq!(rejected_field(&employee), "name");
    }

    #[test]
    fn test_age_bounds_are_inclusive() {
        let mut employee = valid_employee();
        employee.age = 18;
        assert!(validate_employee(&employee).is_ok());
        employee.age = 100;
        assert!(validate_employee(&employee).is_ok());
        employee.age = 17;
        assert_eq!(rejected_field(&employee), "age");
        employee.age = 101;
        assert_eq!(rejected_field(&employee), "age");
    }

    #[test]
    fn test_negative_salary_is_rejected_but_zero_is_fine() {
        let mut employee = valid_employee();
        employee.salary = Decimal::ZERO;
        assert!(validate_employee(&employee).is_ok());
        employee.salary = Decimal::new(-1, 2);
        assert_eq!(rejected_field(&employee), "salary");
    }

    #[test]
    fn test_email_needs_at_sign_only_when_present() {
        let mut employee = valid_employee();
        employee.email = String::new();
        assert!(validate_employee(&employee).is_ok());
        employee.email = "ali.example.com".to_string();
        assert_eq!(rejected_field(&employee), "email");
    }

    #[test]
    fn test_raise_percentage_band() {
        assert!(validate_raise_percentage(Decimal::from(-50)).is_ok());
        assert!(validate_raise_percentage(Decimal::from(100)).is_ok());
        assert!(validate_raise_percentage(Decimal::new(-501, 1)).is_err());
        let error = validate_raise_percentage(Decimal::from(-110)).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Raise percentage must be between -50% and 100%."
        );
    }

    #[test]
    fn test_vacation_delta_must_be_positive() {
        assert_eq!(validate_vacation_delta(3).unwrap(), 3);
        assert!(validate_vacation_delta(0).unwrap_err().is_validation());
        assert!(validate_vacation_delta(-2).unwrap_err().is_validation());
    }

    #[test]
    fn test_attendance_times_equal_is_rejected() {
        let nine = NaiveTime::from_hms_opt(9, 0, 0);
        assert!(validate_attendance_times(nine, nine).is_err());
        assert!(validate_attendance_times(None, nine).is_ok());
    }
}
