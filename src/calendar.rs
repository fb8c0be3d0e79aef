//! Day classification and month arithmetic.
//!
//! This module provides utilities for deciding whether a date is a working
//! day and for counting the working days in a calendar month, which is the
//! denominator of the attendance percentage. Public holidays are not
//! considered.

use chrono::{Datelike, NaiveDate, Weekday};

/// Represents the type of day for attendance purposes.
///
/// # Example
///
/// ```
/// use employee_records::calendar::DayType;
///
/// let day_type = DayType::Saturday;
/// assert_eq!(day_type.to_string(), "Saturday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayType {
    /// Monday through Friday.
    Weekday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Saturday => write!(f, "Saturday"),
            DayType::Sunday => write!(f, "Sunday"),
        }
    }
}

/// Determines the day type for a given date.
///
/// # Example
///
/// ```
/// use employee_records::calendar::{day_type, DayType};
/// use chrono::NaiveDate;
///
/// // 2026-01-17 is a Saturday
/// let saturday = NaiveDate::from_ymd_opt(2026, 1, 17).unwrap();
/// assert_eq!(day_type(saturday), DayType::Saturday);
///
/// // 2026-01-12 is a Monday
/// let monday = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
/// assert_eq!(day_type(monday), DayType::Weekday);
/// ```
pub fn day_type(date: NaiveDate) -> DayType {
    match date.weekday() {
        Weekday::Sat => DayType::Saturday,
        Weekday::Sun => DayType::Sunday,
        _ => DayType::Weekday,
    }
}

/// Returns true for Monday through Friday.
pub fn is_working_day(date: NaiveDate) -> bool {
    day_type(date) == DayType::Weekday
}

/// Returns the first and last day of a month.
///
/// Returns `None` when `month` is outside 1..=12 or the year is out of
/// chrono's range.
///
/// # Example
///
/// ```
/// use employee_records::calendar::month_bounds;
/// use chrono::NaiveDate;
///
/// let (first, last) = month_bounds(2024, 2).unwrap();
/// assert_eq!(first, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
/// assert_eq!(last, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// assert!(month_bounds(2024, 13).is_none());
/// ```
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((first, next_first.pred_opt()?))
}

/// Counts the Monday–Friday days in a month.
///
/// Returns 0 for an invalid month.
///
/// # Example
///
/// ```
/// use employee_records::calendar::working_days_in_month;
///
/// // July 2024 starts on a Monday and has 23 weekdays.
/// assert_eq!(working_days_in_month(2024, 7), 23);
/// assert_eq!(working_days_in_month(2024, 0), 0);
/// ```
pub fn working_days_in_month(year: i32, month: u32) -> usize {
    let Some((first, last)) = month_bounds(year, month) else {
        return 0;
    };
    first
        .iter_days()
        .take_while(|date| *date <= last)
        .filter(|date| is_working_day(*date))
        .count()
}
