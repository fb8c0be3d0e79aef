//! Attendance marking and monthly rollups.

use chrono::{Datelike, NaiveDate, NaiveTime};
use tracing::info;

use super::{RecordStore, employee_mut};
use crate::calendar::working_days_in_month;
use crate::error::{StoreError, StoreResult};
use crate::models::{AttendanceRecord, AttendanceStatus, AttendanceSummary};

/// Whether marking attendance created a new record or replaced one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceUpsert {
    /// No record existed for the day.
    Created,
    /// The existing record for the day was overwritten.
    Updated,
}

impl RecordStore {
    /// Records attendance for one calendar day.
    ///
    /// `date` is truncated to its calendar day, so a timestamp marks the
    /// day it falls on. An existing record for that day is overwritten;
    /// otherwise a new one is appended. Notes are trimmed. Check-in and
    /// check-out ordering is not validated here; see
    /// [`validate_attendance_times`](super::validate_attendance_times).
    pub fn mark_attendance<D: Datelike>(
        &mut self,
        id: u32,
        date: D,
        status: AttendanceStatus,
        check_in: Option<NaiveTime>,
        check_out: Option<NaiveTime>,
        notes: Option<&str>,
    ) -> StoreResult<AttendanceUpsert> {
        if !self.id_exists(id) {
            return Err(StoreError::NotFound { id });
        }
        let day = NaiveDate::from_ymd_opt(date.year(), date.month(), date.day())
            .ok_or_else(|| StoreError::validation("date", "Invalid attendance date."))?;
        let notes = notes.map(str::trim).unwrap_or_default().to_string();

        let upsert = self.commit(|employees| {
            let employee = employee_mut(employees, id)?;
            let (record, upsert) = match employee.attendance.iter().position(|r| r.date == day) {
                Some(index) => (&mut employee.attendance[index], AttendanceUpsert::Updated),
                None => {
                    employee.attendance.push(AttendanceRecord::new(day, status));
                    let last = employee.attendance.len() - 1;
                    (&mut employee.attendance[last], AttendanceUpsert::Created)
                }
            };
            record.status = status;
            record.check_in = check_in;
            record.check_out = check_out;
            record.notes = notes;
            Ok(upsert)
        })?;

        info!(
            employee_id = id,
            date = %day,
            status = %status,
            upsert = ?upsert,
            "Marked attendance"
        );
        Ok(upsert)
    }

    /// Returns an employee's attendance records for a month, newest first.
    pub fn attendance_for_month(
        &self,
        id: u32,
        year: i32,
        month: u32,
    ) -> StoreResult<Vec<&AttendanceRecord>> {
        let employee = self.find_by_id(id).ok_or(StoreError::NotFound { id })?;
        let mut records: Vec<&AttendanceRecord> = employee
            .attendance
            .iter()
            .filter(|r| r.date.year() == year && r.date.month() == month)
            .collect();
        records.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(records)
    }

    /// Summarises an employee's attendance for a month.
    ///
    /// The percentage is measured against the Monday–Friday days of the
    /// month, regardless of how many days were recorded.
    pub fn attendance_summary_for_month(
        &self,
        id: u32,
        year: i32,
        month: u32,
    ) -> StoreResult<AttendanceSummary> {
        let records = self.attendance_for_month(id, year, month)?;
        Ok(AttendanceSummary::from_records(
            records,
            working_days_in_month(year, month),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{employee, temp_store};
    use super::*;
    use chrono::NaiveDateTime;
    use rust_decimal::Decimal;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_mark_twice_same_day_upserts() {
        let (_dir, mut store) = temp_store();
        store.add(employee(1, "Alice", "IT", 1)).unwrap();

        let first = store
            .mark_attendance(1, date(2024, 7, 1), AttendanceStatus::Present, None, None, None)
            .unwrap();
        let second = store
            .mark_attendance(
                1,
                date(2024, 7, 1),
                AttendanceStatus::Late,
                NaiveTime::from_hms_opt(9, 40, 0),
                NaiveTime::from_hms_opt(18, 0, 0),
                Some("  bus strike  "),
            )
            .unwrap();

        assert_eq!(first, AttendanceUpsert::Created);
        assert_eq!(second, AttendanceUpsert::Updated);
        let records = &store.find_by_id(1).unwrap().attendance;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].status, AttendanceStatus::Late);
        assert_eq!(records[0].notes, "bus strike");
        assert_eq!(records[0].check_in, NaiveTime::from_hms_opt(9, 40, 0));
    }

    #[test]
    fn test_mark_clears_optional_fields_on_overwrite() {
        let (_dir, mut store) = temp_store();
        store.add(employee(1, "Alice", "IT", 1)).unwrap();
        store
            .mark_attendance(
                1,
                date(2024, 7, 2),
                AttendanceStatus::Present,
                NaiveTime::from_hms_opt(8, 0, 0),
                NaiveTime::from_hms_opt(17, 0, 0),
                Some("on time"),
            )
            .unwrap();
        store
            .mark_attendance(1, date(2024, 7, 2), AttendanceStatus::Absent, None, None, None)
            .unwrap();

        let record = store.find_by_id(1).unwrap().attendance_on(date(2024, 7, 2)).unwrap();
        assert_eq!(record.check_in, None);
        assert_eq!(record.check_out, None);
        assert!(record.notes.is_empty());
    }

    #[test]
    fn test_mark_truncates_timestamp_to_day() {
        let (_dir, mut store) = temp_store();
        store.add(employee(1, "Alice", "IT", 1)).unwrap();
        let morning =
            NaiveDateTime::parse_from_str("2024-07-03 08:15:00", "%Y-%m-%d %H:%M:%S").unwrap();
        let evening =
            NaiveDateTime::parse_from_str("2024-07-03 19:45:00", "%Y-%m-%d %H:%M:%S").unwrap();

        store
            .mark_attendance(1, morning, AttendanceStatus::Present, None, None, None)
            .unwrap();
        let upsert = store
            .mark_attendance(1, evening, AttendanceStatus::EarlyLeave, None, None, None)
            .unwrap();

        assert_eq!(upsert, AttendanceUpsert::Updated);
        let records = &store.find_by_id(1).unwrap().attendance;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].date, date(2024, 7, 3));
    }

    #[test]
    fn test_mark_unknown_employee_is_not_found() {
        let (_dir, mut store) = temp_store();
        let error = store
            .mark_attendance(9, date(2024, 7, 1), AttendanceStatus::Present, None, None, None)
            .unwrap_err();
        assert!(error.is_not_found());
    }

    #[test]
    fn test_month_filter_and_descending_order() {
        let (_dir, mut store) = temp_store();
        store.add(employee(1, "Alice", "IT", 1)).unwrap();
        for d in [date(2024, 7, 2), date(2024, 6, 30), date(2024, 7, 15), date(2023, 7, 10)] {
            store
                .mark_attendance(1, d, AttendanceStatus::Present, None, None, None)
                .unwrap();
        }

        let dates: Vec<NaiveDate> = store
            .attendance_for_month(1, 2024, 7)
            .unwrap()
            .iter()
            .map(|r| r.date)
            .collect();
        assert_eq!(dates, vec![date(2024, 7, 15), date(2024, 7, 2)]);
    }

    #[test]
    fn test_month_queries_unknown_employee_is_not_found() {
        let (_dir, store) = temp_store();
        assert!(store.attendance_for_month(1, 2024, 7).unwrap_err().is_not_found());
        assert!(
            store
                .attendance_summary_for_month(1, 2024, 7)
                .unwrap_err()
                .is_not_found()
        );
    }

    #[test]
    fn test_summary_against_weekdays() {
        let (_dir, mut store) = temp_store();
        store.add(employee(1, "Alice", "IT", 1)).unwrap();
        // September 2025 has 22 weekdays.
        store
            .mark_attendance(1, date(2025, 9, 1), AttendanceStatus::Present, None, None, None)
            .unwrap();
        store
            .mark_attendance(1, date(2025, 9, 2), AttendanceStatus::Late, None, None, None)
            .unwrap();
        store
            .mark_attendance(1, date(2025, 9, 3), AttendanceStatus::Absent, None, None, None)
            .unwrap();

        let summary = store.attendance_summary_for_month(1, 2025, 9).unwrap();
        assert_eq!(summary.working_days, 22);
        assert_eq!(summary.recorded_days, 3);
        // 2 / 22 = 9.09...
        assert_eq!(summary.attendance_percentage, Decimal::new(91, 1));
    }

    #[test]
    fn test_summary_invalid_month_is_zero() {
        let (_dir, mut store) = temp_store();
        store.add(employee(1, "Alice", "IT", 1)).unwrap();
        let summary = store.attendance_summary_for_month(1, 2025, 13).unwrap();
        assert_eq!(summary.working_days, 0);
        assert_eq!(summary.attendance_percentage, Decimal::ZERO);
    }
}
