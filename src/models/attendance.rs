//! Attendance records and monthly summaries.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::tags::{StatusTag, TagRepr, day_date, parse_tag, tag_from_repr};
use crate::error::StoreError;

/// What happened on a given working day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "TagRepr")]
pub enum AttendanceStatus {
    /// Worked the full day.
    #[default]
    Present,
    /// Did not show up.
    Absent,
    /// On approved leave.
    Leave,
    /// Arrived late.
    Late,
    /// Left before the end of the day.
    EarlyLeave,
}

impl AttendanceStatus {
    /// Returns true for statuses that count toward attendance percentage.
    pub fn counts_as_presence(self) -> bool {
        matches!(self, Self::Present | Self::Late | Self::EarlyLeave)
    }
}

impl StatusTag for AttendanceStatus {
    const ALL: &'static [Self] = &[
        Self::Present,
        Self::Absent,
        Self::Leave,
        Self::Late,
        Self::EarlyLeave,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Present => "Present",
            Self::Absent => "Absent",
            Self::Leave => "Leave",
            Self::Late => "Late",
            Self::EarlyLeave => "EarlyLeave",
        }
    }
}

impl TryFrom<TagRepr> for AttendanceStatus {
    type Error = String;

    fn try_from(repr: TagRepr) -> Result<Self, Self::Error> {
        tag_from_repr(repr)
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AttendanceStatus {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_tag(s).ok_or_else(|| {
            StoreError::validation("status", format!("Unknown attendance status '{s}'."))
        })
    }
}

/// A single attendance entry for an employee on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AttendanceRecord {
    /// The calendar day this record covers.
    #[serde(with = "day_date")]
    pub date: NaiveDate,
    /// Attendance status for the day.
    #[serde(default)]
    pub status: AttendanceStatus,
    /// Time of arrival.
    #[serde(default)]
    pub check_in: Option<NaiveTime>,
    /// Time of departure.
    #[serde(default)]
    pub check_out: Option<NaiveTime>,
    /// Free-text notes.
    #[serde(default)]
    pub notes: String,
}

impl AttendanceRecord {
    /// Creates a record with no times and no notes.
    pub fn new(date: NaiveDate, status: AttendanceStatus) -> Self {
        Self {
            date,
            status,
            check_in: None,
            check_out: None,
            notes: String::new(),
        }
    }

    /// Returns hours between check-in and check-out, rounded to one decimal.
    ///
    /// `None` unless both times are set and check-out is after check-in.
    ///
    /// # Example
    ///
    /// ```
    /// use employee_records::models::{AttendanceRecord, AttendanceStatus};
    /// use chrono::{NaiveDate, NaiveTime};
    /// use rust_decimal::Decimal;
    ///
    /// let mut record = AttendanceRecord::new(
    ///     NaiveDate::from_ymd_opt(2024, 5, 6).unwrap(),
    ///     AttendanceStatus::Present,
    /// );
    /// record.check_in = NaiveTime::from_hms_opt(8, 0, 0);
    /// record.check_out = NaiveTime::from_hms_opt(16, 45, 0);
    /// assert_eq!(record.worked_hours(), Some(Decimal::new(88, 1)));
    /// ```
    pub fn worked_hours(&self) -> Option<Decimal> {
        let (check_in, check_out) = (self.check_in?, self.check_out?);
        if check_out <= check_in {
            return None;
        }
        let seconds = (check_out - check_in).num_seconds();
        Some((Decimal::from(seconds) / Decimal::from(3600)).round_dp(1))
    }
}

/// Attendance counts for one employee over one month.
///
/// Computed on demand, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct AttendanceSummary {
    /// Days marked present.
    pub present: usize,
    /// Days marked absent.
    pub absent: usize,
    /// Days marked as leave.
    pub leave: usize,
    /// Days marked late.
    pub late: usize,
    /// Days marked as early leave.
    pub early_leave: usize,
    /// Number of records in the month.
    pub recorded_days: usize,
    /// Monday to Friday days in the month.
    pub working_days: usize,
    /// Share of working days with presence, as a percentage to one decimal.
    pub attendance_percentage: Decimal,
}

impl AttendanceSummary {
    /// Tallies `records` against a month with `working_days` weekdays.
    pub fn from_records<'a, I>(records: I, working_days: usize) -> Self
    where
        I: IntoIterator<Item = &'a AttendanceRecord>,
    {
        let mut summary = Self {
            working_days,
            ..Self::default()
        };

        for record in records {
            summary.recorded_days += 1;
            match record.status {
                AttendanceStatus::Present => summary.present += 1,
                AttendanceStatus::Absent => summary.absent += 1,
                AttendanceStatus::Leave => summary.leave += 1,
                AttendanceStatus::Late => summary.late += 1,
                AttendanceStatus::EarlyLeave => summary.early_leave += 1,
            }
        }

        if working_days > 0 {
            let ratio = Decimal::from(summary.effective_presence()) * Decimal::ONE_HUNDRED
                / Decimal::from(working_days);
            summary.attendance_percentage = ratio.round_dp(1);
        }
        summary
    }

    /// Present, late and early-leave days combined.
    pub fn effective_presence(&self) -> usize {
        self.present + self.late + self.early_leave
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, d).unwrap()
    }

    fn record(d: u32, status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord::new(day(d), status)
    }

    #[test]
    fn test_deserialize_ordinal_status_and_timestamp() {
        let json = r#"{
            "Date": "2024-07-03T00:00:00",
            "Status": 3,
            "CheckIn": "09:15:00",
            "CheckOut": "17:00:00",
            "Notes": "traffic"
        }"#;

        let record: AttendanceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.date, day(3));
        assert_eq!(record.status, AttendanceStatus::Late);
        assert_eq!(record.check_in, NaiveTime::from_hms_opt(9, 15, 0));
        assert_eq!(record.notes, "traffic");
    }

    #[test]
    fn test_serialize_omits_nothing_and_uses_names() {
        let value = serde_json::to_value(record(3, AttendanceStatus::EarlyLeave)).unwrap();
        assert_eq!(value["Date"], "2024-07-03");
        assert_eq!(value["Status"], "EarlyLeave");
        assert!(value["CheckIn"].is_null());
        assert_eq!(value["Notes"], "");
    }

    #[test]
    fn test_worked_hours_requires_both_times_in_order() {
        let mut entry = record(1, AttendanceStatus::Present);
        assert_eq!(entry.worked_hours(), None);

        entry.check_in = NaiveTime::from_hms_opt(9, 0, 0);
        entry.check_out = NaiveTime::from_hms_opt(8, 0, 0);
        assert_eq!(entry.worked_hours(), None);

        entry.check_out = NaiveTime::from_hms_opt(17, 30, 0);
        assert_eq!(entry.worked_hours(), Some(Decimal::new(85, 1)));
    }

    #[test]
    fn test_counts_as_presence() {
        assert!(AttendanceStatus::Present.counts_as_presence());
        assert!(AttendanceStatus::Late.counts_as_presence());
        assert!(AttendanceStatus::EarlyLeave.counts_as_presence());
        assert!(!AttendanceStatus::Absent.counts_as_presence());
        assert!(!AttendanceStatus::Leave.counts_as_presence());
    }

    #[test]
    fn test_summary_counts_each_status() {
        let records = vec![
            record(1, AttendanceStatus::Present),
            record(2, AttendanceStatus::Absent),
            record(3, AttendanceStatus::Leave),
            record(4, AttendanceStatus::Late),
            record(5, AttendanceStatus::EarlyLeave),
        ];

        let summary = AttendanceSummary::from_records(&records, 23);
        assert_eq!(summary.present, 1);
        assert_eq!(summary.absent, 1);
        assert_eq!(summary.leave, 1);
        assert_eq!(summary.late, 1);
        assert_eq!(summary.early_leave, 1);
        assert_eq!(summary.recorded_days, 5);
        assert_eq!(summary.effective_presence(), 3);
        // 3 / 23 = 13.04...
        assert_eq!(summary.attendance_percentage, Decimal::new(130, 1));
    }

    #[test]
    fn test_summary_percentage_is_zero_without_working_days() {
        let records = vec![record(1, AttendanceStatus::Present)];
        let summary = AttendanceSummary::from_records(&records, 0);
        assert_eq!(summary.attendance_percentage, Decimal::ZERO);
    }

    #[test]
    fn test_status_from_str() {
        assert!("early_leave".parse::<AttendanceStatus>().is_err());
        assert_eq!(
            "earlyleave".parse::<AttendanceStatus>().unwrap(),
            AttendanceStatus::EarlyLeave
        );
    }
}
