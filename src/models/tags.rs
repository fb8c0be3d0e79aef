//! Serde helpers shared by the persisted models.
//!
//! The backing file may have been written by older tooling that stored
//! status enums as ordinals and dates as full timestamps. These helpers keep
//! reads tolerant while writes stay canonical.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;

/// A closed set of symbolic status tags.
pub(crate) trait StatusTag: Sized + Copy + 'static {
    /// Every variant, in ordinal order.
    const ALL: &'static [Self];

    /// The symbolic name of the variant.
    fn name(self) -> &'static str;
}

/// The on-disk representation of a status tag: an ordinal or a name.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum TagRepr {
    Ordinal(u64),
    Name(String),
}

/// Parses a tag by name, ignoring case and surrounding whitespace.
pub(crate) fn parse_tag<T: StatusTag>(raw: &str) -> Option<T> {
    let raw = raw.trim();
    T::ALL
        .iter()
        .copied()
        .find(|tag| tag.name().eq_ignore_ascii_case(raw))
}

/// Resolves a [`TagRepr`] to its variant.
pub(crate) fn tag_from_repr<T: StatusTag>(repr: TagRepr) -> Result<T, String> {
    match repr {
        TagRepr::Ordinal(n) => usize::try_from(n)
            .ok()
            .and_then(|n| T::ALL.get(n).copied())
            .ok_or_else(|| format!("unknown status ordinal {n}")),
        TagRepr::Name(name) => parse_tag(&name).ok_or_else(|| format!("unknown status '{name}'")),
    }
}

/// Parses a calendar day, truncating a full timestamp to its date.
pub(crate) fn parse_day(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

/// `#[serde(with = "day_date")]` for day-granularity dates.
pub(crate) mod day_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de};

    const FORMAT: &str = "%Y-%m-%d";

    pub(crate) fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(FORMAT))
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_day(&raw).ok_or_else(|| de::Error::custom(format!("invalid date '{raw}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_day_accepts_plain_date() {
        assert_eq!(
            parse_day("2024-01-15"),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
    }

    #[test]
    fn test_parse_day_truncates_timestamps() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 15);
        assert_eq!(parse_day("2024-01-15T00:00:00"), expected);
        assert_eq!(parse_day("2024-01-15T17:45:12.5"), expected);
        assert_eq!(parse_day("2024-01-15T09:00:00+02:00"), expected);
    }

    #[test]
    fn test_parse_day_rejects_garbage() {
        assert_eq!(parse_day("15/01/2024"), None);
        assert_eq!(parse_day(""), None);
    }
}
