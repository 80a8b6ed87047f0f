use chrono::{
    DateTime, Duration, FixedOffset, NaiveDate, NaiveDateTime, SecondsFormat, Utc,
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// A point in time that remembers whether it carried a UTC offset.
///
/// Goals and logs may arrive with or without offsets. Two timestamps are only
/// compared after one has been brought into the other's mode with
/// [`Timestamp::aligned_to`]: a naive value is read as UTC, an aware value
/// keeps its wall-clock reading and drops the offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Timestamp {
    Aware(DateTime<FixedOffset>),
    Naive(NaiveDateTime),
}

impl Timestamp {
    /// Current instant, offset-aware in UTC.
    pub fn now() -> Self {
        Timestamp::Aware(Utc::now().fixed_offset())
    }

    pub fn is_aware(&self) -> bool {
        matches!(self, Timestamp::Aware(_))
    }

    /// Wall-clock reading, ignoring any offset.
    pub fn naive(&self) -> NaiveDateTime {
        match self {
            Timestamp::Aware(dt) => dt.naive_local(),
            Timestamp::Naive(dt) => *dt,
        }
    }

    /// Calendar date on the value's own wall clock.
    pub fn date(&self) -> NaiveDate {
        self.naive().date()
    }

    /// Bring `self` into the awareness mode of `reference`.
    pub fn aligned_to(self, reference: Timestamp) -> Timestamp {
        match (self, reference) {
            (Timestamp::Naive(dt), Timestamp::Aware(_)) => {
                Timestamp::Aware(dt.and_utc().fixed_offset())
            }
            (Timestamp::Aware(dt), Timestamp::Naive(_)) => Timestamp::Naive(dt.naive_local()),
            (ts, _) => ts,
        }
    }

    /// Attach `offset` to a naive value. Aware values are returned unchanged.
    pub fn with_offset(self, offset: FixedOffset) -> Timestamp {
        match self {
            Timestamp::Naive(dt) => Timestamp::Aware(
                dt.and_local_timezone(offset)
                    .single()
                    .unwrap_or_else(|| dt.and_utc().fixed_offset()),
            ),
            aware => aware,
        }
    }

    /// Order `self` against `other` after aligning `other` to `self`.
    pub fn cmp_aligned(&self, other: &Timestamp) -> Ordering {
        match (*self, other.aligned_to(*self)) {
            (Timestamp::Aware(a), Timestamp::Aware(b)) => a.cmp(&b),
            (a, b) => a.naive().cmp(&b.naive()),
        }
    }

    pub fn signed_duration_since(self, earlier: Timestamp) -> Duration {
        match (self, earlier.aligned_to(self)) {
            (Timestamp::Aware(a), Timestamp::Aware(b)) => a.signed_duration_since(b),
            (a, b) => a.naive().signed_duration_since(b.naive()),
        }
    }

    /// Whole days from `earlier` to `self`, rounded toward negative infinity.
    pub fn whole_days_since(self, earlier: Timestamp) -> i64 {
        let delta = self.signed_duration_since(earlier);
        let days = delta.num_days();
        if delta < Duration::days(days) {
            days - 1
        } else {
            days
        }
    }

    /// Shift by a number of days (negative moves backwards).
    pub fn shifted_days(self, days: i64) -> Timestamp {
        let shifted = Duration::try_days(days).and_then(|delta| match self {
            Timestamp::Aware(dt) => dt.checked_add_signed(delta).map(Timestamp::Aware),
            Timestamp::Naive(dt) => dt.checked_add_signed(delta).map(Timestamp::Naive),
        });
        shifted.unwrap_or_else(|| {
            log::warn!("Shifting {} by {} days is out of range", self, days);
            self
        })
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timestamp::Aware(dt) => {
                write!(f, "{}", dt.to_rfc3339_opts(SecondsFormat::AutoSi, true))
            }
            Timestamp::Naive(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S%.f")),
        }
    }
}

impl FromStr for Timestamp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Timestamp::Aware(dt));
        }
        if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M%:z") {
            return Ok(Timestamp::Aware(dt));
        }
        for format in NAIVE_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
                return Ok(Timestamp::Naive(dt));
            }
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(Timestamp::Naive)
            .ok_or_else(|| Error::InvalidTimestamp(s.to_string()))
    }
}

impl TryFrom<String> for Timestamp {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Timestamp> for String {
    fn from(value: Timestamp) -> Self {
        value.to_string()
    }
}

impl From<DateTime<FixedOffset>> for Timestamp {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Timestamp::Aware(value)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Timestamp::Aware(value.fixed_offset())
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(value: NaiveDateTime) -> Self {
        Timestamp::Naive(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> Timestamp {
        s.parse().unwrap()
    }

    #[test]
    fn parses_aware_and_naive_forms() {
        assert!(ts("2025-01-01T00:00:00Z").is_aware());
        assert!(ts("2025-01-01T08:30:00+07:00").is_aware());
        assert!(ts("2025-01-01T08:30+07:00").is_aware());
        assert!(!ts("2025-01-01T08:30:00").is_aware());
        assert!(!ts("2025-01-01 08:30:00.250").is_aware());
        assert_eq!(ts("2025-01-01"), ts("2025-01-01T00:00:00"));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(
            "yesterday".parse::<Timestamp>(),
            Err(Error::InvalidTimestamp("yesterday".to_string()))
        );
    }

    #[test]
    fn naive_aligned_to_aware_is_read_as_utc() {
        let aligned = ts("2025-03-01T10:00:00").aligned_to(ts("2025-01-01T00:00:00+07:00"));
        assert_eq!(aligned, ts("2025-03-01T10:00:00Z"));
    }

    #[test]
    fn aware_aligned_to_naive_keeps_wall_clock() {
        let aligned = ts("2025-03-01T23:30:00+07:00").aligned_to(ts("2025-01-01T00:00:00"));
        assert_eq!(aligned, ts("2025-03-01T23:30:00"));
    }

    #[test]
    fn date_uses_local_wall_clock() {
        let late = ts("2025-03-01T23:30:00-05:00");
        assert_eq!(late.date(), NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
    }

    #[test]
    fn aware_values_compare_as_instants() {
        let a = ts("2025-03-01T10:00:00+02:00");
        let b = ts("2025-03-01T09:00:00Z");
        assert_eq!(a.cmp_aligned(&b), Ordering::Less);
    }

    #[test]
    fn whole_days_floor_toward_negative_infinity() {
        let start = ts("2025-01-10T00:00:00Z");
        assert_eq!(ts("2025-01-12T23:00:00Z").whole_days_since(start), 2);
        assert_eq!(ts("2025-01-09T23:00:00Z").whole_days_since(start), -1);
        assert_eq!(ts("2025-01-10T00:00:00Z").whole_days_since(start), 0);
    }

    #[test]
    fn with_offset_only_touches_naive_values() {
        let offset = FixedOffset::east_opt(7 * 3600).unwrap();
        assert_eq!(
            ts("2025-01-01T09:00:00").with_offset(offset),
            ts("2025-01-01T09:00:00+07:00")
        );
        let aware = ts("2025-01-01T09:00:00Z");
        assert_eq!(aware.with_offset(offset), aware);
    }

    #[test]
    fn serializes_as_string() {
        let json = serde_json::to_string(&ts("2025-01-01T09:00:00Z")).unwrap();
        assert_eq!(json, "\"2025-01-01T09:00:00Z\"");
        let back: Timestamp = serde_json::from_str("\"2025-01-01T09:00:00\"").unwrap();
        assert_eq!(back, ts("2025-01-01T09:00:00"));
    }
}
