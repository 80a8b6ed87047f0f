use chrono::{Datelike, Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::models::{ChartPoint, LogEntry, Timestamp, Window};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartBucket {
    #[default]
    Daily,
    Weekly,
}

impl ChartBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartBucket::Daily => "daily",
            ChartBucket::Weekly => "weekly",
        }
    }

    /// First day of the bucket `date` belongs to. Weeks start on Monday.
    pub fn bucket_start(&self, date: NaiveDate) -> NaiveDate {
        match self {
            ChartBucket::Daily => date,
            ChartBucket::Weekly => {
                date - Duration::days(date.weekday().num_days_from_monday() as i64)
            }
        }
    }
}

impl fmt::Display for ChartBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ChartBucket {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(ChartBucket::Daily),
            "weekly" => Ok(ChartBucket::Weekly),
            _ => Err(Error::UnknownChartBucket(s.to_string())),
        }
    }
}

/// Cumulative series of logs between `from` and `to` (inclusive), one point
/// per bucket that has at least one log.
pub fn chart_series(
    logs: &[LogEntry],
    from: Timestamp,
    to: Timestamp,
    bucket: ChartBucket,
) -> Vec<ChartPoint> {
    let range = Window::new(from, to.aligned_to(from));

    let mut totals: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for log in logs.iter().filter(|log| range.contains(log.date)) {
        let key = bucket.bucket_start(log.date.aligned_to(from).date());
        *totals.entry(key).or_insert(Decimal::ZERO) += log.value;
    }

    let mut cumulative = Decimal::ZERO;
    totals
        .into_iter()
        .map(|(date, value)| {
            cumulative += value;
            ChartPoint {
                date,
                value,
                cumulative,
            }
        })
        .collect()
}
