use chrono::{Datelike, Months, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::models::{HeatmapCell, LogEntry};

pub const MAX_INTENSITY: u8 = 4;

/// Parse `YYYY-MM` into the first day of that month.
pub fn parse_month(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d")
        .map_err(|_| Error::InvalidMonth(s.to_string()))
}

/// Per-day totals for the calendar month starting at `month`.
pub fn month_heatmap(logs: &[LogEntry], month: NaiveDate) -> Vec<HeatmapCell> {
    let first = month.with_day0(0).unwrap_or(month);
    let next = first.checked_add_months(Months::new(1));

    let mut totals: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for log in logs {
        let date = log.date.date();
        let in_month = date >= first && next.is_none_or(|next| date < next);
        if in_month {
            *totals.entry(date).or_insert(Decimal::ZERO) += log.value;
        }
    }

    totals
        .into_iter()
        .map(|(date, value)| HeatmapCell {
            date,
            value,
            intensity: intensity(value),
        })
        .collect()
}

/// Whole units logged that day, capped at [`MAX_INTENSITY`].
pub fn intensity(value: Decimal) -> u8 {
    value
        .trunc()
        .to_i64()
        .unwrap_or(i64::MAX)
        .clamp(0, MAX_INTENSITY as i64) as u8
}
