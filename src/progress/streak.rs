use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::models::{Goal, GoalType, LogEntry, Streak, Window};

/// Current and best run of consecutive active days inside `window`.
///
/// Only streak goals have streaks; every other goal type reports zero.
pub fn compute_streak(goal: &Goal, logs: &[LogEntry], window: &Window) -> Streak {
    if goal.goal_type != GoalType::Streak {
        return Streak::default();
    }
    let days = activity_by_date(logs.iter());
    streak_between(&days, window.start.date(), window.end.date())
}

/// Bucket logs by calendar date; a day is active if any of its logs is positive.
pub(crate) fn activity_by_date<'a>(
    logs: impl IntoIterator<Item = &'a LogEntry>,
) -> BTreeMap<NaiveDate, bool> {
    let mut days: BTreeMap<NaiveDate, bool> = BTreeMap::new();
    for log in logs {
        let active = days.entry(log.date.date()).or_insert(false);
        *active |= log.value > Decimal::ZERO;
    }
    days
}

/// Walk every date in `from..=to`. Missing days and days with only zero
/// values both break the run; `current` is the run still open on `to`.
pub(crate) fn streak_between(
    days: &BTreeMap<NaiveDate, bool>,
    from: NaiveDate,
    to: NaiveDate,
) -> Streak {
    let mut running = 0u32;
    let mut best = 0u32;

    for date in from.iter_days().take_while(|d| *d <= to) {
        if days.get(&date).copied().unwrap_or(false) {
            running += 1;
            best = best.max(running);
        } else {
            running = 0;
        }
    }

    Streak {
        current: running,
        best,
    }
}
