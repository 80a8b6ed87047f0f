use crate::models::{Goal, TimeframeType, Timestamp, Window};

pub const DEFAULT_ROLLING_DAYS: u32 = 30;
pub const DEFAULT_CYCLE_DAYS: u32 = 7;

fn configured_days(goal: &Goal, default: u32) -> i64 {
    goal.rolling_days.filter(|d| *d > 0).unwrap_or(default) as i64
}

/// Resolve the accounting window of `goal` as seen at `now`.
///
/// The window is always expressed in the awareness mode of `goal.start_at`;
/// `now` and `end_at` are aligned to it before any arithmetic.
pub fn resolve_window(goal: &Goal, now: Timestamp) -> Window {
    let now = now.aligned_to(goal.start_at);

    match &goal.timeframe_type {
        TimeframeType::Fixed => {
            let end = goal.end_at.unwrap_or(now).aligned_to(goal.start_at);
            Window::new(goal.start_at, end)
        }
        TimeframeType::Rolling => {
            let days = configured_days(goal, DEFAULT_ROLLING_DAYS);
            Window::new(now.shifted_days(-days), now)
        }
        TimeframeType::Recurring => {
            let cycle_days = configured_days(goal, DEFAULT_CYCLE_DAYS);
            let cycles = cycles_elapsed(goal, now, cycle_days);
            let start = goal.start_at.shifted_days(cycles * cycle_days);
            Window::new(start, start.shifted_days(cycle_days))
        }
        TimeframeType::Unrecognized(kind) => {
            log::debug!(
                "Goal {} has unrecognized timeframe '{}', measuring from start",
                goal.id,
                kind
            );
            Window::new(goal.start_at, now)
        }
    }
}

/// Index of the cycle containing `now` for recurring goals.
pub fn cycle_index(goal: &Goal, now: Timestamp) -> Option<i64> {
    match goal.timeframe_type {
        TimeframeType::Recurring => {
            let now = now.aligned_to(goal.start_at);
            let cycle_days = configured_days(goal, DEFAULT_CYCLE_DAYS);
            Some(cycles_elapsed(goal, now, cycle_days))
        }
        _ => None,
    }
}

fn cycles_elapsed(goal: &Goal, now: Timestamp, cycle_days: i64) -> i64 {
    now.whole_days_since(goal.start_at).div_euclid(cycle_days)
}
