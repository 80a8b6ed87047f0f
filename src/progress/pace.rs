use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::models::{Goal, Timestamp, Window};

const FULL: f64 = 100.0;

/// Share of the target reached, clamped to `0..=100`.
///
/// Open goals and goals without a target have no completion percentage.
/// A zero target counts as complete as soon as anything positive is logged.
pub fn progress_percent(goal: &Goal, achieved_value: Decimal) -> f64 {
    let Some(target) = goal.measurable_target() else {
        return 0.0;
    };

    if target.is_zero() {
        return if achieved_value > Decimal::ZERO { FULL } else { 0.0 };
    }

    let pct = achieved_value
        .checked_div(target)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .and_then(|pct| pct.to_f64())
        .unwrap_or(FULL);

    pct.clamp(0.0, FULL)
}

/// Value per day needed from `now` until the window closes.
///
/// This spreads the whole target over the remaining days rather than the
/// outstanding deficit. At least one day always remains.
pub fn required_pace(goal: &Goal, now: Timestamp, window: &Window) -> f64 {
    let Some(target) = goal.measurable_target() else {
        return 0.0;
    };

    if window.whole_days() <= 0 {
        return 0.0;
    }

    let remaining_days = window.end.whole_days_since(now).max(1);
    per_day(target, remaining_days)
}

/// Value per day actually achieved over the whole window.
pub fn actual_pace(achieved_value: Decimal, window: &Window) -> f64 {
    let total_days = window.whole_days();
    if total_days <= 0 {
        return 0.0;
    }
    per_day(achieved_value, total_days)
}

fn per_day(value: Decimal, days: i64) -> f64 {
    value
        .checked_div(Decimal::from(days))
        .and_then(|v| v.to_f64())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GoalType;
    use rust_decimal_macros::dec;

    fn ts(s: &str) -> Timestamp {
        s.parse().unwrap()
    }

    fn goal(goal_type: GoalType, target: Option<Decimal>) -> Goal {
        Goal {
            id: 1,
            name: "Pushups".to_string(),
            emoji: String::new(),
            goal_type,
            unit: "reps".to_string(),
            target,
            timeframe_type: "fixed".into(),
            start_at: ts("2025-01-01T00:00:00Z"),
            end_at: Some(ts("2025-01-11T00:00:00Z")),
            rolling_days: None,
            status: Default::default(),
            milestones: vec![],
        }
    }

    fn ten_days() -> Window {
        Window::new(ts("2025-01-01T00:00:00Z"), ts("2025-01-11T00:00:00Z"))
    }

    #[test]
    fn open_or_untargeted_goals_report_zero() {
        let open = goal(GoalType::Open, Some(dec!(50)));
        let untargeted = goal(GoalType::Count, None);
        for g in [&open, &untargeted] {
            assert_eq!(progress_percent(g, dec!(500)), 0.0);
            assert_eq!(required_pace(g, ts("2025-01-05T00:00:00Z"), &ten_days()), 0.0);
        }
    }

    #[test]
    fn percent_is_clamped_at_one_hundred() {
        let g = goal(GoalType::Sum, Some(dec!(100)));
        assert_eq!(progress_percent(&g, dec!(40)), 40.0);
        assert_eq!(progress_percent(&g, dec!(100)), 100.0);
        assert_eq!(progress_percent(&g, dec!(150)), 100.0);
    }

    #[test]
    fn zero_target_rewards_any_activity() {
        let g = goal(GoalType::Count, Some(Decimal::ZERO));
        assert_eq!(progress_percent(&g, dec!(0.01)), 100.0);
        assert_eq!(progress_percent(&g, Decimal::ZERO), 0.0);
    }

    #[test]
    fn required_pace_spreads_full_target_over_remaining_days() {
        let g = goal(GoalType::Count, Some(dec!(100)));
        let pace = required_pace(&g, ts("2025-01-07T00:00:00Z"), &ten_days());
        assert_eq!(pace, 25.0);
    }

    #[test]
    fn required_pace_never_divides_by_less_than_one_day() {
        let g = goal(GoalType::Count, Some(dec!(30)));
        let after_close = required_pace(&g, ts("2025-02-01T00:00:00Z"), &ten_days());
        assert_eq!(after_close, 30.0);
        let last_hours = required_pace(&g, ts("2025-01-10T18:00:00Z"), &ten_days());
        assert_eq!(last_hours, 30.0);
    }

    #[test]
    fn zero_length_window_has_no_pace() {
        let g = goal(GoalType::Count, Some(dec!(30)));
        let instant = Window::new(ts("2025-01-01T00:00:00Z"), ts("2025-01-01T20:00:00Z"));
        assert_eq!(required_pace(&g, ts("2025-01-01T01:00:00Z"), &instant), 0.0);
        assert_eq!(actual_pace(dec!(12), &instant), 0.0);
    }

    #[test]
    fn actual_pace_divides_by_window_days() {
        assert_eq!(actual_pace(dec!(25), &ten_days()), 2.5);
        assert_eq!(actual_pace(Decimal::ZERO, &ten_days()), 0.0);
    }
}
