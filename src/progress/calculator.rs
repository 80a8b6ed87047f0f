use rust_decimal::Decimal;

use crate::models::{Goal, LogEntry, ProgressStats, Timestamp};
use crate::progress::aggregate::sum_in_window;
use crate::progress::milestones::milestones_reached;
use crate::progress::pace::{actual_pace, progress_percent, required_pace};
use crate::progress::streak::compute_streak;
use crate::progress::window::resolve_window;

/// Progress statistics for `goal` as of the current instant.
pub fn calculate_progress_stats(goal: &Goal, logs: &[LogEntry]) -> ProgressStats {
    calculate_progress_stats_at(goal, logs, Timestamp::now())
}

/// Progress statistics for `goal` as of `now`.
///
/// The window is resolved once and every figure is computed against it.
pub fn calculate_progress_stats_at(
    goal: &Goal,
    logs: &[LogEntry],
    now: Timestamp,
) -> ProgressStats {
    let window = resolve_window(goal, now);
    let achieved_value = sum_in_window(logs, &window);
    let progress_pct = progress_percent(goal, achieved_value);

    log::debug!(
        "Goal {} window {}..{}: {} achieved ({:.1}%)",
        goal.id,
        window.start,
        window.end,
        achieved_value,
        progress_pct
    );

    ProgressStats {
        progress_pct,
        achieved: progress_pct >= 100.0,
        achieved_value,
        target: goal.target.unwrap_or(Decimal::ZERO),
        unit: goal.unit.clone(),
        required_pace: required_pace(goal, now, &window),
        actual_pace: actual_pace(achieved_value, &window),
        streak: compute_streak(goal, logs, &window),
        milestones: milestones_reached(goal, progress_pct),
        window,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GoalType, Milestone, Streak};
    use rust_decimal_macros::dec;

    fn ts(s: &str) -> Timestamp {
        s.parse().unwrap()
    }

    fn fixed_goal(target: Option<Decimal>) -> Goal {
        Goal {
            id: 4,
            name: "Books".to_string(),
            emoji: "📚".to_string(),
            goal_type: GoalType::Count,
            unit: "books".to_string(),
            target,
            timeframe_type: "fixed".into(),
            start_at: ts("2025-01-01T00:00:00Z"),
            end_at: Some(ts("2025-01-31T00:00:00Z")),
            rolling_days: None,
            status: Default::default(),
            milestones: vec![
                Milestone {
                    threshold: 50.0,
                    label: "Half".to_string(),
                },
                Milestone {
                    threshold: 100.0,
                    label: "Done".to_string(),
                },
            ],
        }
    }

    fn logs(values: &[Decimal]) -> Vec<LogEntry> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| LogEntry::new(4, ts(&format!("2025-01-{:02}T10:00:00Z", i + 2)), *v))
            .collect()
    }

    #[test]
    fn reaching_target_is_achieved() {
        let stats = calculate_progress_stats_at(
            &fixed_goal(Some(dec!(100))),
            &logs(&[dec!(60), dec!(40)]),
            ts("2025-01-16T00:00:00Z"),
        );
        assert_eq!(stats.progress_pct, 100.0);
        assert!(stats.achieved);
        assert_eq!(stats.achieved_value, dec!(100));
        assert_eq!(stats.milestones, vec!["Half", "Done"]);
    }

    #[test]
    fn overachievement_is_clamped_but_value_reported() {
        let stats = calculate_progress_stats_at(
            &fixed_goal(Some(dec!(100))),
            &logs(&[dec!(100), dec!(50)]),
            ts("2025-01-16T00:00:00Z"),
        );
        assert_eq!(stats.progress_pct, 100.0);
        assert_eq!(stats.achieved_value, dec!(150));
        assert_eq!(stats.actual_pace, 5.0);
    }

    #[test]
    fn partial_progress_is_not_achieved() {
        let stats = calculate_progress_stats_at(
            &fixed_goal(Some(dec!(100))),
            &logs(&[dec!(30)]),
            ts("2025-01-21T00:00:00Z"),
        );
        assert_eq!(stats.progress_pct, 30.0);
        assert!(!stats.achieved);
        assert_eq!(stats.required_pace, 10.0);
        assert_eq!(stats.milestones, Vec::<String>::new());
        assert_eq!(stats.streak, Streak::default());
    }

    #[test]
    fn missing_target_reports_zero_target() {
        let stats = calculate_progress_stats_at(
            &fixed_goal(None),
            &logs(&[dec!(3)]),
            ts("2025-01-16T00:00:00Z"),
        );
        assert_eq!(stats.target, Decimal::ZERO);
        assert_eq!(stats.progress_pct, 0.0);
        assert_eq!(stats.required_pace, 0.0);
        assert!(!stats.achieved);
        assert_eq!(stats.unit, "books");
    }

    #[test]
    fn zero_target_with_activity_is_complete() {
        let now = ts("2025-01-16T00:00:00Z");
        let goal = fixed_goal(Some(Decimal::ZERO));
        assert_eq!(calculate_progress_stats_at(&goal, &logs(&[dec!(1)]), now).progress_pct, 100.0);
        assert_eq!(calculate_progress_stats_at(&goal, &[], now).progress_pct, 0.0);
    }

    #[test]
    fn reports_the_window_used() {
        let now = ts("2025-01-16T00:00:00Z");
        let stats = calculate_progress_stats_at(&fixed_goal(Some(dec!(10))), &[], now);
        assert_eq!(stats.window.start, ts("2025-01-01T00:00:00Z"));
        assert_eq!(stats.window.end, ts("2025-01-31T00:00:00Z"));
    }
}
