use crate::models::{CycleSummary, Goal, LogEntry, Timestamp};
use crate::progress::aggregate::sum_in_window;
use crate::progress::pace::progress_percent;
use crate::progress::streak::compute_streak;
use crate::progress::window::{cycle_index, resolve_window};

/// Summary of the cycle containing `now`. Non-recurring goals have a single
/// cycle with index 0 spanning their resolved window.
pub fn summarize_cycle(goal: &Goal, logs: &[LogEntry], now: Timestamp) -> CycleSummary {
    let window = resolve_window(goal, now);
    let total = sum_in_window(logs, &window);

    CycleSummary {
        goal_id: goal.id,
        cycle_index: cycle_index(goal, now).unwrap_or(0),
        start_at: window.start,
        end_at: window.end,
        total,
        achieved: progress_percent(goal, total) >= 100.0,
        streak_max: compute_streak(goal, logs, &window).best,
    }
}
