use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

use crate::models::{Goal, GoalStatus, GoalType, LogEntry, OverviewStats, Timestamp};
use crate::progress::chart::ChartBucket;
use crate::progress::streak::{activity_by_date, streak_between};

/// Statistics across every goal a user owns.
pub fn overview_stats(goals: &[Goal], logs: &[LogEntry], now: Timestamp) -> OverviewStats {
    if goals.is_empty() {
        return OverviewStats::default();
    }

    let total_goals = goals.len();
    let active_goals = goals.iter().filter(|g| g.status == GoalStatus::Active).count();
    let completed_goals = goals.iter().filter(|g| g.status == GoalStatus::Ended).count();

    let daily = totals_by(logs, ChartBucket::Daily);
    let weekly = totals_by(logs, ChartBucket::Weekly);

    let longest_streak = goals
        .iter()
        .filter(|g| g.goal_type == GoalType::Streak)
        .map(|goal| {
            let own = logs.iter().filter(|l| l.goal_id == goal.id);
            let today = now.aligned_to(goal.start_at).date();
            streak_between(&activity_by_date(own), goal.start_at.date(), today).best
        })
        .max()
        .unwrap_or(0);

    OverviewStats {
        total_goals,
        active_goals,
        completed_goals,
        total_logs: logs.len(),
        best_day: busiest(&daily),
        best_week: busiest(&weekly),
        longest_streak,
        completion_rate: completed_goals as f64 / total_goals as f64 * 100.0,
    }
}

fn totals_by(logs: &[LogEntry], bucket: ChartBucket) -> BTreeMap<NaiveDate, Decimal> {
    let mut totals = BTreeMap::new();
    for log in logs {
        *totals.entry(bucket.bucket_start(log.date.date())).or_insert(Decimal::ZERO) += log.value;
    }
    totals
}

/// Date with the largest total; the earliest one wins a tie.
fn busiest(totals: &BTreeMap<NaiveDate, Decimal>) -> Option<NaiveDate> {
    let mut best: Option<(NaiveDate, Decimal)> = None;
    for (date, total) in totals {
        if best.is_none_or(|(_, top)| *total > top) {
            best = Some((*date, *total));
        }
    }
    best.map(|(date, _)| date)
}
