use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Timestamp;

/// Inclusive accounting range a goal is measured over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    pub start: Timestamp,
    pub end: Timestamp,
}

impl Window {
    pub fn new(start: Timestamp, end: Timestamp) -> Self {
        Self { start, end }
    }

    /// `start <= ts <= end`, with `ts` brought into the window's mode first.
    pub fn contains(&self, ts: Timestamp) -> bool {
        let ts = ts.aligned_to(self.start);
        self.start.cmp_aligned(&ts).is_le() && ts.cmp_aligned(&self.end).is_le()
    }

    /// Whole days between start and end.
    pub fn whole_days(&self) -> i64 {
        self.end.whole_days_since(self.start)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    pub current: u32,
    pub best: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressStats {
    pub progress_pct: f64,
    pub achieved: bool,
    pub achieved_value: Decimal,
    pub target: Decimal,
    pub unit: String,
    pub required_pace: f64,
    pub actual_pace: f64,
    pub streak: Streak,
    pub milestones: Vec<String>,
    pub window: Window,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub value: Decimal,
    pub cumulative: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapCell {
    pub date: NaiveDate,
    pub value: Decimal,
    /// 0 (nothing) to 4 (busiest).
    pub intensity: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverviewStats {
    pub total_goals: usize,
    pub active_goals: usize,
    pub completed_goals: usize,
    pub total_logs: usize,
    pub best_day: Option<NaiveDate>,
    pub best_week: Option<NaiveDate>,
    pub longest_streak: u32,
    pub completion_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleSummary {
    pub goal_id: i64,
    pub cycle_index: i64,
    pub start_at: Timestamp,
    pub end_at: Timestamp,
    pub total: Decimal,
    pub achieved: bool,
    pub streak_max: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> Timestamp {
        s.parse().unwrap()
    }

    #[test]
    fn window_bounds_are_inclusive() {
        let window = Window::new(ts("2025-01-01T00:00:00Z"), ts("2025-01-31T00:00:00Z"));
        assert!(window.contains(ts("2025-01-01T00:00:00Z")));
        assert!(window.contains(ts("2025-01-31T00:00:00Z")));
        assert!(!window.contains(ts("2025-01-31T00:00:01Z")));
        assert!(!window.contains(ts("2024-12-31T23:59:59Z")));
    }

    #[test]
    fn window_accepts_naive_stamps_against_aware_bounds() {
        let window = Window::new(ts("2025-01-01T00:00:00Z"), ts("2025-01-02T00:00:00Z"));
        assert!(window.contains(ts("2025-01-01T12:00:00")));
        assert!(!window.contains(ts("2025-01-03T12:00:00")));
    }

    #[test]
    fn window_whole_days() {
        let window = Window::new(ts("2025-01-01T00:00:00"), ts("2025-01-08T12:00:00"));
        assert_eq!(window.whole_days(), 7);
    }
}
