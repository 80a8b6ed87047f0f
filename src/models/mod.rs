pub mod goal;
pub mod log_entry;
pub mod stats;
pub mod timestamp;

pub use goal::{Goal, GoalStatus, GoalType, Milestone, TimeframeType};
pub use log_entry::LogEntry;
pub use stats::{
    ChartPoint, CycleSummary, HeatmapCell, OverviewStats, ProgressStats, Streak, Window,
};
pub use timestamp::Timestamp;
