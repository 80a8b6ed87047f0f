//! Progress-statistics engine.
//!
//! Everything here is a pure function of a goal, its logs and a reference
//! time. Nothing reads configuration, the clock (except
//! [`calculate_progress_stats`]) or the filesystem.

pub mod aggregate;
pub mod calculator;
pub mod chart;
pub mod cycle;
pub mod heatmap;
pub mod milestones;
pub mod overview;
pub mod pace;
pub mod streak;
pub mod window;

pub use aggregate::sum_in_window;
pub use calculator::{calculate_progress_stats, calculate_progress_stats_at};
pub use chart::{ChartBucket, chart_series};
pub use cycle::summarize_cycle;
pub use heatmap::{month_heatmap, parse_month};
pub use milestones::milestones_reached;
pub use overview::overview_stats;
pub use pace::{actual_pace, progress_percent, required_pace};
pub use streak::compute_streak;
pub use window::{cycle_index, resolve_window};
