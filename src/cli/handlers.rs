use anyhow::{Context, Result, anyhow};
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use std::path::Path;
use std::str::FromStr;

use goalpace::config::AppConfig;
use goalpace::data::Dataset;
use goalpace::models::{Goal, GoalStatus, GoalType, LogEntry, ProgressStats, Timestamp};
use goalpace::progress::{
    ChartBucket, calculate_progress_stats_at, chart_series, month_heatmap, overview_stats,
    parse_month, summarize_cycle,
};
use goalpace::utils::format::{
    format_decimal, format_pace, format_quantity, pad_display, progress_bar,
};

use crate::cli::args::ConfigCommands;

// ─── ANSI helpers ────────────────────────────────────────────────────────────

macro_rules! println_colored {
    ($color:expr, $($arg:tt)*) => {{
        print!("{}", $color);
        print!($($arg)*);
        println!("\x1b[0m");
    }};
}

const GREEN: &str = "\x1b[32m";
const AMBER: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const DIM: &str = "\x1b[2m";
const BOLD: &str = "\x1b[1m";
const GOLD: &str = "\x1b[38;2;196;160;68m";
const RESET: &str = "\x1b[0m";

const NAME_WIDTH: usize = 26;

// ─── Shared helpers ──────────────────────────────────────────────────────────

/// Parse a user-supplied timestamp, attaching the configured offset to naive
/// input. `None` means now.
fn parse_time(input: Option<&str>, config: &AppConfig) -> Result<Timestamp> {
    let Some(input) = input else {
        return Ok(Timestamp::now());
    };
    let ts = Timestamp::from_str(input)?;
    if config.time.normalize_naive {
        Ok(ts.with_offset(config.time.offset()?))
    } else {
        Ok(ts)
    }
}

fn find_goal<'a>(data: &'a Dataset, key: &str) -> Result<&'a Goal> {
    data.find_goal(key)
        .ok_or_else(|| anyhow!("Goal '{}' not found", key))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value).context("Serializing output")?);
    Ok(())
}

fn pct_color(pct: f64) -> &'static str {
    if pct >= 100.0 {
        GREEN
    } else if pct > 0.0 {
        AMBER
    } else {
        DIM
    }
}

// ─── Goals ───────────────────────────────────────────────────────────────────

pub fn handle_goals(data: &Dataset, config: &AppConfig, status: Option<&str>) -> Result<()> {
    let status = status.map(GoalStatus::from_str).transpose()?;
    let goals: Vec<&Goal> = data.goals_with_status(status).collect();

    println!();
    if goals.is_empty() {
        match status {
            Some(status) => println_colored!(DIM, "  No {} goals", status.as_str()),
            None => println_colored!(DIM, "  No goals yet"),
        }
        println!();
        return Ok(());
    }

    println_colored!(GOLD, "  Goals");
    println!();

    let now = Timestamp::now();
    for goal in goals {
        let stats = calculate_progress_stats_at(goal, &data.logs_for(goal.id), now);
        let detail = match goal.goal_type {
            GoalType::Open => format_quantity(stats.achieved_value, &goal.unit),
            _ => format!(
                "{}/{}",
                format_decimal(stats.achieved_value),
                format_quantity(stats.target, &goal.unit)
            ),
        };
        println!(
            "  {}  {}{}{}  {:>5.1}%  {}",
            pad_display(&goal.display_name(), NAME_WIDTH),
            pct_color(stats.progress_pct),
            progress_bar(stats.progress_pct, config.display.bar_width),
            RESET,
            stats.progress_pct,
            detail
        );
    }
    println!();
    Ok(())
}

// ─── Progress ────────────────────────────────────────────────────────────────

pub fn handle_progress(
    data: &Dataset,
    config: &AppConfig,
    goal_key: &str,
    now: Option<&str>,
    json: bool,
) -> Result<()> {
    let goal = find_goal(data, goal_key)?;
    let now = parse_time(now, config)?;
    let stats = calculate_progress_stats_at(goal, &data.logs_for(goal.id), now);

    if json {
        return print_json(&stats);
    }
    print_stats(goal, &stats, config);
    Ok(())
}

fn print_stats(goal: &Goal, stats: &ProgressStats, config: &AppConfig) {
    println!();
    println_colored!(
        GOLD,
        "  {}  ({} · {})",
        goal.display_name(),
        goal.goal_type,
        goal.timeframe_type
    );
    println!();
    println_colored!(
        DIM,
        "  Window:      {} → {}",
        stats.window.start.date(),
        stats.window.end.date()
    );

    if goal.goal_type != GoalType::Open {
        println!(
            "  Progress:    {}{}{}  {:.1}%",
            pct_color(stats.progress_pct),
            progress_bar(stats.progress_pct, config.display.bar_width),
            RESET,
            stats.progress_pct
        );
    }
    println!(
        "  Achieved:    {} / {}",
        format_decimal(stats.achieved_value),
        format_quantity(stats.target, &stats.unit)
    );
    println!(
        "  Pace:        {} needed · {} actual",
        format_pace(stats.required_pace, &stats.unit),
        format_pace(stats.actual_pace, &stats.unit)
    );

    if goal.goal_type == GoalType::Streak {
        println_colored!(
            BOLD,
            "  Streak:      {} days current  |  {} days best",
            stats.streak.current,
            stats.streak.best
        );
    }
    if !stats.milestones.is_empty() {
        println_colored!(GREEN, "  Milestones:  {}", stats.milestones.join(", "));
    }
    if stats.achieved {
        println!();
        println_colored!(GREEN, "  ✓ Target reached");
    }
    println!();
}

// ─── Log ─────────────────────────────────────────────────────────────────────

/// Append a log to the file at `path`. The file is loaded without timestamp
/// normalization so that existing entries are written back as they were.
pub fn handle_log(
    path: &Path,
    config: &AppConfig,
    goal_key: &str,
    value: &str,
    date: Option<&str>,
    note: Option<&str>,
) -> Result<()> {
    let mut data =
        Dataset::load(path).with_context(|| format!("Loading data from {:?}", path))?;
    let goal = find_goal(&data, goal_key)?;
    let (goal_id, goal_name, unit) = (goal.id, goal.display_name(), goal.unit.clone());

    let value = Decimal::from_str(value.trim())
        .map_err(|_| anyhow!("Invalid value '{}'", value))?;
    if value < Decimal::ZERO {
        return Err(anyhow!("Log values cannot be negative (got {})", value));
    }

    let mut entry = LogEntry::new(goal_id, parse_time(date, config)?, value);
    entry.note = note.map(str::to_string);
    let id = data.add_log(entry);
    data.save(path)?;

    log::info!("Appended log {} for goal {} to {:?}", id, goal_id, path);
    println_colored!(
        GREEN,
        "  ✓ Logged {} to {}",
        format_quantity(value, &unit),
        goal_name
    );
    Ok(())
}

// ─── Chart ───────────────────────────────────────────────────────────────────

pub fn handle_chart(
    data: &Dataset,
    config: &AppConfig,
    goal_key: &str,
    from: &str,
    to: &str,
    bucket: Option<&str>,
    json: bool,
) -> Result<()> {
    let goal = find_goal(data, goal_key)?;
    let from = parse_time(Some(from), config)?;
    let to = parse_time(Some(to), config)?;
    let bucket = match bucket {
        Some(bucket) => ChartBucket::from_str(bucket)?,
        None => config.display.chart_bucket,
    };

    let points = chart_series(&data.logs_for(goal.id), from, to, bucket);
    if json {
        return print_json(&points);
    }

    println!();
    println_colored!(GOLD, "  {} — {} chart", goal.display_name(), bucket);
    println!();
    if points.is_empty() {
        println_colored!(DIM, "  Nothing logged between {} and {}", from.date(), to.date());
        println!();
        return Ok(());
    }

    let total = points
        .last()
        .map(|p| p.cumulative)
        .unwrap_or(Decimal::ZERO);
    for point in &points {
        let share = if total.is_zero() {
            0.0
        } else {
            (point.cumulative / total * Decimal::ONE_HUNDRED)
                .to_f64()
                .unwrap_or(0.0)
        };
        println!(
            "  {}  {:>8}  {:>10}  {}{}{}",
            point.date,
            format!("+{}", format_decimal(point.value)),
            format_decimal(point.cumulative),
            GREEN,
            progress_bar(share, config.display.bar_width),
            RESET
        );
    }
    println!();
    Ok(())
}

// ─── Heatmap ─────────────────────────────────────────────────────────────────

pub fn handle_heatmap(data: &Dataset, goal_key: &str, month: &str, json: bool) -> Result<()> {
    let goal = find_goal(data, goal_key)?;
    let first = parse_month(month)?;
    let cells = month_heatmap(&data.logs_for(goal.id), first);

    if json {
        return print_json(&cells);
    }

    println!();
    println_colored!(GOLD, "  {} — {}", goal.display_name(), first.format("%B %Y"));
    println_colored!(DIM, "  (● = 4+, ◕ = 3, ◑ = 1-2, ○ = <1, · = nothing)");
    println!();
    println_colored!(DIM, "  Mo Tu We Th Fr Sa Su");

    print!("  {}", "   ".repeat(first.weekday().num_days_from_monday() as usize));
    for date in first.iter_days().take_while(|d| d.month() == first.month()) {
        let icon = match cells.iter().find(|c| c.date == date).map(|c| c.intensity) {
            Some(4) => format!("{}● {}", GREEN, RESET),
            Some(3) => format!("{}◕ {}", AMBER, RESET),
            Some(1) | Some(2) => format!("{}◑ {}", AMBER, RESET),
            Some(_) => format!("{}○ {}", DIM, RESET),
            None => format!("{}· {}", DIM, RESET),
        };
        print!("{} ", icon);
        if date.weekday().num_days_from_monday() == 6 {
            println!();
            print!("  ");
        }
    }
    println!();
    println!();
    Ok(())
}

// ─── Overview ────────────────────────────────────────────────────────────────

pub fn handle_overview(
    data: &Dataset,
    config: &AppConfig,
    now: Option<&str>,
    json: bool,
) -> Result<()> {
    let now = parse_time(now, config)?;
    let stats = overview_stats(&data.goals, &data.logs, now);

    if json {
        return print_json(&stats);
    }

    let date_or_dash = |d: Option<NaiveDate>| d.map(|d| d.to_string()).unwrap_or("—".to_string());

    println!();
    println_colored!(GOLD, "  Overview");
    println!();
    println!(
        "  Goals:           {} total  |  {} active  |  {} ended",
        stats.total_goals, stats.active_goals, stats.completed_goals
    );
    println!("  Logs:            {}", stats.total_logs);
    println!("  Best day:        {}", date_or_dash(stats.best_day));
    println!("  Best week:       {}", date_or_dash(stats.best_week));
    println_colored!(BOLD, "  Longest streak:  {} days", stats.longest_streak);
    println!("  Completion:      {:.1}%", stats.completion_rate);
    println!();
    Ok(())
}

// ─── Cycle ───────────────────────────────────────────────────────────────────

pub fn handle_cycle(
    data: &Dataset,
    config: &AppConfig,
    goal_key: &str,
    now: Option<&str>,
    json: bool,
) -> Result<()> {
    let goal = find_goal(data, goal_key)?;
    let now = parse_time(now, config)?;
    let summary = summarize_cycle(goal, &data.logs_for(goal.id), now);

    if json {
        return print_json(&summary);
    }

    println!();
    println_colored!(GOLD, "  {} — cycle {}", goal.display_name(), summary.cycle_index);
    println!();
    println_colored!(
        DIM,
        "  Period:      {} → {}",
        summary.start_at.date(),
        summary.end_at.date()
    );
    println!("  Total:       {}", format_quantity(summary.total, &goal.unit));
    if goal.goal_type == GoalType::Streak {
        println!("  Best streak: {} days", summary.streak_max);
    }
    if summary.achieved {
        println_colored!(GREEN, "  ✓ Achieved");
    } else {
        println_colored!(RED, "  ✗ Not achieved");
    }
    println!();
    Ok(())
}

// ─── Export ──────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct GoalExport<'a> {
    goal: &'a Goal,
    stats: ProgressStats,
}

pub fn handle_export(data: &Dataset, config: &AppConfig, now: Option<&str>) -> Result<()> {
    let now = parse_time(now, config)?;
    let export: Vec<GoalExport> = data
        .goals
        .iter()
        .map(|goal| GoalExport {
            goal,
            stats: calculate_progress_stats_at(goal, &data.logs_for(goal.id), now),
        })
        .collect();
    print_json(&export)
}

// ─── Config ──────────────────────────────────────────────────────────────────

pub fn handle_config(config: &AppConfig, action: &ConfigCommands) -> Result<()> {
    match action {
        ConfigCommands::Show => {
            println_colored!(DIM, "# {}", AppConfig::config_path()?.display());
            println_colored!(DIM, "# data file: {}", config.dataset_path()?.display());
            print!("{}", toml::to_string_pretty(config).context("Serializing config")?);
        }
        ConfigCommands::Init { force } => {
            let path = AppConfig::config_path()?;
            if path.exists() && !force {
                println_colored!(
                    AMBER,
                    "  Config already exists at {}. Use --force to overwrite.",
                    path.display()
                );
                return Ok(());
            }
            let path = AppConfig::default().save()?;
            println_colored!(GREEN, "  ✓ Wrote {}", path.display());
        }
    }
    Ok(())
}
