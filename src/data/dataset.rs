use anyhow::{Context, Result};
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::models::{Goal, GoalStatus, LogEntry};

/// Goals and their logs as handed to the progress engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub logs: Vec<LogEntry>,
}

fn is_toml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}

impl Dataset {
    /// Load from JSON, or TOML when the extension is `.toml`.
    /// A missing file is an empty dataset.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("No data file at {:?}, starting empty", path);
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Reading {:?}", path))?;
        let dataset = if is_toml(path) {
            toml::from_str(&content).with_context(|| format!("Parsing {:?}", path))?
        } else {
            serde_json::from_str(&content).with_context(|| format!("Parsing {:?}", path))?
        };
        Ok(dataset)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = if is_toml(path) {
            toml::to_string_pretty(self).context("Serializing data file")?
        } else {
            serde_json::to_string_pretty(self).context("Serializing data file")?
        };
        std::fs::write(path, content).with_context(|| format!("Writing {:?}", path))?;
        Ok(())
    }

    /// Look a goal up by numeric id or case-insensitive name.
    pub fn find_goal(&self, key: &str) -> Option<&Goal> {
        if let Ok(id) = key.trim().parse::<i64>() {
            if let Some(goal) = self.goals.iter().find(|g| g.id == id) {
                return Some(goal);
            }
        }
        let key = key.trim().to_lowercase();
        self.goals.iter().find(|g| g.name.to_lowercase() == key)
    }

    /// Goals in `status`, or every goal when `status` is `None`.
    pub fn goals_with_status(&self, status: Option<GoalStatus>) -> impl Iterator<Item = &Goal> {
        self.goals
            .iter()
            .filter(move |g| status.is_none_or(|s| g.status == s))
    }

    pub fn logs_for(&self, goal_id: i64) -> Vec<LogEntry> {
        self.logs
            .iter()
            .filter(|l| l.goal_id == goal_id)
            .cloned()
            .collect()
    }

    /// Append `entry`, assigning the next free id. Returns that id.
    pub fn add_log(&mut self, mut entry: LogEntry) -> i64 {
        let id = self.logs.iter().filter_map(|l| l.id).max().unwrap_or(0) + 1;
        entry.id = Some(id);
        self.logs.push(entry);
        id
    }

    /// Attach `offset` to every naive timestamp so the engine only ever sees
    /// offset-aware values.
    pub fn normalize_timestamps(&mut self, offset: FixedOffset) {
        for goal in &mut self.goals {
            goal.start_at = goal.start_at.with_offset(offset);
            goal.end_at = goal.end_at.map(|end| end.with_offset(offset));
        }
        for log in &mut self.logs {
            log.date = log.date.with_offset(offset);
        }
    }
}
