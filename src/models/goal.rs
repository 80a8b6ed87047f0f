use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::models::Timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalType {
    Count,
    Sum,
    Streak,
    Milestone,
    Open,
}

impl GoalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalType::Count => "count",
            GoalType::Sum => "sum",
            GoalType::Streak => "streak",
            GoalType::Milestone => "milestone",
            GoalType::Open => "open",
        }
    }
}

impl fmt::Display for GoalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for GoalType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "count" => Ok(GoalType::Count),
            "sum" => Ok(GoalType::Sum),
            "streak" => Ok(GoalType::Streak),
            "milestone" => Ok(GoalType::Milestone),
            "open" => Ok(GoalType::Open),
            _ => Err(Error::UnknownGoalType(s.to_string())),
        }
    }
}

/// How a goal's accounting window is derived.
///
/// Anything other than the three known kinds is kept verbatim in
/// `Unrecognized`; such goals are measured from `start_at` up to now.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TimeframeType {
    Fixed,
    Rolling,
    Recurring,
    Unrecognized(String),
}

impl TimeframeType {
    pub fn as_str(&self) -> &str {
        match self {
            TimeframeType::Fixed => "fixed",
            TimeframeType::Rolling => "rolling",
            TimeframeType::Recurring => "recurring",
            TimeframeType::Unrecognized(kind) => kind,
        }
    }
}

impl From<&str> for TimeframeType {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "fixed" => TimeframeType::Fixed,
            "rolling" => TimeframeType::Rolling,
            "recurring" => TimeframeType::Recurring,
            _ => TimeframeType::Unrecognized(s.to_string()),
        }
    }
}

impl From<String> for TimeframeType {
    fn from(s: String) -> Self {
        TimeframeType::from(s.as_str())
    }
}

impl From<TimeframeType> for String {
    fn from(value: TimeframeType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for TimeframeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    Draft,
    #[default]
    Active,
    Ended,
}

impl GoalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalStatus::Draft => "draft",
            GoalStatus::Active => "active",
            GoalStatus::Ended => "ended",
        }
    }
}

impl FromStr for GoalStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(GoalStatus::Draft),
            "active" => Ok(GoalStatus::Active),
            "ended" => Ok(GoalStatus::Ended),
            _ => Err(Error::UnknownGoalStatus(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    /// Percentage (0-100) at which the milestone counts as reached.
    #[serde(default)]
    pub threshold: f64,
    #[serde(default)]
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub emoji: String,
    pub goal_type: GoalType,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub target: Option<Decimal>,
    pub timeframe_type: TimeframeType,
    pub start_at: Timestamp,
    /// Only consulted by fixed timeframes.
    #[serde(default)]
    pub end_at: Option<Timestamp>,
    /// Window length for rolling goals, cycle length for recurring ones.
    #[serde(default)]
    pub rolling_days: Option<u32>,
    #[serde(default)]
    pub status: GoalStatus,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
}

impl Goal {
    /// The target, unless the goal is open-ended or has none configured.
    pub fn measurable_target(&self) -> Option<Decimal> {
        match self.goal_type {
            GoalType::Open => None,
            _ => self.target,
        }
    }

    pub fn display_name(&self) -> String {
        if self.emoji.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.emoji, self.name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_timeframe_is_kept_verbatim() {
        let tf: TimeframeType = "Quarterly".into();
        assert_eq!(tf, TimeframeType::Unrecognized("Quarterly".to_string()));
        assert_eq!(String::from(tf), "Quarterly");
        assert_eq!(TimeframeType::from("ROLLING"), TimeframeType::Rolling);
    }

    #[test]
    fn goal_type_parses_case_insensitively() {
        assert_eq!("Streak".parse::<GoalType>().unwrap(), GoalType::Streak);
        assert!("weekly".parse::<GoalType>().is_err());
    }

    #[test]
    fn goal_status_round_trips_through_str() {
        for status in [GoalStatus::Draft, GoalStatus::Active, GoalStatus::Ended] {
            assert_eq!(status.as_str().parse::<GoalStatus>().unwrap(), status);
        }
        assert_eq!("ENDED".parse::<GoalStatus>().unwrap(), GoalStatus::Ended);
        assert_eq!(
            "paused".parse::<GoalStatus>(),
            Err(Error::UnknownGoalStatus("paused".to_string()))
        );
    }

    #[test]
    fn deserializes_with_defaults() {
        let goal: Goal = serde_json::from_str(
            r#"{
                "id": 3,
                "name": "Read",
                "goal_type": "sum",
                "timeframe_type": "rolling",
                "start_at": "2025-01-01T00:00:00Z",
                "target": 300,
                "milestones": [{"threshold": 50, "label": "Halfway"}, {}]
            }"#,
        )
        .unwrap();
        assert_eq!(goal.status, GoalStatus::Active);
        assert_eq!(goal.rolling_days, None);
        assert_eq!(goal.target, Some(Decimal::from(300)));
        assert_eq!(goal.milestones[1].threshold, 0.0);
        assert_eq!(goal.milestones[1].label, "");
    }

    #[test]
    fn open_goals_have_no_measurable_target() {
        let mut goal: Goal = serde_json::from_str(
            r#"{"id": 1, "name": "Walk", "goal_type": "open", "timeframe_type": "fixed",
                "start_at": "2025-01-01", "target": 10}"#,
        )
        .unwrap();
        assert_eq!(goal.measurable_target(), None);
        goal.goal_type = GoalType::Count;
        assert_eq!(goal.measurable_target(), Some(Decimal::from(10)));
    }
}
